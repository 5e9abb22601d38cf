use crate::utils::convert_duration_to_time_string;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Audio file payload nested inside an episode record on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EpisodeFile {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub duration: u32,
}

/// Episode record exactly as the podcast API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RawEpisode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    #[serde(default, alias = "publishedAt")]
    pub published_at: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub file: EpisodeFile,
}

/// Normalized episode used by the rest of the app. Flat, immutable, with
/// display strings precomputed so views and the player never re-derive them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub members: String,
    pub published_at: String,
    pub thumbnail: String,
    pub description: String,
    pub duration: u32,
    pub duration_as_string: String,
    pub url: String,
}

impl Episode {
    pub fn from_raw(raw: RawEpisode) -> Self {
        let duration = raw.file.duration;
        Self {
            id: raw.id,
            title: raw.title,
            members: raw.members,
            published_at: format_published_at(&raw.published_at),
            thumbnail: raw.thumbnail,
            description: raw.description,
            duration,
            duration_as_string: convert_duration_to_time_string(duration),
            url: raw.file.url,
        }
    }
}

/// Render an ISO-ish publication timestamp as "22 Jan 21". Unparseable
/// values pass through untouched so a bad record still renders something.
pub fn format_published_at(value: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return parsed.format("%-d %b %y").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return parsed.format("%-d %b %y").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return parsed.format("%-d %b %y").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return parsed.format("%-d %b %y").to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawEpisode {
        RawEpisode {
            id: "a-conversa-vai-comecar".to_string(),
            title: "The conversation is about to start".to_string(),
            members: "Ada, Grace and Margaret".to_string(),
            published_at: "2021-01-22T16:35:40".to_string(),
            thumbnail: "https://example.com/thumb.jpg".to_string(),
            description: "<p>Pilot episode.</p>".to_string(),
            file: EpisodeFile {
                url: "https://example.com/ep1.mp3".to_string(),
                duration: 3725,
            },
        }
    }

    #[test]
    fn normalization_flattens_file_fields() {
        let episode = Episode::from_raw(raw());
        assert_eq!(episode.url, "https://example.com/ep1.mp3");
        assert_eq!(episode.duration, 3725);
        assert_eq!(episode.duration_as_string, "01:02:05");
    }

    #[test]
    fn published_at_is_formatted() {
        let episode = Episode::from_raw(raw());
        assert_eq!(episode.published_at, "22 Jan 21");
    }

    #[test]
    fn published_at_formats_common_shapes() {
        assert_eq!(format_published_at("2021-01-22T16:35:40Z"), "22 Jan 21");
        assert_eq!(format_published_at("2021-01-22 16:35:40"), "22 Jan 21");
        assert_eq!(format_published_at("2021-01-22"), "22 Jan 21");
        assert_eq!(format_published_at("someday"), "someday");
    }

    #[test]
    fn raw_episode_tolerates_missing_fields() {
        let episode: RawEpisode =
            serde_json::from_str(r#"{"id": "ep", "title": "Untitled"}"#).unwrap();
        assert_eq!(episode.id, "ep");
        assert_eq!(episode.file.duration, 0);
        assert!(episode.file.url.is_empty());
    }
}
