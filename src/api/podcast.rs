use crate::api::models::*;
use once_cell::sync::Lazy;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Thin client for the episode API (a json-server style REST endpoint).
pub struct PodcastClient {
    pub base_url: String,
}

impl PodcastClient {
    pub fn new() -> Self {
        Self::with_base_url(option_env!("RUSTCAST_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}/{}", self.base_url, endpoint);
        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&format!("{}={}", key, urlencoding::encode(value)));
        }
        url
    }

    // Slugs come from route parameters and may carry characters that are
    // reserved in URLs
    fn episode_url(&self, id: &str) -> String {
        self.build_url(&format!("episodes/{}", urlencoding::encode(id)), &[])
    }

    /// Fetch the newest `limit` episodes, sorted by publication date,
    /// newest first, already normalized for display.
    pub async fn get_episodes(&self, limit: u32) -> Result<Vec<Episode>, String> {
        let limit = limit.to_string();
        let url = self.build_url(
            "episodes",
            &[
                ("_limit", limit.as_str()),
                ("_sort", "published_at"),
                ("_order", "desc"),
            ],
        );

        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let raw: Vec<RawEpisode> = response.json().await.map_err(|e| e.to_string())?;

        Ok(raw.into_iter().map(Episode::from_raw).collect())
    }

    /// Fetch a single episode by its id/slug.
    pub async fn get_episode(&self, id: &str) -> Result<Episode, String> {
        let url = self.episode_url(id);

        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("episode '{}' not found ({})", id, response.status()));
        }
        let raw: RawEpisode = response.json().await.map_err(|e| e.to_string())?;

        Ok(Episode::from_raw(raw))
    }
}

impl Default for PodcastClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed() {
        let client = PodcastClient::with_base_url("http://localhost:3333/");
        assert_eq!(client.base_url, "http://localhost:3333");
    }

    #[test]
    fn build_url_appends_query_params() {
        let client = PodcastClient::with_base_url("http://localhost:3333");
        let url = client.build_url("episodes", &[("_limit", "12"), ("_order", "desc")]);
        assert_eq!(url, "http://localhost:3333/episodes?_limit=12&_order=desc");
    }

    #[test]
    fn build_url_without_params_has_no_query() {
        let client = PodcastClient::with_base_url("http://localhost:3333");
        assert_eq!(
            client.build_url("episodes/ep-1", &[]),
            "http://localhost:3333/episodes/ep-1"
        );
    }

    #[test]
    fn build_url_percent_encodes_param_values() {
        let client = PodcastClient::with_base_url("http://localhost:3333");
        assert_eq!(
            client.build_url("episodes", &[("_sort", "published at")]),
            "http://localhost:3333/episodes?_sort=published%20at"
        );
    }

    #[test]
    fn episode_url_percent_encodes_the_slug() {
        let client = PodcastClient::with_base_url("http://localhost:3333");
        assert_eq!(
            client.episode_url("ep 1&2#intro"),
            "http://localhost:3333/episodes/ep%201%262%23intro"
        );
    }
}
