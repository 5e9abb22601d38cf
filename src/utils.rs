/// Utility helpers for RustCast

/// Format a duration in seconds as a zero-padded "HH:MM:SS" string.
pub fn convert_duration_to_time_string(duration: u32) -> String {
    let hours = duration / 3600;
    let minutes = (duration % 3600) / 60;
    let seconds = duration % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Clamp a requested seek position into the playable range of an episode,
/// `0.0..=duration` seconds.
pub fn clamp_seek_position(position: f64, duration: u32) -> f64 {
    position.clamp(0.0, f64::from(duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration() {
        assert_eq!(convert_duration_to_time_string(0), "00:00:00");
    }

    #[test]
    fn mixed_units() {
        assert_eq!(convert_duration_to_time_string(3725), "01:02:05");
    }

    #[test]
    fn under_a_minute() {
        assert_eq!(convert_duration_to_time_string(59), "00:00:59");
    }

    #[test]
    fn exact_hour() {
        assert_eq!(convert_duration_to_time_string(3600), "01:00:00");
    }

    #[test]
    fn long_episode() {
        assert_eq!(convert_duration_to_time_string(10 * 3600 + 15 * 60 + 3), "10:15:03");
    }

    #[test]
    fn seek_within_range_passes_through() {
        assert_eq!(clamp_seek_position(120.5, 3725), 120.5);
    }

    #[test]
    fn seek_to_exact_duration_is_kept() {
        assert_eq!(clamp_seek_position(3725.0, 3725), 3725.0);
    }

    #[test]
    fn seek_past_the_end_clamps_to_duration() {
        assert_eq!(clamp_seek_position(9999.0, 3725), 3725.0);
    }

    #[test]
    fn negative_seek_clamps_to_start() {
        assert_eq!(clamp_seek_position(-5.0, 3725), 0.0);
    }
}
