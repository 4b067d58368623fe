//! Scene sync-point timestamps.

/// Parser for the `mm:ss` sync codes carried by storyboard scenes.
///
/// Accepts `m:ss`, `mm:ss` and `h:mm:ss`, with optional fractional seconds and
/// surrounding brackets.
///
/// # Examples
///
/// ```
/// use storyboard_core::SceneTimestamp;
///
/// assert_eq!(SceneTimestamp::parse_seconds("01:30"), Some(90.0));
/// assert_eq!(SceneTimestamp::parse_seconds("[0:07.5]"), Some(7.5));
/// assert_eq!(SceneTimestamp::parse_seconds("1:02:03"), Some(3723.0));
/// assert_eq!(SceneTimestamp::parse_seconds("intro"), None);
/// ```
pub struct SceneTimestamp;

impl SceneTimestamp {
    /// Seconds from the start of the song, or None if the code is unreadable.
    pub fn parse_seconds(code: &str) -> Option<f64> {
        let trimmed = code.trim().trim_start_matches('[').trim_end_matches(']').trim();
        let fields: Vec<&str> = trimmed.split(':').collect();
        if !(2..=3).contains(&fields.len()) {
            return None;
        }

        let (seconds_field, whole_fields) = fields.split_last()?;
        let seconds: f64 = seconds_field.trim().parse().ok()?;
        if !seconds.is_finite() || seconds < 0.0 {
            return None;
        }

        let mut total = 0.0;
        for field in whole_fields {
            let value: u32 = field.trim().parse().ok()?;
            total = total * 60.0 + f64::from(value);
        }
        Some(total * 60.0 + seconds)
    }

    /// Format seconds as `m:ss`.
    pub fn format(seconds: f64) -> String {
        let whole = seconds.max(0.0).floor() as u64;
        format!("{}:{:02}", whole / 60, whole % 60)
    }
}
