//! # Response
//!
//! Module dedicated to the record handed back to the host status bar
//! after each poll.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::{config::MAX_INTERVAL, CollectorConfig};

/// The color hint of a response.
///
/// The host maps it to its own palette. [`Color::Normal`] means "use
/// the host default".
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Normal,
    Warning,
    Error,
}

impl Color {
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// The response of a collector poll.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusResponse {
    /// The collector identifier.
    pub name: String,
    pub order: i64,
    pub text: String,
    pub color: Color,

    /// The instant until which the host can reuse this response.
    pub cached_until: SystemTime,
}

impl StatusResponse {
    /// Builds a response from the collector config. The cache expiry
    /// is `now + interval`, the interval being capped to
    /// [`MAX_INTERVAL`].
    pub fn new(
        name: impl ToString,
        config: &CollectorConfig,
        text: impl ToString,
        color: Color,
        now: SystemTime,
    ) -> Self {
        Self {
            name: name.to_string(),
            order: config.order,
            text: text.to_string(),
            color,
            cached_until: now
                .checked_add(Duration::from_secs(config.interval.min(MAX_INTERVAL)))
                .unwrap_or(now),
        }
    }

    /// Converts the response into the `(order, block)` pair expected
    /// by the host.
    pub fn to_block(&self) -> (i64, Block) {
        let block = Block {
            full_text: self.text.clone(),
            name: self.name.clone(),
            color: self.color,
            cached_until: self
                .cached_until
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs_f64())
                .unwrap_or_default(),
        };

        (self.order, block)
    }

    /// Serializes the `(order, block)` pair as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_block())
    }
}

/// The record rendered by the host.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Block {
    pub full_text: String,
    pub name: String,
    #[serde(skip_serializing_if = "Color::is_normal")]
    pub color: Color,
    /// Unix timestamp, in seconds.
    pub cached_until: f64,
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use serde_json::json;

    use crate::{config::MAX_INTERVAL, CollectorConfig, Color, StatusResponse};

    fn config(interval: u64) -> CollectorConfig {
        CollectorConfig {
            title: "MAIL:".into(),
            order: 3,
            interval,
        }
    }

    #[test]
    fn cached_until_is_now_plus_interval() {
        for interval in [0, 60] {
            let now = SystemTime::now();
            let res = StatusResponse::new("mailstatus", &config(interval), "MAIL: 0", Color::Normal, now);
            assert!(res.cached_until >= now);
            assert_eq!(
                res.cached_until.duration_since(now).unwrap(),
                Duration::from_secs(interval)
            );
        }
    }

    #[test]
    fn cached_until_caps_huge_intervals() {
        let now = SystemTime::now();
        let res = StatusResponse::new("mailstatus", &config(u64::MAX), "MAIL: 0", Color::Normal, now);
        assert_eq!(
            res.cached_until.duration_since(now).unwrap(),
            Duration::from_secs(MAX_INTERVAL)
        );
    }

    #[test]
    fn block_omits_normal_color() {
        let now = UNIX_EPOCH + Duration::from_secs(1000);
        let res = StatusResponse::new("mailstatus", &config(60), "MAIL: 0", Color::Normal, now);

        let (order, block) = res.to_block();
        assert_eq!(order, 3);
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "full_text": "MAIL: 0",
                "name": "mailstatus",
                "cached_until": 1060.0,
            })
        );
    }

    #[test]
    fn block_keeps_other_colors() {
        let now = UNIX_EPOCH;
        let res = StatusResponse::new("taskstatus", &config(0), "TASK: 1/2", Color::Error, now);

        let pair = res.to_block();
        assert_eq!(
            serde_json::to_value(&pair).unwrap(),
            json!([3, {
                "full_text": "TASK: 1/2",
                "name": "taskstatus",
                "color": "error",
                "cached_until": 0.0,
            }])
        );
    }
}
