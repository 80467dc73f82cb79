use std::time::SystemTime;

use status::{CollectorConfig, Color, StatusResponse};

use crate::{TaskCounts, NAME};

/// Renders the result of a poll.
pub fn render(config: &CollectorConfig, counts: TaskCounts, now: SystemTime) -> StatusResponse {
    let title = &config.title;
    let TaskCounts { open, overdue } = counts;

    let (text, color) = if overdue > 0 {
        (format!("{title} {overdue}/{open}"), Color::Error)
    } else {
        (format!("{title} {open}"), Color::Normal)
    };

    StatusResponse::new(NAME, config, text, color, now)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use status::{CollectorConfig, Color};

    use super::render;
    use crate::TaskCounts;

    #[test]
    fn render_overdue() {
        let config = CollectorConfig::new("TASK:");
        let res = render(
            &config,
            TaskCounts {
                open: 10,
                overdue: 3,
            },
            SystemTime::now(),
        );

        assert_eq!(res.text, "TASK: 3/10");
        assert_eq!(res.color, Color::Error);
        assert_eq!(res.name, "taskstatus");
    }

    #[test]
    fn render_open() {
        let config = CollectorConfig {
            order: 4,
            interval: 60,
            ..CollectorConfig::new("TASK:")
        };
        let now = SystemTime::now();
        let res = render(
            &config,
            TaskCounts {
                open: 10,
                overdue: 0,
            },
            now,
        );

        assert_eq!(res.text, "TASK: 10");
        assert_eq!(res.color, Color::Normal);
        assert_eq!(res.order, 4);
        assert_eq!(res.cached_until, now + Duration::from_secs(60));
    }
}
