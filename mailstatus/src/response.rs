use std::time::SystemTime;

use status::{CollectorConfig, Color, StatusResponse};

use crate::{Unread, NAME};

/// Renders the result of a poll.
pub fn render(config: &CollectorConfig, unread: Unread, now: SystemTime) -> StatusResponse {
    let title = &config.title;

    let (text, color) = match unread {
        Unread::NoMailbox => (format!("{title} no mailbox configured"), Color::Error),
        Unread::Count(0) => (format!("{title} 0"), Color::Normal),
        Unread::Count(n) => (format!("{title} {n}"), Color::Warning),
    };

    StatusResponse::new(NAME, config, text, color, now)
}
