use super::localizer::{DateTimeLocalizer, LocalDateTime};
use serde::{Deserialize, Serialize};

/// Start and end of a scheduled evaluation event as the backend stores them (UTC).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWindow {
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalEventWindow {
    pub start: LocalDateTime,
    pub end: LocalDateTime,
}

impl DateTimeLocalizer {
    pub fn localize_window(&self, window: &EventWindow) -> LocalEventWindow {
        LocalEventWindow {
            start: self.localize(&window.start_date, &window.start_time),
            end: self.localize(&window.end_date, &window.end_time),
        }
    }
}
