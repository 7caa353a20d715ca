//! Rendering of backend UTC timestamps in a viewer's time zone.

mod localizer;
mod window;

pub use chrono_tz::Tz;
pub use localizer::{
    localize, DateTimeLocalizer, LocalDateTime, UnknownTimeZone, UNAVAILABLE_PLACEHOLDER,
};
pub use window::{EventWindow, LocalEventWindow};
