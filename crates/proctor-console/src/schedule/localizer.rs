use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Fallback text shown when a timestamp cannot be localised.
pub const UNAVAILABLE_PLACEHOLDER: &str = "No disponible";

/// Civil date (`DD/MM/YYYY`) and 24-hour time (`HH:MM`) in the viewer's zone.
///
/// Both fields are empty when the input could not be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalDateTime {
    pub local_date: String,
    pub local_time: String,
}

impl LocalDateTime {
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_available(&self) -> bool {
        !self.local_date.is_empty() && !self.local_time.is_empty()
    }

    pub fn date_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.local_date.is_empty() {
            placeholder
        } else {
            &self.local_date
        }
    }

    pub fn time_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.local_time.is_empty() {
            placeholder
        } else {
            &self.local_time
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown time zone '{0}'")]
pub struct UnknownTimeZone(pub String);

/// Renders UTC wall-clock date/time pairs in a fixed target zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeLocalizer {
    zone: Tz,
}

impl DateTimeLocalizer {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    pub fn from_name(name: &str) -> Result<Self, UnknownTimeZone> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|_| UnknownTimeZone(name.to_string()))
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn localize(&self, date: &str, time: &str) -> LocalDateTime {
        match parse_utc(date, time) {
            Some(naive) => {
                let local = Utc.from_utc_datetime(&naive).with_timezone(&self.zone);
                LocalDateTime {
                    local_date: local.format("%d/%m/%Y").to_string(),
                    local_time: local.format("%H:%M").to_string(),
                }
            }
            None => LocalDateTime::unavailable(),
        }
    }
}

/// Localise a UTC date/time pair into `time_zone`.
///
/// Unparseable dates, times or zone names all yield [`LocalDateTime::unavailable`].
pub fn localize(date: &str, time: &str, time_zone: &str) -> LocalDateTime {
    match DateTimeLocalizer::from_name(time_zone) {
        Ok(localizer) => localizer.localize(date, time),
        Err(_) => LocalDateTime::unavailable(),
    }
}

fn parse_utc(date: &str, time: &str) -> Option<NaiveDateTime> {
    Some(NaiveDateTime::new(parse_date(date)?, parse_time(time)?))
}

/// Accepts `YYYY-MM-DD` or `DD/MM/YYYY`.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let (year, month, day) = if let Some(parts) = split_fields(raw, '-') {
        let [year, month, day] = parts;
        (year, month, day)
    } else if let Some(parts) = split_fields(raw, '/') {
        let [day, month, year] = parts;
        (year, month, day)
    } else {
        return None;
    };

    if year.len() != 4 {
        return None;
    }

    NaiveDate::from_ymd_opt(
        number(year)? as i32,
        number(month)?,
        number(day)?,
    )
}

/// Accepts `HH:MM` or `HH:MM AM|PM` (single space, any case).
pub(crate) fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    let (clock, meridiem) = match raw.split_once(' ') {
        Some((clock, suffix)) => (clock, Some(suffix)),
        None => (raw, None),
    };

    let (hour, minute) = clock.split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    let hour = number(hour)?;
    let minute = number(minute)?;

    let hour = match meridiem {
        None => hour,
        Some(suffix) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            match suffix.to_ascii_uppercase().as_str() {
                "AM" => hour % 12,
                "PM" => hour % 12 + 12,
                _ => return None,
            }
        }
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn split_fields(raw: &str, separator: char) -> Option<[&str; 3]> {
    let mut fields = raw.split(separator);
    let parts = [fields.next()?, fields.next()?, fields.next()?];
    if fields.next().is_some() {
        return None;
    }
    Some(parts)
}

fn number(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 4 || !field.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
