use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{empty_command_error, missing_location_error, Error};

static LOCATIONS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"from\s+(.+?)\s+to\s+(.+?)(?:\s+at|$)").unwrap());

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"at\s+(\d{1,2})(?::(\d{2}))?\s*(am|pm)?").unwrap());

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub pickup: String,
    pub dropoff: String,
    pub time: DateTime<Utc>,
    pub should_book: bool,
}

/// Parses a free-text booking instruction such as
/// `"book a cab from noida to mumbai at 7pm"`.
///
/// A bare hour below 12 with no meridiem is read as PM: `"at 9"` books 9pm,
/// so a morning request has to spell out `9am`. That is shipped product
/// behavior and is kept here as-is.
pub fn parse_command(input: &str, now: DateTime<Utc>) -> Result<ParsedCommand, Error> {
    if input.trim().is_empty() {
        return Err(empty_command_error());
    }

    let lowered = input.to_lowercase();

    let (pickup, dropoff) = match LOCATIONS_RE.captures(&lowered) {
        Some(caps) => (caps[1].trim().to_string(), caps[2].trim().to_string()),
        None => scan_locations(&lowered),
    };

    if pickup.is_empty() || dropoff.is_empty() {
        return Err(missing_location_error());
    }

    Ok(ParsedCommand {
        pickup,
        dropoff,
        time: parse_time(&lowered, now),
        should_book: true,
    })
}

/// Fallback when the `from .. to ..` pattern is absent: everything between
/// the leading command word and `to` is the pickup, everything between `to`
/// and `at` (or the end) is the dropoff.
fn scan_locations(command: &str) -> (String, String) {
    let words: Vec<&str> = command.split_whitespace().collect();

    let to_index = match words.iter().position(|word| *word == "to") {
        Some(index) if index > 0 => index,
        _ => return (String::new(), String::new()),
    };

    let joined = words[1..to_index].join(" ");
    let pickup = joined
        .strip_prefix("from")
        .unwrap_or(&joined)
        .trim()
        .to_string();

    let end = words
        .iter()
        .position(|word| *word == "at")
        .unwrap_or(words.len());
    let dropoff = if end > to_index + 1 {
        words[to_index + 1..end].join(" ")
    } else {
        String::new()
    };

    (pickup, dropoff)
}

fn parse_time(command: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    let caps = match TIME_RE.captures(command) {
        Some(caps) => caps,
        None => return now,
    };

    let mut hours: u32 = match caps[1].parse() {
        Ok(hours) => hours,
        Err(_) => return now,
    };
    let minutes: u32 = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    let meridiem = caps.get(3).map(|m| m.as_str());

    match meridiem {
        Some("pm") if hours < 12 => hours += 12,
        Some("am") if hours == 12 => hours = 0,
        None if hours < 12 => hours += 12,
        _ => {}
    }

    let scheduled = match now.date_naive().and_hms_opt(hours, minutes, 0) {
        Some(scheduled) => scheduled.and_utc(),
        // malformed time-of-day, keep "now"
        None => return now,
    };

    if scheduled < now {
        scheduled + Duration::days(1)
    } else {
        scheduled
    }
}
