use std::io::BufReader;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use ical::parser::ical::component::IcalEvent;
use ical::property::Property;
use log::debug;

use crate::error::Error;
use crate::event::schedule_offset;

/// One VEVENT as it came out of the feed, times still at whatever offset the
/// parser resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

/// Fetches a feed body over HTTP. Non-2xx responses are errors.
pub fn fetch(url: &str) -> Result<String, Error> {
    debug!("requesting {url}");

    let fetch_error = |source| Error::Fetch {
        url: url.to_string(),
        source,
    };

    reqwest::blocking::get(url)
        .map_err(fetch_error)?
        .error_for_status()
        .map_err(fetch_error)?
        .text()
        .map_err(fetch_error)
}

/// Parses every VEVENT of every calendar in `body`. Events without a
/// parseable DTSTART or DTEND are dropped; a calendar without events is
/// simply an empty list.
pub fn parse(body: &str) -> Result<Vec<RawEvent>, Error> {
    let mut events = Vec::new();

    for calendar in ical::IcalParser::new(BufReader::new(body.as_bytes())) {
        let calendar = calendar.map_err(|err| Error::Parse(err.into()))?;
        events.extend(calendar.events.iter().filter_map(raw_event));
    }

    debug!("parsed {} events", events.len());
    Ok(events)
}

fn raw_event(event: &IcalEvent) -> Option<RawEvent> {
    let start = timestamp(property(event, "DTSTART")?)?;
    let end = timestamp(property(event, "DTEND")?)?;

    let summary = text_value(property(event, "SUMMARY")).unwrap_or_default();
    let description = text_value(property(event, "DESCRIPTION"));
    let location = text_value(property(event, "LOCATION"));

    Some(RawEvent {
        summary,
        description,
        location,
        start,
        end,
    })
}

fn property<'a>(event: &'a IcalEvent, name: &str) -> Option<&'a Property> {
    event.properties.iter().find(|property| property.name == name)
}

fn text_value(property: Option<&Property>) -> Option<String> {
    property
        .and_then(|property| property.value.as_deref())
        .map(unescape)
}

// RFC 5545 TEXT escapes: `\\`, `\;`, `\,`, and `\n`/`\N`.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(escaped) => out.push(escaped),
            None => out.push('\\'),
        }
    }

    out
}

// Feeds carry UTC instants (`...Z`), floating local times, or bare dates.
// Floating times, TZID-qualified times, and dates are taken at the schedule
// offset directly, there is no timezone database lookup.
fn timestamp(property: &Property) -> Option<DateTime<FixedOffset>> {
    let value = property.value.as_deref()?;

    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%SZ") {
        return Some(datetime.and_utc().fixed_offset());
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%S") {
        return schedule_offset().from_local_datetime(&datetime).single();
    }

    let date = NaiveDate::parse_from_str(value, "%Y%m%d").ok()?;
    schedule_offset()
        .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
        .single()
}
