use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;

use crate::feed::RawEvent;

static SCHEDULE_OFFSET: Lazy<FixedOffset> = Lazy::new(|| FixedOffset::east_opt(3600).unwrap());

/// The fixed UTC+1 offset every schedule time is shown at, whatever offset
/// the feed carried.
pub fn schedule_offset() -> FixedOffset {
    *SCHEDULE_OFFSET
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEvent {
    pub summary: String,
    pub presenter: Option<String>,
    pub location: Option<String>,
    pub from: DateTime<FixedOffset>,
    pub to: DateTime<FixedOffset>,
}

impl NormalizedEvent {
    /// The trimmed presenter, only when there is something to show.
    pub fn presenter(&self) -> Option<&str> {
        self.presenter
            .as_deref()
            .map(str::trim)
            .filter(|presenter| !presenter.is_empty())
    }
}

/// Maps raw feed events onto the schedule offset and sorts them by start
/// time. The sort is stable, events starting at the same instant keep their
/// feed order. Nothing is filtered out here.
pub fn normalize(raw: Vec<RawEvent>) -> Vec<NormalizedEvent> {
    let mut events: Vec<NormalizedEvent> = raw
        .into_iter()
        .map(|event| NormalizedEvent {
            summary: event.summary,
            presenter: event.description,
            location: event.location,
            from: event.start.with_timezone(&schedule_offset()),
            to: event.end.with_timezone(&schedule_offset()),
        })
        .collect();

    events.sort_by_key(|event| event.from);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn raw(summary: &str, start: DateTime<FixedOffset>) -> RawEvent {
        RawEvent {
            summary: summary.to_string(),
            description: None,
            location: None,
            start,
            end: start,
        }
    }

    #[test]
    fn converts_to_schedule_offset() {
        let start = Utc.with_ymd_and_hms(2024, 5, 3, 9, 0, 0).unwrap().fixed_offset();
        let events = normalize(vec![raw("Keynote", start)]);

        let expected = schedule_offset().with_ymd_and_hms(2024, 5, 3, 10, 0, 0).unwrap();
        assert_eq!(events[0].from, expected);
        assert_eq!(events[0].from.offset(), &schedule_offset());
    }

    #[test]
    fn sorts_by_start_time() {
        let offset = schedule_offset();
        let later = raw("b", offset.with_ymd_and_hms(2024, 5, 3, 11, 0, 0).unwrap());
        let earlier = raw("a", offset.with_ymd_and_hms(2024, 5, 3, 9, 0, 0).unwrap());

        let events = normalize(vec![later, earlier]);
        assert_eq!(events[0].summary, "a");
        assert_eq!(events[1].summary, "b");
    }

    #[test]
    fn equal_start_times_keep_feed_order() {
        let at = schedule_offset().with_ymd_and_hms(2024, 5, 3, 9, 0, 0).unwrap();
        let events = normalize(vec![raw("first", at), raw("second", at)]);

        assert_eq!(events[0].summary, "first");
        assert_eq!(events[1].summary, "second");
    }

    #[test]
    fn description_becomes_presenter() {
        let at = schedule_offset().with_ymd_and_hms(2024, 5, 3, 9, 0, 0).unwrap();
        let mut event = raw("Talk", at);
        event.description = Some("Alice".to_string());

        let events = normalize(vec![event]);
        assert_eq!(events[0].presenter(), Some("Alice"));
    }

    #[test]
    fn blank_presenter_reads_as_absent() {
        let at = schedule_offset().with_ymd_and_hms(2024, 5, 3, 9, 0, 0).unwrap();

        let mut event = raw("Talk", at);
        event.description = Some("   ".to_string());
        assert_eq!(normalize(vec![event])[0].presenter(), None);

        let event = raw("Talk", at);
        assert_eq!(normalize(vec![event])[0].presenter(), None);
    }

    #[test]
    fn presenter_is_trimmed() {
        let at = schedule_offset().with_ymd_and_hms(2024, 5, 3, 9, 0, 0).unwrap();
        let mut event = raw("Talk", at);
        event.description = Some("  Alice \n".to_string());

        assert_eq!(normalize(vec![event])[0].presenter(), Some("Alice"));
    }
}
