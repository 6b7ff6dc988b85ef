use chrono::NaiveDate;

use crate::event::NormalizedEvent;

/// The events of one calendar date, in the order they came in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventGroup {
    pub date: NaiveDate,
    pub events: Vec<NormalizedEvent>,
}

/// Splits a start-time-sorted event sequence into consecutive same-day
/// groups. The boundary is calendar-date equality of each event's own start,
/// not elapsed time. Grouping never re-sorts, and an empty input is an empty
/// output.
pub fn group_by_date(events: Vec<NormalizedEvent>) -> Vec<EventGroup> {
    let mut groups: Vec<EventGroup> = Vec::new();

    for event in events {
        let date = event.from.date_naive();
        match groups.last_mut() {
            Some(group) if group.date == date => group.events.push(event),
            _ => groups.push(EventGroup {
                date,
                events: vec![event],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::schedule_offset;
    use chrono::TimeZone;

    fn event(day: u32, hour: u32, minute: u32, summary: &str) -> NormalizedEvent {
        let from = schedule_offset()
            .with_ymd_and_hms(2024, 5, day, hour, minute, 0)
            .unwrap();
        NormalizedEvent {
            summary: summary.to_string(),
            presenter: None,
            location: None,
            from,
            to: from,
        }
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert_eq!(group_by_date(Vec::new()), Vec::new());
    }

    #[test]
    fn single_day_stays_one_group() {
        let groups = group_by_date(vec![event(3, 9, 0, "a"), event(3, 16, 0, "b")]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].date, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
        assert_eq!(groups[0].events.len(), 2);
    }

    #[test]
    fn splits_on_date_change() {
        let groups = group_by_date(vec![
            event(3, 9, 0, "a"),
            event(3, 23, 30, "b"),
            event(4, 0, 0, "c"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].events.len(), 2);
        assert_eq!(groups[1].events.len(), 1);
        assert_eq!(groups[1].events[0].summary, "c");
    }

    #[test]
    fn concatenated_groups_reproduce_the_input() {
        let input = vec![
            event(3, 9, 0, "a"),
            event(3, 10, 0, "b"),
            event(4, 9, 0, "c"),
            event(6, 9, 0, "d"),
        ];

        let groups = group_by_date(input.clone());
        let rejoined: Vec<NormalizedEvent> =
            groups.iter().flat_map(|group| group.events.clone()).collect();

        assert_eq!(rejoined, input);
        for group in &groups {
            assert!(group.events.iter().all(|e| e.from.date_naive() == group.date));
        }
    }

    #[test]
    fn groups_come_out_in_date_order() {
        let groups = group_by_date(vec![event(3, 9, 0, "a"), event(4, 9, 0, "b"), event(5, 9, 0, "c")]);
        let dates: Vec<NaiveDate> = groups.iter().map(|group| group.date).collect();

        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }
}
