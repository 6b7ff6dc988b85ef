use std::mem;

use chrono::{DateTime, FixedOffset, NaiveDate};

/// Human-readable badge time, `h:mm AM/PM` without a leading zero.
pub(crate) fn display_time(at: &DateTime<FixedOffset>) -> String {
    at.format("%-I:%M %p").to_string()
}

/// Machine-readable ISO-8601 timestamp including the offset.
pub(crate) fn std_time(at: &DateTime<FixedOffset>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// 24-hour clock time for the text renderer.
pub(crate) fn clock_time(at: &DateTime<FixedOffset>) -> String {
    at.format("%R").to_string()
}

/// Full date heading, e.g. "Friday May 3, 2024".
pub(crate) fn full_date(date: NaiveDate) -> String {
    date.format("%A %B %-d, %Y").to_string()
}

/// Wraps `text` at a soft `width`, breaking only at whitespace. A word longer
/// than the width gets a line of its own, unbroken. Produced lines carry no
/// trailing whitespace and are joined with `break_sequence`; embedded
/// newlines also become breaks.
pub(crate) fn word_wrap(text: &str, width: usize, break_sequence: &str) -> String {
    let mut lines = Vec::new();

    for segment in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in segment.split_whitespace() {
            let word_width = word.chars().count();

            if line_width == 0 {
                line.push_str(word);
                line_width = word_width;
            } else if line_width + 1 + word_width > width {
                lines.push(mem::take(&mut line));
                line.push_str(word);
                line_width = word_width;
            } else {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
            }
        }

        lines.push(line);
    }

    lines.join(break_sequence)
}
