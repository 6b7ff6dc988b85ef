use std::io::{self, Write};

use crate::group::EventGroup;
use crate::utils::{clock_time, full_date};

/// Writes the date groups of one track as plain text: a full-date heading,
/// one line per event, and a blank line closing each date off.
pub fn render_track_schedule<W: Write>(w: &mut W, groups: &[EventGroup]) -> io::Result<()> {
    for group in groups {
        writeln!(w, "{}", full_date(group.date))?;

        for event in &group.events {
            write!(
                w,
                "{}-{}: {}",
                clock_time(&event.from),
                clock_time(&event.to),
                event.summary
            )?;

            if let Some(presenter) = event.presenter() {
                write!(w, " - {presenter}")?;
            }

            // The location segment is kept even for events without one,
            // which leaves those lines ending in ", ".
            writeln!(w, ", {}", event.location.as_deref().unwrap_or_default())?;
        }

        writeln!(w)?;
    }

    Ok(())
}
