use std::io::{self, Write};

use chrono::{DateTime, FixedOffset};

use crate::event::NormalizedEvent;
use crate::group::EventGroup;
use crate::utils::{display_time, full_date, std_time, word_wrap};

const BREAK: &str = "<br/>";
const NBSP: &str = "&nbsp;";
const TITLE_WIDTH: usize = 20;
const TITLE_BREAKS: usize = 5;

/// Writes the date groups of one track: a full-date title row, a row of
/// event boxes, and an empty title row closing the date off. The empty row
/// follows every date, the last one included, and never precedes the first.
/// The per-track header is the caller's business.
pub fn render_track_schedule<W: Write>(w: &mut W, groups: &[EventGroup]) -> io::Result<()> {
    for group in groups {
        title_row(w, &full_date(group.date))?;

        writeln!(w, r#"<div class="row">"#)?;
        for event in &group.events {
            event_box(w, event)?;
        }
        writeln!(w, "</div>")?;

        title_row(w, "")?;
    }

    Ok(())
}

pub(crate) fn title_row<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    writeln!(w, r#"<div class="row">"#)?;
    writeln!(w, r#"<div class="col-md-12">"#)?;
    writeln!(w, r#"<h3 class="section-title">{title}</h3>"#)?;
    writeln!(w, "</div>")?;
    writeln!(w, "</div>")
}

fn event_box<W: Write>(w: &mut W, event: &NormalizedEvent) -> io::Result<()> {
    writeln!(w, r#"<div class="col-md-4 col-sm-6">"#)?;
    writeln!(w, r#"<div class="schedule-box">"#)?;
    writeln!(w, r#"<div class="panel-body">"#)?;

    writeln!(w, r#"<div class="time">"#)?;
    time_element(w, &event.from)?;
    writeln!(w, "{NBSP}-{NBSP}")?;
    time_element(w, &event.to)?;
    writeln!(w, "</div>")?;

    let title = pad_title(word_wrap(&event.summary, TITLE_WIDTH, BREAK));
    writeln!(w, "<h3>{title}</h3>")?;
    writeln!(w, "<p>{}</p>", event.presenter().unwrap_or(NBSP))?;

    writeln!(w, "</div>")?;
    writeln!(w, "</div>")?;
    writeln!(w, "</div>")
}

fn time_element<W: Write>(w: &mut W, at: &DateTime<FixedOffset>) -> io::Result<()> {
    writeln!(
        w,
        r#"<time datetime="{}">{}</time>"#,
        std_time(at),
        display_time(at)
    )
}

// Pads short titles up to a uniform break count so the boxes of a row all
// render at the same height. Longer titles are left alone, never truncated.
fn pad_title(mut title: String) -> String {
    let breaks = title.matches(BREAK).count();

    for _ in breaks..TITLE_BREAKS {
        title.push_str(NBSP);
        title.push_str(BREAK);
    }

    title
}
