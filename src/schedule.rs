use std::io::Write;

use log::info;
use serde::Deserialize;

use crate::error::Error;
use crate::event::normalize;
use crate::feed;
use crate::group::{group_by_date, EventGroup};
use crate::html;
use crate::text;

/// One configured feed: a display name and where to fetch it from.
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub name: String,
    pub url: String,
}

/// Assembles the full HTML schedule fragment: the outer section, an overall
/// title, and per track (in configured order) a track title followed by its
/// rendered date groups. Fetch and parse failures abort the whole run.
pub fn build_html<W: Write>(w: &mut W, tracks: &[Track]) -> Result<(), Error> {
    writeln!(w, r#"<section id="schedule" class="section schedule">"#)?;
    writeln!(w, r#"<div class="container">"#)?;
    html::title_row(w, "Event Schedule")?;

    for track in tracks {
        let groups = track_groups(track)?;
        html::title_row(w, &track.name)?;
        html::render_track_schedule(w, &groups)?;
    }

    writeln!(w, "</div>")?;
    writeln!(w, "</section>")?;
    Ok(())
}

/// The plain-text counterpart: per track, its name, a blank line, and the
/// rendered date groups followed by another blank line.
pub fn build_text<W: Write>(w: &mut W, tracks: &[Track]) -> Result<(), Error> {
    for track in tracks {
        let groups = track_groups(track)?;

        writeln!(w, "{}", track.name)?;
        writeln!(w)?;
        text::render_track_schedule(w, &groups)?;
        writeln!(w)?;
    }

    Ok(())
}

fn track_groups(track: &Track) -> Result<Vec<EventGroup>, Error> {
    info!("fetching feed for track `{}`", track.name);

    let body = feed::fetch(&track.url)?;
    let raw = feed::parse(&body)?;
    info!("track `{}` has {} events", track.name, raw.len());

    Ok(group_by_date(normalize(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_frame_is_emitted_even_without_tracks() {
        let mut out = Vec::new();
        build_html(&mut out, &[]).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with(r#"<section id="schedule" class="section schedule">"#));
        assert!(out.contains(r#"<div class="container">"#));
        assert!(out.contains(r#"<h3 class="section-title">Event Schedule</h3>"#));
        assert!(out.trim_end().ends_with("</section>"));
    }

    #[test]
    fn text_mode_has_no_overall_title() {
        let mut out = Vec::new();
        build_text(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn tracks_deserialize_from_config_json() {
        let tracks: Vec<Track> = serde_json::from_str(
            r#"[{"name": "Primary Track", "url": "https://example.com/primary.ics"}]"#,
        )
        .unwrap();

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].name, "Primary Track");
        assert_eq!(tracks[0].url, "https://example.com/primary.ics");
    }
}
