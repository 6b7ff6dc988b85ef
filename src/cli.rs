use std::fs;
use std::path::PathBuf;
use std::process;

use getopts::Options;
use url::Url;

use crate::schedule::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Text,
}

pub struct Args {
    pub format: Format,
    pub output: Option<PathBuf>,
    pub tracks: Vec<Track>,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "f",
        "format",
        "Schedule output format, either `html` or `text` [Default: html]",
        "FORMAT",
    );
    opts.optopt(
        "c",
        "config",
        "Read the track list from a JSON file (an ordered array of {name, url} objects)",
        "FILE",
    );
    opts.optopt(
        "o",
        "output",
        "Write the schedule to FILE instead of stdout",
        "FILE",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        let usage = format!(
            "{} [TRACK=FEED_URL]...",
            opts.short_usage(env!("CARGO_PKG_NAME"))
        );
        println!("{}", opts.usage(&usage));
        process::exit(0);
    }

    let format = match matches.opt_str("format").as_deref() {
        None | Some("html") => Format::Html,
        Some("text") => Format::Text,
        Some(other) => {
            eprintln!("Provided value for option 'format' is invalid: {other}");
            process::exit(1);
        }
    };

    let output = matches.opt_str("output").map(PathBuf::from);

    let mut tracks = match matches.opt_str("config") {
        Some(path) => load_tracks(&path),
        None => Vec::new(),
    };

    tracks.extend(matches.free.iter().map(|arg| parse_track(arg)));

    if tracks.is_empty() {
        eprintln!("No tracks configured, pass TRACK=FEED_URL arguments or --config");
        process::exit(1);
    }

    Args {
        format,
        output,
        tracks,
    }
}

fn load_tracks(path: &str) -> Vec<Track> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Failed to read track config `{path}`: {err}");
            process::exit(1);
        }
    };

    let tracks: Vec<Track> = match serde_json::from_str(&data) {
        Ok(tracks) => tracks,
        Err(err) => {
            eprintln!("Track config `{path}` is invalid: {err}");
            process::exit(1);
        }
    };

    for track in &tracks {
        check_url(&track.name, &track.url);
    }

    tracks
}

// Free arguments look like `Primary Track=https://example.com/feed.ics`;
// the split is on the first `=` so the URL keeps its query string.
fn parse_track(arg: &str) -> Track {
    let Some((name, url)) = arg.split_once('=') else {
        eprintln!("Track argument `{arg}` is not of the form TRACK=FEED_URL");
        process::exit(1);
    };

    check_url(name, url);

    Track {
        name: name.to_string(),
        url: url.to_string(),
    }
}

fn check_url(name: &str, url: &str) {
    if let Err(err) = Url::parse(url) {
        eprintln!("Feed URL for track `{name}` is invalid: {err}");
        process::exit(1);
    }
}
