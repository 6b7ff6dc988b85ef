use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Result;

use ical_schedule::cli::{self, Format};

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "ical_schedule=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

fn main() -> Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut sink = BufWriter::new(sink);

    match args.format {
        Format::Html => ical_schedule::build_html(&mut sink, &args.tracks)?,
        Format::Text => ical_schedule::build_text(&mut sink, &args.tracks)?,
    }

    sink.flush()?;
    Ok(())
}
