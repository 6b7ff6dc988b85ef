pub mod cli;
mod error;
mod event;
mod feed;
mod group;
mod html;
mod schedule;
mod text;
mod utils;

pub use crate::error::Error;
pub use crate::event::{normalize, schedule_offset, NormalizedEvent};
pub use crate::feed::{fetch, parse, RawEvent};
pub use crate::group::{group_by_date, EventGroup};
pub use crate::schedule::{build_html, build_text, Track};
