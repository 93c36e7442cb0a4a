pub mod status;

pub use status::{ConsoleSink, StatusSink, Tag};
