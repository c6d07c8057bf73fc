mod text;

pub use text::{BANNER, FAILURE_SUMMARY, TextFormatter};
