pub mod checker;
pub mod cli;
pub mod commands;
pub mod error;
pub mod extractor;
pub mod grammar;
pub mod media;
pub mod notice;
pub mod output;

pub use error::{NoticeGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NOTICE_MISSING: i32 = 1;
pub const EXIT_RUNTIME_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
