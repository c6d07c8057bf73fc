//! Media type detection and the policy that maps detected types onto the
//! types the grammar table knows.

mod policy;
mod sniffer;

pub use policy::{CPP_SOURCE, MediaTypePolicy, PLAIN_TEXT};
pub use sniffer::ContentSniffer;

use std::path::Path;

use crate::error::Result;

/// Determines the media type of a file from its content.
pub trait MediaTypeDetector {
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn detect(&self, path: &Path) -> Result<String>;
}
