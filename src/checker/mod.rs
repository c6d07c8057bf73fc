mod header;
mod result;

pub use header::HeaderChecker;
pub use result::CheckResult;
