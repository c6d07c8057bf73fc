pub mod check;

pub use check::{run_check, run_check_with};
