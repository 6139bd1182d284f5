pub mod assembler;
pub mod config;
pub mod descriptor;
pub mod diff_index;
pub mod discovery;
pub mod error;
pub mod hints;
pub mod location_index;
pub mod mutation_index;
pub mod output;
pub mod pointcut;
pub mod render;
pub mod report;
pub mod test_case;
pub mod uncovered;

pub use error::{ReportError, Result};
