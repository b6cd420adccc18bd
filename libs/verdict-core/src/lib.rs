pub mod cases;
pub mod emitter;
pub mod executor;
#[cfg(test)]
mod suite_tests;
pub mod types;

pub use cases::parse_cases;
pub use emitter::write_assert_script;
pub use executor::run_test_cases;
pub use types::{HarnessError, TestCase, TestResult, TestStatus};
