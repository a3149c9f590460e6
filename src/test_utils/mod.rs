//! Shared test utilities for skill-catalog.

pub mod fixtures;

pub use fixtures::CatalogFixture;

/// Table-driven test case structure.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
    pub should_panic: bool,
}

impl<I, E> TestCase<I, E> {
    pub const fn new(name: &'static str, input: I, expected: E) -> Self {
        Self {
            name,
            input,
            expected,
            should_panic: false,
        }
    }
}

/// Run table-driven tests, stopping at the first mismatch.
pub fn run_table_tests<I, E, F>(cases: Vec<TestCase<I, E>>, test_fn: F) -> Result<(), String>
where
    I: std::fmt::Debug + Clone + std::panic::RefUnwindSafe,
    E: std::fmt::Debug + PartialEq,
    F: Fn(I) -> E + std::panic::RefUnwindSafe,
{
    for case in cases {
        println!("[TEST] Running: {}", case.name);

        let result = std::panic::catch_unwind(|| test_fn(case.input.clone()));

        if case.should_panic {
            if result.is_ok() {
                return Err(format!("Test '{}' expected panic", case.name));
            }
            continue;
        }

        let Ok(actual) = result else {
            return Err(format!("Test '{}' panicked unexpectedly", case.name));
        };

        if actual != case.expected {
            return Err(format!(
                "Test '{}' failed: input {:?}, expected {:?}, got {:?}",
                case.name, case.input, case.expected, actual
            ));
        }
    }
    Ok(())
}
