//! Regression test parameters and operations

use crate::error::TestError;
use tessera_core::Canvas;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results with expected values (default)
    #[default]
    Compare,
    /// Display mode - run and report, never fail
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "selection")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record(&mut self, failure: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, failure);
        self.failures.push(failure);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.record(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Record a boolean check as a value comparison against `true`
    pub fn compare_bool(&mut self, expected: bool, actual: bool) -> bool {
        self.compare_values(
            if expected { 1.0 } else { 0.0 },
            if actual { 1.0 } else { 0.0 },
            0.0,
        )
    }

    /// Compare two canvases for exact pixel equality
    ///
    /// # Returns
    ///
    /// `true` if the canvases are identical, `false` otherwise.
    pub fn compare_canvas(&mut self, canvas1: &Canvas, canvas2: &Canvas) -> bool {
        self.index += 1;

        if !canvas1.equals(canvas2) {
            if canvas1.sizes_equal(canvas2) {
                let (w, h) = canvas1.dimensions();
                'rows: for y in 0..h as i32 {
                    for x in 0..w as i32 {
                        if canvas1.get(x, y).ok() != canvas2.get(x, y).ok() {
                            eprintln!("  first pixel mismatch at ({}, {})", x, y);
                            break 'rows;
                        }
                    }
                }
            } else {
                eprintln!(
                    "  dimension mismatch: {:?} vs {:?}",
                    canvas1.dimensions(),
                    canvas2.dimensions()
                );
            }
            self.record(TestError::CanvasMismatch { index: self.index });
            return false;
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed (always `true` in display mode).
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success || self.display()
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}
