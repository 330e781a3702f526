//! Converter configuration.

use std::path::PathBuf;

/// Environment variable naming the database product in the footer
pub const TARGET_ENV: &str = "AWARDS_IMPORT_TARGET";

pub const DEFAULT_TARGET: &str = "Supabase";

/// Settings for one conversion run.
///
/// `Default` reads the environment; the CLI layers its flags on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Input JSON export
    pub input: PathBuf,
    /// Explicit output path; derived from `input` when `None`
    pub output: Option<PathBuf>,
    /// Database product named in the footer and the console instructions
    pub target: String,
    /// Append the users-by-role and votes-by-category breakdowns
    pub breakdown: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            target: std::env::var(TARGET_ENV)
                .ok()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TARGET.to_string()),
            breakdown: true,
        }
    }
}

impl ConverterConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_breakdown(mut self, breakdown: bool) -> Self {
        self.breakdown = breakdown;
        self
    }
}
