//! Exit codes for hd-core CLI.
//!
//! Exit codes communicate operation outcome without requiring output parsing.
//!
//! Exit code ranges:
//! - 0: Success
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors (bugs, should be reported)

use hd_common::error::ErrorCategory;

/// Exit codes for hd-core operations.
///
/// These codes are a stable contract for automation. Changes require
/// a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success: inference or validation completed
    Clean = 0,

    // ========================================================================
    // User / Environment Errors (10-19)
    // ========================================================================
    /// Invalid arguments
    ArgsError = 10,

    /// Invalid priors configuration
    ConfigError = 11,

    /// Invalid pedigree data
    DataError = 12,

    /// Inference failed (including unsatisfiable evidence)
    InferenceError = 13,

    // ========================================================================
    // Internal Errors (20-29)
    // ========================================================================
    /// Internal error (bug - please report)
    InternalError = 20,

    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        self == ExitCode::Clean
    }

    /// Check if this exit code is a user/environment error (codes 10-19).
    /// These can be resolved by user action.
    pub fn is_user_error(self) -> bool {
        let code = self as i32;
        (10..20).contains(&code)
    }

    /// Check if this exit code is an internal error (codes 20-29).
    /// These indicate bugs and should be reported.
    pub fn is_internal_error(self) -> bool {
        (self as i32) >= 20
    }

    /// Get the error code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "clean",
            ExitCode::ArgsError => "args_error",
            ExitCode::ConfigError => "config_error",
            ExitCode::DataError => "data_error",
            ExitCode::InferenceError => "inference_error",
            ExitCode::InternalError => "internal_error",
            ExitCode::IoError => "io_error",
        }
    }

    /// Map an error to its exit code by category.
    pub fn from_error(err: &hd_common::Error) -> ExitCode {
        match err.category() {
            ErrorCategory::Config => ExitCode::ConfigError,
            ErrorCategory::Pedigree => ExitCode::DataError,
            ErrorCategory::Inference => ExitCode::InferenceError,
            ErrorCategory::Io => ExitCode::IoError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_common::{Error, PersonId};

    #[test]
    fn ranges_are_stable() {
        assert_eq!(ExitCode::Clean.as_i32(), 0);
        assert_eq!(ExitCode::ArgsError.as_i32(), 10);
        assert_eq!(ExitCode::InferenceError.as_i32(), 13);
        assert_eq!(ExitCode::IoError.as_i32(), 21);
    }

    #[test]
    fn classification() {
        assert!(ExitCode::Clean.is_success());
        assert!(ExitCode::DataError.is_user_error());
        assert!(!ExitCode::DataError.is_internal_error());
        assert!(ExitCode::InternalError.is_internal_error());
    }

    #[test]
    fn code_names_are_snake_case() {
        assert_eq!(ExitCode::Clean.code_name(), "clean");
        assert_eq!(ExitCode::InferenceError.code_name(), "inference_error");
        assert_eq!(ExitCode::IoError.code_name(), "io_error");
    }

    #[test]
    fn error_category_mapping() {
        let err = Error::UnsatisfiableEvidence {
            person: PersonId::from("Carl"),
        };
        assert_eq!(ExitCode::from_error(&err), ExitCode::InferenceError);

        let err = Error::InvalidPriors("bad".into());
        assert_eq!(ExitCode::from_error(&err), ExitCode::ConfigError);
    }
}
