//! Structured error output for scripted callers.
//!
//! Provides machine-parseable error information with:
//! - Error codes for categorization
//! - Hints for self-correction
//! - Context for debugging (line numbers, paths, parameters)

use crate::error::BenchError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Machine-readable error codes.
///
/// These codes are stable and can be used for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // === Parse Errors (exit code 2) ===
    /// `Running` header with the wrong integer count
    MalformedRunHeader,
    /// Sample line without a numeric token
    MalformedSampleLine,
    /// `average` line without `<number> seconds`
    MissingAverage,
    /// `average` line outside any run
    OrphanAverage,
    /// `mem:` line whose value is not a number
    MalformedMemoryLine,

    // === Statistics Errors (exit code 3) ===
    /// Fewer than two retained samples
    InsufficientSamples,
    /// Series lacks the requested parameter
    ParameterMissing,
    /// No shared benchmark parameter
    NoCommonParameters,
    /// One or more parameters could not be compared
    ComparisonFailed,

    // === Lookup Errors (exit code 4) ===
    /// Benchmark not in the catalog
    UnknownBenchmark,
    /// Version not in the catalog
    UnknownVersion,
    /// Log file missing
    LogNotFound,

    // === Config Errors (exit code 7) ===
    /// Configuration error
    ConfigError,
    /// YAML parsing error
    YamlError,

    // === I/O Errors (exit code 8) ===
    /// File I/O error
    IoError,
    /// JSON serialization error
    JsonError,

    // === Internal Errors (exit code 1) ===
    /// Unexpected internal error
    InternalError,
}

impl ErrorCode {
    /// Get the string representation for JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedRunHeader => "MALFORMED_RUN_HEADER",
            Self::MalformedSampleLine => "MALFORMED_SAMPLE_LINE",
            Self::MissingAverage => "MISSING_AVERAGE",
            Self::OrphanAverage => "ORPHAN_AVERAGE",
            Self::MalformedMemoryLine => "MALFORMED_MEMORY_LINE",
            Self::InsufficientSamples => "INSUFFICIENT_SAMPLES",
            Self::ParameterMissing => "PARAMETER_MISSING",
            Self::NoCommonParameters => "NO_COMMON_PARAMETERS",
            Self::ComparisonFailed => "COMPARISON_FAILED",
            Self::UnknownBenchmark => "UNKNOWN_BENCHMARK",
            Self::UnknownVersion => "UNKNOWN_VERSION",
            Self::LogNotFound => "LOG_NOT_FOUND",
            Self::ConfigError => "CONFIG_ERROR",
            Self::YamlError => "YAML_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Get the exit code for this error category.
    ///
    /// - 1: Internal/unknown errors
    /// - 2: Log parse errors
    /// - 3: Statistics errors
    /// - 4: Lookup errors
    /// - 7: Config errors
    /// - 8: I/O errors
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MalformedRunHeader
            | Self::MalformedSampleLine
            | Self::MissingAverage
            | Self::OrphanAverage
            | Self::MalformedMemoryLine => 2,
            Self::InsufficientSamples
            | Self::ParameterMissing
            | Self::NoCommonParameters
            | Self::ComparisonFailed => 3,
            Self::UnknownBenchmark | Self::UnknownVersion | Self::LogNotFound => 4,
            Self::ConfigError | Self::YamlError => 7,
            Self::IoError | Self::JsonError => 8,
            Self::InternalError => 1,
        }
    }
}

/// Structured error for machine-parseable output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional hint for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Additional context data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl StructuredError {
    /// Create a new structured error from a `BenchError`.
    #[must_use]
    pub fn from_error(err: &BenchError) -> Self {
        let (code, mut context) = Self::extract_code_and_context(err.root());

        if let BenchError::InFile { path, .. } = err {
            let file = json!(path.display().to_string());
            match context.as_mut().and_then(Value::as_object_mut) {
                Some(map) => {
                    map.insert("file".to_string(), file);
                }
                None => context = Some(json!({ "file": file })),
            }
        }

        Self {
            code,
            message: err.to_string(),
            hint: err.suggestion().map(str::to_string),
            context,
        }
    }

    /// Serialize to JSON value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "error": {
                "code": self.code.as_str(),
                "message": self.message,
                "hint": self.hint,
                "context": self.context,
            }
        })
    }

    /// Format for human-readable output.
    #[must_use]
    pub fn to_human(&self, color: bool) -> String {
        let mut output = String::new();

        if color {
            output.push_str("\x1b[31mError:\x1b[0m ");
        } else {
            output.push_str("Error: ");
        }

        output.push_str(&self.message);

        if let Some(hint) = &self.hint {
            output.push('\n');
            if color {
                output.push_str("\x1b[33mHint:\x1b[0m ");
            } else {
                output.push_str("Hint: ");
            }
            output.push_str(hint);
        }

        output
    }

    fn extract_code_and_context(err: &BenchError) -> (ErrorCode, Option<Value>) {
        match err {
            BenchError::MalformedRunHeader { line, reason } => (
                ErrorCode::MalformedRunHeader,
                Some(json!({"line": line, "reason": reason})),
            ),
            BenchError::MalformedSampleLine { line, content } => (
                ErrorCode::MalformedSampleLine,
                Some(json!({"line": line, "content": content})),
            ),
            BenchError::MissingAverage { line, content } => (
                ErrorCode::MissingAverage,
                Some(json!({"line": line, "content": content})),
            ),
            BenchError::OrphanAverage { line } => {
                (ErrorCode::OrphanAverage, Some(json!({"line": line})))
            }
            BenchError::MalformedMemoryLine { line, content } => (
                ErrorCode::MalformedMemoryLine,
                Some(json!({"line": line, "content": content})),
            ),
            BenchError::InsufficientSamples { retained } => (
                ErrorCode::InsufficientSamples,
                Some(json!({"retained": retained})),
            ),
            BenchError::ParameterMissing { parameter } => (
                ErrorCode::ParameterMissing,
                Some(json!({"parameter": parameter})),
            ),
            BenchError::NoCommonParameters { benchmark } => (
                ErrorCode::NoCommonParameters,
                Some(json!({"benchmark": benchmark})),
            ),
            BenchError::ComparisonFailed { benchmark, failed } => (
                ErrorCode::ComparisonFailed,
                Some(json!({"benchmark": benchmark, "failed_parameters": failed})),
            ),
            BenchError::UnknownBenchmark { name } => {
                (ErrorCode::UnknownBenchmark, Some(json!({"provided": name})))
            }
            BenchError::UnknownVersion { version } => {
                (ErrorCode::UnknownVersion, Some(json!({"provided": version})))
            }
            BenchError::LogNotFound { path } => (
                ErrorCode::LogNotFound,
                Some(json!({"path": path.display().to_string()})),
            ),
            BenchError::Config(_) => (ErrorCode::ConfigError, None),
            BenchError::Yaml(_) => (ErrorCode::YamlError, None),
            BenchError::Io(_) => (ErrorCode::IoError, None),
            BenchError::Json(_) => (ErrorCode::JsonError, None),
            BenchError::InFile { source, .. } => Self::extract_code_and_context(source),
            BenchError::Other(_) => (ErrorCode::InternalError, None),
        }
    }
}
