// ---------------------------------------------------------------------------
// Error types for configuration, parameter input and lookup tables
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised while loading configuration or caller-supplied input.
///
/// Missing or partial measurement data is never an error; it shows up as a
/// `None` value and a low validity on the `IndexResult` instead.
#[derive(Debug)]
pub enum IndexError {
    /// Configuration JSON could not be parsed.
    Config(serde_json::Error),
    /// Parameter map JSON could not be parsed.
    Parameters(serde_json::Error),
    /// Validity thresholds outside `[0, 1]` or `limit > warning`.
    InvalidThresholds { warning: f64, limit: f64 },
    /// A structural category identifier matched none of the options.
    UnknownCategory { field: &'static str, value: String },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::Config(e) => write!(f, "Invalid index configuration: {e}"),
            IndexError::Parameters(e) => write!(f, "Invalid parameter map: {e}"),
            IndexError::InvalidThresholds { warning, limit } => write!(
                f,
                "Invalid validity thresholds: warning={warning}, limit={limit} \
                 (expected 0 <= limit <= warning <= 1)"
            ),
            IndexError::UnknownCategory { field, value } => {
                write!(f, "Unknown {field} category: '{value}'")
            }
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndexError::Config(e) | IndexError::Parameters(e) => Some(e),
            _ => None,
        }
    }
}

/// Invariant violations of a piecewise-linear lookup table.
///
/// These are implementation bugs, not runtime conditions. The tables shipped
/// with the crate are checked by tests.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// Fewer than two points; nothing to interpolate between.
    TooShort { table: &'static str, len: usize },
    /// A point has a NaN or infinite coordinate.
    NonFinite { table: &'static str, index: usize },
    /// The first or last point is not the smallest or largest x. Clamping
    /// would then leave values outside the tabulated range, and the rising
    /// steps would not bracket every value inside it.
    Unbounded { table: &'static str },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::TooShort { table, len } => {
                write!(f, "Lookup table '{table}' has only {len} point(s)")
            }
            TableError::NonFinite { table, index } => {
                write!(f, "Lookup table '{table}' has a non-finite point at {index}")
            }
            TableError::Unbounded { table } => write!(
                f,
                "Lookup table '{table}' does not start at its minimum or end at its maximum x"
            ),
        }
    }
}

impl std::error::Error for TableError {}
