//! # Errors
//!
//! Failures a point operation can report.
//!
//! Only two things can go wrong: text that is not a point, and a
//! non-positive search distance. Everything else is total.

/// Result type for point operations
pub type PointResult<T> = Result<T, PointError>;

/// Errors that can occur while parsing or querying points
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointError {
    /// Text does not match `<int>,<int>` or a coordinate overflows i64
    #[error("Invalid point format: {input:?}")]
    InvalidFormat { input: String },

    /// A numeric argument is outside its accepted range
    #[error("Invalid argument `{param}`: {value} (must be > 0)")]
    InvalidArgument { param: &'static str, value: i64 },
}

impl PointError {
    /// Name of the offending parameter, if the error is about one
    pub fn param(&self) -> Option<&'static str> {
        match self {
            PointError::InvalidArgument { param, .. } => Some(*param),
            PointError::InvalidFormat { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_keeps_input() {
        let err = PointError::InvalidFormat { input: "1,abc".to_string() };
        assert_eq!(err.to_string(), "Invalid point format: \"1,abc\"");
        assert_eq!(err.param(), None);
    }

    #[test]
    fn test_argument_display_names_param() {
        let err = PointError::InvalidArgument { param: "distance", value: 0 };
        assert_eq!(err.to_string(), "Invalid argument `distance`: 0 (must be > 0)");
        assert_eq!(err.param(), Some("distance"));
    }
}
