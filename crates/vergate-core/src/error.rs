//! Error taxonomy for version parsing.

/// Errors produced when a string is not a well-formed version.
///
/// These never escape [`decide`](crate::gate::decide); they are folded into a
/// failing [`GateDecision`](crate::gate::GateDecision) instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("version string is empty")]
    Empty,

    #[error("segment {position} is empty")]
    EmptySegment { position: usize },

    #[error("segment '{segment}' is not a non-negative integer")]
    NonNumeric { segment: String },

    #[error("segment '{segment}' does not fit in 64 bits")]
    Overflow { segment: String },

    #[error("suffix '{suffix}' is malformed")]
    MalformedSuffix { suffix: String },
}

/// Result type for version parsing.
pub type Result<T> = std::result::Result<T, ParseError>;
