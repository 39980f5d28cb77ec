//! Error types for resource ID parsing.

use thiserror::Error;

/// Errors that can occur when parsing a resource ID.
///
/// There is a single kind: the input was not a well-formed ID of the
/// requested type. The [`SegmentFault`] says which expected segment could
/// not be satisfied and why.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input is not a well-formed ID of the requested type.
    #[error("parsing {id_type} from {input:?}: {fault}")]
    Malformed {
        id_type: &'static str,
        input: String,
        fault: SegmentFault,
    },
}

/// The first expectation of the ID schema that the input failed to meet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentFault {
    /// The input does not begin with `/`.
    #[error("ID must begin with '/'")]
    NotRooted,

    /// The input ended before this segment.
    #[error("missing {segment}")]
    Missing { segment: &'static str },

    /// The segment is present but empty, e.g. after a trailing or doubled `/`.
    #[error("missing value for {segment}")]
    Empty { segment: &'static str },

    /// A fixed segment has the wrong text.
    #[error("expected segment '{expected}', got '{actual}'")]
    Mismatch {
        expected: &'static str,
        actual: String,
    },

    /// The input continues past the last segment of the schema.
    #[error("unexpected trailing content '{trailing}'")]
    Trailing { trailing: String },

    /// The caller asked for a different number of values than the schema has.
    #[error("schema has {schema} value segments, {requested} requested")]
    Arity { schema: usize, requested: usize },
}

impl IdError {
    pub(crate) fn malformed(id_type: &'static str, input: &str, fault: SegmentFault) -> Self {
        IdError::Malformed {
            id_type,
            input: input.to_string(),
            fault,
        }
    }

    /// Returns the segment-level reason for the failure.
    pub fn fault(&self) -> &SegmentFault {
        match self {
            IdError::Malformed { fault, .. } => fault,
        }
    }

    /// Returns the name of the ID type that was being parsed.
    pub fn id_type(&self) -> &'static str {
        match self {
            IdError::Malformed { id_type, .. } => id_type,
        }
    }

    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        match self {
            IdError::Malformed { input, .. } => input,
        }
    }

    /// Returns true if the input ended before a required segment.
    pub fn is_missing(&self) -> bool {
        matches!(self.fault(), SegmentFault::Missing { .. })
    }

    /// Returns true if a segment was present but empty.
    pub fn is_empty_value(&self) -> bool {
        matches!(self.fault(), SegmentFault::Empty { .. })
    }

    /// Returns true if a fixed segment did not match the schema.
    pub fn is_mismatch(&self) -> bool {
        matches!(self.fault(), SegmentFault::Mismatch { .. })
    }
}

impl SegmentFault {
    /// Returns the schema segment this fault refers to, if any.
    pub fn segment(&self) -> Option<&'static str> {
        match self {
            SegmentFault::Missing { segment } | SegmentFault::Empty { segment } => Some(*segment),
            SegmentFault::Mismatch { expected, .. } => Some(*expected),
            SegmentFault::NotRooted
            | SegmentFault::Trailing { .. }
            | SegmentFault::Arity { .. } => None,
        }
    }
}
