//! Error types for sigscale operations.
//!
//! Argument errors are reported before any buffer is touched, so a failed call
//! always leaves the caller's data exactly as it was.

use std::fmt;

/// The argument of [`lascl`](crate::linalg::lapack::lascl) that failed validation.
///
/// The variants follow the LAPACK `DLASCL` calling sequence. Arguments are
/// checked in a different order: shape, `cfrom`, `cto`, `m`, `n`, `kl`, `ku`,
/// `lda`, then the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// The storage shape code.
    Shape,
    /// The lower bandwidth `kl`.
    Kl,
    /// The upper bandwidth `ku`.
    Ku,
    /// The denominator of the scale request.
    From,
    /// The numerator of the scale request.
    To,
    /// The number of rows `m`.
    M,
    /// The number of columns `n`.
    N,
    /// The buffer itself.
    A,
    /// The leading dimension `lda`.
    Lda,
}

impl Parameter {
    /// Argument position in the reference LAPACK `DLASCL` calling sequence.
    pub fn position(self) -> usize {
        match self {
            Parameter::Shape => 1,
            Parameter::Kl => 2,
            Parameter::Ku => 3,
            Parameter::From => 4,
            Parameter::To => 5,
            Parameter::M => 6,
            Parameter::N => 7,
            Parameter::A => 8,
            Parameter::Lda => 9,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Parameter::Shape => "type",
            Parameter::Kl => "kl",
            Parameter::Ku => "ku",
            Parameter::From => "cfrom",
            Parameter::To => "cto",
            Parameter::M => "m",
            Parameter::N => "n",
            Parameter::A => "a",
            Parameter::Lda => "lda",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (argument {})", self.name(), self.position())
    }
}

/// Errors that can occur during sigscale operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigscaleError {
    /// An argument of a scaling routine is out of range.
    InvalidArgument {
        /// The first offending argument in validation order.
        parameter: Parameter,
        /// Human-readable error message.
        message: String,
    },
    /// A sampled signal could not be built from the given data.
    InvalidSignal {
        /// Human-readable error message.
        message: String,
    },
}

impl SigscaleError {
    /// The offending parameter, for argument errors.
    pub fn parameter(&self) -> Option<Parameter> {
        match self {
            SigscaleError::InvalidArgument { parameter, .. } => Some(*parameter),
            SigscaleError::InvalidSignal { .. } => None,
        }
    }
}

impl fmt::Display for SigscaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigscaleError::InvalidArgument { parameter, message } => {
                write!(f, "Invalid argument {}: {}", parameter, message)
            }
            SigscaleError::InvalidSignal { message } => {
                write!(f, "Invalid signal: {}", message)
            }
        }
    }
}

impl std::error::Error for SigscaleError {}

/// Result type alias for sigscale operations.
pub type Result<T> = std::result::Result<T, SigscaleError>;

/// Creates an invalid-argument error.
pub fn invalid_argument(parameter: Parameter, message: impl Into<String>) -> SigscaleError {
    SigscaleError::InvalidArgument {
        parameter,
        message: message.into(),
    }
}

/// Creates an invalid-signal error.
pub fn invalid_signal(message: impl Into<String>) -> SigscaleError {
    SigscaleError::InvalidSignal {
        message: message.into(),
    }
}
