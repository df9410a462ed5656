use thiserror::Error;

/// Errors raised while building the encoding or validating boundary input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Integer that is not one of the assigned symptom primes, in canonical decimal form.
    #[error("{0} is not a valid symptom code")]
    UnknownPrime(String),

    #[error("no valid symptom primes provided")]
    EmptyQuery,

    #[error("malformed symptom table: {0}")]
    MalformedTable(String),

    #[error("action plans must contain a \"Default\" entry")]
    MissingDefaultPlan,

    /// The product of a disease's symptom primes does not fit an SQF.
    #[error("square-free product overflows for disease {disease:?}")]
    SqfOverflow { disease: String },
}

pub type Result<T> = std::result::Result<T, CheckerError>;
