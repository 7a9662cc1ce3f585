/// Convenience result type used across choreo.
pub type ChoreoResult<T> = Result<T, ChoreoError>;

/// Load-time error taxonomy.
///
/// Runtime event handlers never fail; see [`Skip`] for how they report
/// dropped events instead.
#[derive(thiserror::Error, Debug)]
pub enum ChoreoError {
    /// Invalid static data (trigger strings, property ranges, slot counts).
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration section is inconsistent with another one.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChoreoError {
    /// Build a [`ChoreoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChoreoError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ChoreoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ChoreoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

/// Reason an input event produced no visual change.
///
/// These are logged at `trace`/`debug` level and never surfaced to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Skip {
    /// The addressed surface is not mounted.
    MissingElement,
    /// The surface has zero (or non-finite) width or height.
    DegenerateGeometry,
    /// A commit arrived while a cascade transition was still running.
    TransitionInFlight,
    /// A completion callback for a transition that is no longer active.
    StaleCompletion,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
