use thiserror::Error;

/// Failures at the automation boundary.
///
/// Ambiguous resolution, timeout and unreachable interaction are distinct
/// variants; callers match on them instead of parsing messages.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A query that claimed uniqueness matched more than one element.
    #[error("strict mode violation: selector `{selector}` resolved to {count} elements")]
    StrictModeViolation { selector: String, count: usize },

    /// A bounded wait elapsed before the condition became true.
    #[error("timed out after {waited_ms}ms waiting for {condition}")]
    Timeout { condition: String, waited_ms: u64 },

    /// The element exists but is hidden and cannot be interacted with.
    #[error("element `{selector}` is not visible and cannot be interacted with")]
    NotInteractable { selector: String },

    #[error("no element matched selector `{selector}`")]
    NotFound { selector: String },

    #[error("element `{selector}` does not accept text input")]
    NotAnInput { selector: String },

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
