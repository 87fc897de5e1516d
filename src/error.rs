// Error handling for url templating

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UrlTemplateError>;

/// Failures raised while configuring templates or resolving urls against them.
#[derive(Debug, Error)]
pub enum UrlTemplateError {
    /// The url does not satisfy the configured host or path template.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Compilation needs parameter values which are neither set nor defaulted.
    #[error("missing required url parameters: \"{}\"", .0.join(", "))]
    MissingRequiredParameters(Vec<String>),

    /// The template configuration itself is unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A default value was requested for a parameter which has none.
    #[error("invalid default parameter name \"{0}\"")]
    InvalidDefaultName(String),
}

impl From<regex::Error> for UrlTemplateError {
    fn from(err: regex::Error) -> Self {
        UrlTemplateError::Configuration(err.to_string())
    }
}
