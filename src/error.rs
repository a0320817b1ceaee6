/// Convenience result type used across winecloud.
pub type CloudResult<T> = Result<T, CloudError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum CloudError {
    /// Invalid caller-provided configuration or buffer data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while loading or querying the review dataset.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Errors while drawing or writing a chart.
    #[error("chart error: {0}")]
    Chart(String),

    /// Errors while laying out or rasterizing a word cloud.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CloudError {
    /// Build a [`CloudError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CloudError::Dataset`] value.
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Build a [`CloudError::Chart`] value.
    pub fn chart(msg: impl Into<String>) -> Self {
        Self::Chart(msg.into())
    }

    /// Build a [`CloudError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../tests/unit/error.rs"]
mod tests;
