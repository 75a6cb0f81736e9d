use thiserror::Error;

/// The single failure kind of an analysis.
///
/// Raised only when the parse provider fails; unresolved roots and subjects
/// are reported as data, not errors.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis failed: {source}")]
    Failed {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AnalysisError {
    fn from(source: anyhow::Error) -> Self {
        AnalysisError::Failed { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_provider_error() {
        let err: AnalysisError = anyhow::anyhow!("model not loaded").into();
        assert_eq!(err.to_string(), "analysis failed: model not loaded");
        assert!(std::error::Error::source(&err).is_some());
    }
}
