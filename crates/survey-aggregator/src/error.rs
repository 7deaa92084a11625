use survey_sources::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("survey of {language} on {source_id} failed: {source}")]
    Source {
        source_id: String,
        language: String,
        #[source]
        source: SourceError,
    },
}

pub type Result<T> = std::result::Result<T, AggregateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_language_and_source() {
        let err = AggregateError::Source {
            source_id: "hh".to_string(),
            language: "Python".to_string(),
            source: SourceError::ApiError {
                source_id: "hh".to_string(),
                status: 502,
                message: "Bad Gateway".to_string(),
            },
        };

        assert_eq!(
            err.to_string(),
            "survey of Python on hh failed: API error (hh): status 502, Bad Gateway"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
