use thiserror::Error;

/// Failure kinds for market-data fetches.
///
/// These never cross a fetcher boundary: the `MarketData` impl logs the
/// error and hands the caller a neutral empty/absent value instead.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),
    #[error("empty response")]
    EmptyResponse,
    #[error("missing field: {0}")]
    MissingField(&'static str),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::EmptyResponse => "empty_response",
            FetchError::MissingField(_) => "missing_field",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(FetchError::EmptyResponse.kind(), "empty_response");
        assert_eq!(FetchError::MissingField("high").kind(), "missing_field");
    }

    #[test]
    fn test_display_carries_field_name() {
        let err = FetchError::MissingField("low");
        assert_eq!(err.to_string(), "missing field: low");
    }
}
