//! DOM errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(usize),

    #[error("Node {0} is not an element")]
    NotAnElement(usize),

    #[error("Node {0} is not a select element")]
    NotASelect(usize),

    #[error("Invalid page snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_element_error() {
        let err = DomError::NotAnElement(4);
        assert_eq!(err.to_string(), "Node 4 is not an element");
    }

    #[test]
    fn test_invalid_snapshot_error() {
        let err = DomError::InvalidSnapshot("missing nodes".to_string());
        assert!(err.to_string().contains("missing nodes"));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DomError::from(json_err);
        assert!(err.to_string().contains("JSON error"));
    }
}
