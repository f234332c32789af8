//! Catalog-specific error types.

/// Errors that can occur when reading catalog tokens.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Token is not part of the catalog
    #[error("Unknown {catalog} token: {token:?}")]
    UnknownToken {
        catalog: &'static str,
        token: String,
    },

    /// No catalog has this name
    #[error("Unknown catalog: {0}")]
    UnknownCatalog(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let error = CatalogError::UnknownToken {
            catalog: "TaskStatuses",
            token: "DONE".to_string(),
        };
        assert!(error.to_string().contains("TaskStatuses"));
        assert!(error.to_string().contains("\"DONE\""));

        let error = CatalogError::UnknownCatalog("Colors".to_string());
        assert_eq!(error.to_string(), "Unknown catalog: Colors");
    }
}
