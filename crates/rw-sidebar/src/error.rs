//! Error types for sidebar ordering.

/// Fatal error that aborts an ordering run before any group is touched.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// Custom sort mode selected without a comparator.
    #[error("custom sort mode selected but no custom comparator supplied")]
    MissingComparator,
}

/// Error returned when page front matter cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    /// YAML parsing error.
    #[error("Invalid front matter YAML: {0}")]
    Parse(#[source] serde_yaml::Error),
}
