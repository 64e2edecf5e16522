//! Error types for history export.

/// Errors raised while rendering or writing a tabular export.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Writing the export to its destination failed.
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be formatted.
    #[error("export format error: {0}")]
    Format(#[from] std::fmt::Error),
}
