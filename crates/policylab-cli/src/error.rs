//! Error types for the `policylab` binary.
//!
//! [`CliError`] wraps every failure a subcommand can hit so that `main`
//! can propagate with `?`.

/// Top-level error for the `policylab` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: policylab_core::ConfigError,
    },

    /// The checked evaluation path rejected the parameters.
    #[error("invalid parameters: {source}")]
    InvalidParameters {
        /// The underlying validation error.
        #[from]
        source: policylab_core::InvalidParameterError,
    },

    /// Writing the CSV export failed.
    #[error("export error: {source}")]
    Report {
        /// The underlying report error.
        #[from]
        source: policylab_report::ReportError,
    },

    /// There was nothing to analyse.
    #[error("no evaluations recorded")]
    EmptyHistory,

    /// Serializing output to JSON failed.
    #[error("JSON output error: {source}")]
    Json {
        /// The underlying serde error.
        #[from]
        source: serde_json::Error,
    },
}
