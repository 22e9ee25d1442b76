use thiserror::Error;

/// Failures surfaced across the JSON boundary.
///
/// Malformed source is never an error (the lexer degrades instead); these
/// variants cover engine defects and serialization, and abort only the
/// current call.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// An encoded token type fell outside the legend. The consumer cannot
    /// interpret such an index, so the call fails rather than emit it.
    #[error("semantic token type {token_type} is outside the legend of {legend_size} types")]
    TokenTypeOutsideLegend { token_type: u32, legend_size: u32 },

    #[error("failed to serialize analysis result")]
    Serialize(#[from] serde_json::Error),
}
