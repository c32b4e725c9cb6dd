//! Error types for the guide core.
//!
//! Every recoverable failure the presentation layer can surface is a variant
//! here; none of them is fatal to the hosting application.

use thiserror::Error;

/// Main error type for the guide core
#[derive(Error, Debug)]
pub enum GuideError {
    /// No text is available to narrate in any fallback tier. Raised before
    /// any network call is attempted.
    #[error("no content available to narrate")]
    InsufficientContent,

    /// A language outside the supported set reached the boundary.
    #[error("unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    /// The narration gateway call failed: missing credential, network
    /// error, non-success status, or malformed response.
    #[error("narration request failed: {0:#}")]
    NarrationFailed(anyhow::Error),

    /// A stored recording could not be loaded or started.
    #[error("audio playback failed: {0:#}")]
    PlaybackFailed(anyhow::Error),

    /// On-device speech synthesis could not be started.
    #[error("speech synthesis failed: {0:#}")]
    SynthesisFailed(anyhow::Error),

    /// Another audio action is already in flight on this view.
    #[error("an audio action is already in flight")]
    Busy,
}

/// Convenience Result type using the guide error
pub type Result<T> = std::result::Result<T, GuideError>;
