//! Multilingual content resolution and narration fallback for heritage-site
//! audio guides.
//!
//! Given a site record with per-language optional text fields and optional
//! pre-recorded audio URLs, the crate resolves the displayed text and the
//! audio action for a selected language: stored recordings play as-is, and
//! sites without one fall back to narration generated by an external AI
//! gateway and spoken through an injected on-device synthesis capability.
//!
//! Persistence, authentication, file storage, and the UI are external
//! collaborators; records arrive here already fetched.

pub mod config;
pub mod error;
pub mod i18n;
pub mod narration;
pub mod player;
pub mod policy;
pub mod record;

pub use config::Config;
pub use error::{GuideError, Result};
pub use i18n::Language;
pub use narration::NarrationResult;
pub use player::{GuidePlayer, SpeechBackend};
pub use policy::{resolve_audio_action, AudioAction};
pub use record::{LocalizedField, Monument, Recommendation};
