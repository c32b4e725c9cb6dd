//! Speech playback driver.
//!
//! [`SpeechBackend`] is the injected on-device audio capability, so the
//! resolution and fallback logic stays testable without a real device.
//! [`GuidePlayer`] is the per-view orchestrator: it owns the single
//! in-flight flag and the per-language narration cache, resolves the audio
//! action for a selection, and drives it through the backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::GuideError;
use crate::i18n::Language;
use crate::narration::{self, NarrationResult};
use crate::policy::{self, AudioAction};
use crate::record::Monument;

/// On-device audio capability injected into the guide.
///
/// Both operations resolve once output has started, not when it completes.
/// Implementations report start failures as errors; the player maps them to
/// [`GuideError::PlaybackFailed`] / [`GuideError::SynthesisFailed`].
#[async_trait]
pub trait SpeechBackend: Send + Sync {
    /// Load the audio resource at `url` and begin playing it.
    async fn play_url(&self, url: &str) -> anyhow::Result<()>;

    /// Synthesize `text` with the voice configured for `locale_tag`.
    async fn speak(&self, text: &str, locale_tag: &str) -> anyhow::Result<()>;
}

/// Releases the in-flight flag on every exit path, including cancellation
/// when the `play` future is dropped on navigation.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Per-view audio orchestrator.
///
/// One instance per rendered detail view. At most one audio action is in
/// flight at a time; further requests are rejected with
/// [`GuideError::Busy`] until the current one reaches an exit path, and the
/// presentation layer can mirror the flag through [`GuidePlayer::is_busy`]
/// to disable its trigger control.
pub struct GuidePlayer<B: SpeechBackend> {
    config: Config,
    client: reqwest::Client,
    backend: B,
    in_flight: AtomicBool,
    narrations: Mutex<HashMap<Language, String>>,
}

impl<B: SpeechBackend> GuidePlayer<B> {
    pub fn new(config: Config, backend: B) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            backend,
            in_flight: AtomicBool::new(false),
            narrations: Mutex::new(HashMap::new()),
        }
    }

    /// Whether an audio action is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Narration already generated for `language` on this view, if any.
    pub fn cached_narration(&self, language: Language) -> Option<NarrationResult> {
        self.lock_narrations().get(&language).map(|text| NarrationResult {
            language,
            narrated_text: text.clone(),
        })
    }

    /// Drop view-scoped state. Call when navigating away from the record.
    pub fn reset(&self) {
        self.lock_narrations().clear();
    }

    /// Resolve and run the audio action for `monument` in `language`.
    ///
    /// Returns the action that ran; for narration the returned text is the
    /// generated narration as spoken. Rejects with [`GuideError::Busy`]
    /// while another action is in flight. The in-flight flag is released on
    /// every exit path: success, any failure, or cancellation.
    pub async fn play(
        &self,
        monument: &Monument,
        language: Language,
    ) -> Result<AudioAction, GuideError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(GuideError::Busy);
        }
        let _guard = InFlightGuard(&self.in_flight);

        match policy::resolve_audio_action(monument, language)? {
            AudioAction::Playback { url } => {
                debug!(
                    "Playing stored {} recording for '{}'",
                    language.name(),
                    monument.name
                );
                self.backend
                    .play_url(&url)
                    .await
                    .map_err(GuideError::PlaybackFailed)?;
                Ok(AudioAction::Playback { url })
            }
            AudioAction::Narrate { text } => {
                let cached = self.lock_narrations().get(&language).cloned();
                let narrated = match cached {
                    Some(narrated) => {
                        debug!("Using cached {} narration", language.name());
                        narrated
                    }
                    None => {
                        info!(
                            "Generating {} narration for '{}'",
                            language.name(),
                            monument.name
                        );
                        let generated =
                            narration::narrate(&self.client, &self.config, &text, language)
                                .await?;
                        self.lock_narrations().insert(language, generated.clone());
                        generated
                    }
                };

                self.backend
                    .speak(&narrated, language.locale_tag())
                    .await
                    .map_err(GuideError::SynthesisFailed)?;
                Ok(AudioAction::Narrate { text: narrated })
            }
        }
    }

    fn lock_narrations(&self) -> MutexGuard<'_, HashMap<Language, String>> {
        self.narrations.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
