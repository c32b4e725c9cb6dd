//! Audio resolution policy: stored recording or generated narration.
//!
//! Pure decision logic with no side effects; the network and the audio
//! device are only touched later, by the narration client and the playback
//! driver, once the action here has been decided.

use crate::error::GuideError;
use crate::i18n::Language;
use crate::record::Monument;

/// The decided audio action for one record and one language selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioAction {
    /// Play the pre-recorded clip hosted at `url`.
    Playback { url: String },
    /// Generate narration for `text` and synthesize it on-device.
    Narrate { text: String },
}

/// Decide the audio action for `monument` in `language`.
///
/// A stored recording always wins, regardless of the text fields. Without
/// one, the narration text is composed from the resolved description and
/// historical information; if both resolve empty the policy fails with
/// [`GuideError::InsufficientContent`] instead of producing an empty
/// narration request.
pub fn resolve_audio_action(
    monument: &Monument,
    language: Language,
) -> Result<AudioAction, GuideError> {
    if let Some(url) = monument.audio_url(language) {
        return Ok(AudioAction::Playback {
            url: url.to_string(),
        });
    }

    let description = monument.description.resolve(language);
    let historical = monument.historical_info.resolve(language);
    let text = join_narration_segments(description, historical);

    if text.is_empty() {
        return Err(GuideError::InsufficientContent);
    }

    Ok(AudioAction::Narrate { text })
}

/// Join the two narration segments with `". "`, dropping empty segments so
/// the result never carries a dangling or leading separator.
fn join_narration_segments(description: &str, historical: &str) -> String {
    match (description.is_empty(), historical.is_empty()) {
        (false, false) => format!("{}. {}", description, historical),
        (false, true) => description.to_string(),
        (true, false) => historical.to_string(),
        (true, true) => String::new(),
    }
}
