//! Language type: the closed set of guide languages.
//!
//! The guide supports exactly three languages. Arbitrary strings enter the
//! set only through [`Language::from_code`], which rejects anything else, so
//! code past that boundary can rely on the set being closed.

use serde::{Deserialize, Serialize};

use crate::error::GuideError;
use crate::i18n::strings::{LanguageStrings, ENGLISH_STRINGS, HINDI_STRINGS, TELUGU_STRINGS};

/// A supported guide language.
///
/// Serializes to its lowercase code (`"english"`, `"hindi"`, `"telugu"`),
/// the form used as map keys in record JSON and at the selection boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Telugu,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Telugu];

    /// Parse a language selection received at the boundary.
    ///
    /// Input is trimmed and lowercased before matching, so UI values like
    /// `"English"` are accepted.
    ///
    /// # Returns
    /// * `Ok(Language)` for `english`, `hindi`, or `telugu`
    /// * `Err(GuideError::UnsupportedLanguage)` for anything else
    pub fn from_code(code: &str) -> Result<Language, GuideError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(Language::English),
            "hindi" => Ok(Language::Hindi),
            "telugu" => Ok(Language::Telugu),
            _ => Err(GuideError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// The lowercase language code (e.g., `"hindi"`).
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Telugu => "telugu",
        }
    }

    /// The English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Telugu => "Telugu",
        }
    }

    /// The language name in its native script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Telugu => "తెలుగు",
        }
    }

    /// Locale tag handed to the speech synthesizer.
    ///
    /// This is the only path by which a locale reaches the synthesizer, so
    /// no value outside this mapping can ever be passed through.
    pub fn locale_tag(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Hindi => "hi-IN",
            Language::Telugu => "te-IN",
        }
    }

    /// Localized user-facing strings for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        match self {
            Language::English => &ENGLISH_STRINGS,
            Language::Hindi => &HINDI_STRINGS,
            Language::Telugu => &TELUGU_STRINGS,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
