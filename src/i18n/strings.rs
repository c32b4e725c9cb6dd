/// All localized user-facing strings for a language
///
/// The guide core returns typed errors; these are the messages the
/// presentation layer shows for each recoverable outcome, pre-translated so
/// a Hindi or Telugu visitor is never bounced back to English for an error.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Section Headings ====================
    /// Heading above the resolved description text
    pub description_heading: &'static str,

    /// Heading above the resolved historical information text
    pub history_heading: &'static str,

    // ==================== Content Fallback ====================
    /// Shown when a field resolves to the empty string in every tier
    pub no_content: &'static str,

    // ==================== Audio Outcomes ====================
    /// Shown when the audio action starts (recording or narration)
    pub now_playing: &'static str,

    /// Shown for `InsufficientContent`: there is nothing to narrate
    pub nothing_to_play: &'static str,

    /// Shown for `NarrationFailed`; prompts the visitor to retry
    pub narration_failed: &'static str,

    /// Shown for `PlaybackFailed` / `SynthesisFailed`
    pub playback_failed: &'static str,
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    description_heading: "Description",
    history_heading: "Historical Information",
    no_content: "No content available.",
    now_playing: "Audio guide started in English.",
    nothing_to_play: "Nothing to play for this site yet.",
    narration_failed: "Could not generate the narration. Please try again.",
    playback_failed: "Could not play the audio. Please try again.",
};

// ==================== Hindi Strings ====================

pub const HINDI_STRINGS: LanguageStrings = LanguageStrings {
    description_heading: "विवरण",
    history_heading: "ऐतिहासिक जानकारी",
    no_content: "कोई सामग्री उपलब्ध नहीं है।",
    now_playing: "ऑडियो गाइड हिन्दी में शुरू हो गई है।",
    nothing_to_play: "इस स्थल के लिए अभी चलाने को कुछ नहीं है।",
    narration_failed: "वर्णन तैयार नहीं हो सका। कृपया फिर से प्रयास करें।",
    playback_failed: "ऑडियो चलाया नहीं जा सका। कृपया फिर से प्रयास करें।",
};

// ==================== Telugu Strings ====================

pub const TELUGU_STRINGS: LanguageStrings = LanguageStrings {
    description_heading: "వివరణ",
    history_heading: "చారిత్రక సమాచారం",
    no_content: "కంటెంట్ అందుబాటులో లేదు.",
    now_playing: "ఆడియో గైడ్ తెలుగులో ప్రారంభమైంది.",
    nothing_to_play: "ఈ ప్రదేశానికి ప్లే చేయడానికి ఇంకా ఏమీ లేదు.",
    narration_failed: "వ్యాఖ్యానం రూపొందించలేకపోయాము. దయచేసి మళ్లీ ప్రయత్నించండి.",
    playback_failed: "ఆడియో ప్లే చేయలేకపోయాము. దయచేసి మళ్లీ ప్రయత్నించండి.",
};
