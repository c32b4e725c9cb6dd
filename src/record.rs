//! Site records as supplied by the external record source.
//!
//! The guide never queries for records itself; it consumes already-fetched
//! [`Monument`] values, typically deserialized from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// A text field carrying the legacy pre-multilingual value plus optional
/// per-language overrides.
///
/// The legacy `base` text stays independent of the variants: it is the
/// second fallback tier, never a mirror of any particular language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedField {
    /// Legacy default text, pre-dating the multilingual columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Per-language overrides, keyed by language code.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: BTreeMap<Language, String>,
}

impl LocalizedField {
    /// Resolve this field for `language`.
    ///
    /// Returns the language variant if non-empty, else the legacy base text
    /// if non-empty, else the empty string. Whitespace-only text counts as
    /// empty at every tier, and the result is trimmed. Missing data is never
    /// an error; the empty string is the valid terminal state.
    ///
    /// Fallback never crosses languages: a missing Telugu variant falls back
    /// to the base text, not to the Hindi or English variant.
    pub fn resolve(&self, language: Language) -> &str {
        if let Some(variant) = self.variants.get(&language) {
            let trimmed = variant.trim();
            if !trimmed.is_empty() {
                return trimmed;
            }
        }
        match &self.base {
            Some(base) if !base.trim().is_empty() => base.trim(),
            _ => "",
        }
    }
}

/// Kind of recommendation attached to a site record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    NearbyPlace,
    Hotel,
}

/// A nearby place or hotel suggested alongside a site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub contact: Option<String>,
}

/// A heritage-site record with localized text, media, and audio fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monument {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,

    /// Site photograph, if any.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Embeddable 3D model, shown instead of the photograph when present.
    #[serde(default)]
    pub model_url: Option<String>,

    #[serde(default)]
    pub description: LocalizedField,
    #[serde(default)]
    pub historical_info: LocalizedField,

    /// Pre-recorded narration clips, keyed by language.
    #[serde(default)]
    pub audio: BTreeMap<Language, String>,

    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl Monument {
    /// Pre-recorded clip URL for `language`, if one is configured.
    pub fn audio_url(&self, language: Language) -> Option<&str> {
        self.audio
            .get(&language)
            .map(String::as_str)
            .filter(|url| !url.trim().is_empty())
    }

    /// Recommendations of the nearby-place kind.
    pub fn nearby_places(&self) -> impl Iterator<Item = &Recommendation> {
        self.recommendations
            .iter()
            .filter(|r| r.kind == RecommendationKind::NearbyPlace)
    }

    /// Recommendations of the hotel kind.
    pub fn hotels(&self) -> impl Iterator<Item = &Recommendation> {
        self.recommendations
            .iter()
            .filter(|r| r.kind == RecommendationKind::Hotel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Helper Functions ====================

    fn field(base: Option<&str>, variants: &[(Language, &str)]) -> LocalizedField {
        LocalizedField {
            base: base.map(str::to_string),
            variants: variants
                .iter()
                .map(|(language, text)| (*language, text.to_string()))
                .collect(),
        }
    }

    fn monument_with(description: LocalizedField, historical_info: LocalizedField) -> Monument {
        Monument {
            id: "golconda".to_string(),
            name: "Golconda Fort".to_string(),
            location: Some("Hyderabad".to_string()),
            category: Some("Fort".to_string()),
            image_url: None,
            model_url: None,
            description,
            historical_info,
            audio: BTreeMap::new(),
            recommendations: vec![],
        }
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_returns_requested_variant() {
        let field = field(Some("desc"), &[(Language::Hindi, "क")]);
        assert_eq!(field.resolve(Language::Hindi), "क");
    }

    #[test]
    fn test_resolve_falls_back_to_base_for_missing_variant() {
        let field = field(Some("desc"), &[(Language::Hindi, "क")]);
        assert_eq!(field.resolve(Language::Telugu), "desc");
    }

    #[test]
    fn test_resolve_empty_when_no_tier_has_text() {
        let field = field(None, &[]);
        assert_eq!(field.resolve(Language::English), "");
    }

    #[test]
    fn test_resolve_skips_empty_variant() {
        let field = field(Some("legacy"), &[(Language::English, "")]);
        assert_eq!(field.resolve(Language::English), "legacy");
    }

    #[test]
    fn test_resolve_treats_whitespace_as_empty() {
        let field = field(Some("   "), &[(Language::Telugu, " \n\t ")]);
        assert_eq!(field.resolve(Language::Telugu), "");
    }

    #[test]
    fn test_resolve_never_mixes_languages() {
        // A missing Telugu variant must not surface the Hindi one.
        let field = field(None, &[(Language::Hindi, "हिन्दी पाठ")]);
        assert_eq!(field.resolve(Language::Telugu), "");
    }

    #[test]
    fn test_resolve_trims_surrounding_whitespace() {
        let field = field(None, &[(Language::English, "  A famous fort.\n")]);
        assert_eq!(field.resolve(Language::English), "A famous fort.");
    }

    #[test]
    fn test_resolve_default_field_is_empty() {
        assert_eq!(LocalizedField::default().resolve(Language::Hindi), "");
    }

    proptest! {
        // The resolver is total: for any base/variant contents the result is
        // the trimmed variant, the trimmed base, or the empty string.
        #[test]
        fn prop_resolve_matches_fallback_order(base in any::<Option<String>>(), variant in any::<Option<String>>()) {
            let field = LocalizedField {
                base: base.clone(),
                variants: variant
                    .clone()
                    .map(|text| BTreeMap::from([(Language::English, text)]))
                    .unwrap_or_default(),
            };

            let resolved = field.resolve(Language::English);

            let expected = match variant.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => text.to_string(),
                _ => match base.as_deref().map(str::trim) {
                    Some(text) if !text.is_empty() => text.to_string(),
                    _ => String::new(),
                },
            };
            prop_assert_eq!(resolved, expected);
        }
    }

    // ==================== audio_url Tests ====================

    #[test]
    fn test_audio_url_present() {
        let mut monument = monument_with(LocalizedField::default(), LocalizedField::default());
        monument.audio.insert(
            Language::Hindi,
            "https://cdn.example.com/golconda-hi.mp3".to_string(),
        );

        assert_eq!(
            monument.audio_url(Language::Hindi),
            Some("https://cdn.example.com/golconda-hi.mp3")
        );
        assert_eq!(monument.audio_url(Language::English), None);
    }

    #[test]
    fn test_audio_url_blank_counts_as_absent() {
        let mut monument = monument_with(LocalizedField::default(), LocalizedField::default());
        monument.audio.insert(Language::Telugu, "   ".to_string());

        assert_eq!(monument.audio_url(Language::Telugu), None);
    }

    // ==================== Recommendation Tests ====================

    #[test]
    fn test_recommendations_split_by_kind() {
        let mut monument = monument_with(LocalizedField::default(), LocalizedField::default());
        monument.recommendations = vec![
            Recommendation {
                id: "1".to_string(),
                kind: RecommendationKind::NearbyPlace,
                name: "Qutb Shahi Tombs".to_string(),
                description: None,
                distance: Some("2 km".to_string()),
                rating: Some(4.5),
                contact: None,
            },
            Recommendation {
                id: "2".to_string(),
                kind: RecommendationKind::Hotel,
                name: "Fort View Inn".to_string(),
                description: None,
                distance: None,
                rating: None,
                contact: Some("+91 00000 00000".to_string()),
            },
        ];

        assert_eq!(monument.nearby_places().count(), 1);
        assert_eq!(monument.hotels().count(), 1);
        assert_eq!(monument.hotels().next().unwrap().name, "Fort View Inn");
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_monument_deserializes_from_record_source_json() {
        let json = r#"{
            "id": "charminar",
            "name": "Charminar",
            "location": "Hyderabad, Telangana",
            "category": "Monument",
            "image_url": "https://cdn.example.com/charminar.jpg",
            "description": {
                "base": "An iconic 16th-century monument with four grand minarets.",
                "variants": {
                    "hindi": "चार भव्य मीनारों वाला प्रतिष्ठित स्मारक।"
                }
            },
            "historical_info": {
                "variants": {
                    "english": "Built in 1591 by Muhammad Quli Qutb Shah."
                }
            },
            "audio": {
                "english": "https://cdn.example.com/charminar-en.mp3"
            },
            "recommendations": [
                {
                    "id": "r1",
                    "type": "nearby_place",
                    "name": "Laad Bazaar",
                    "distance": "200 m"
                }
            ]
        }"#;

        let monument: Monument = serde_json::from_str(json).expect("Should deserialize");

        assert_eq!(monument.id, "charminar");
        assert_eq!(
            monument.description.resolve(Language::Hindi),
            "चार भव्य मीनारों वाला प्रतिष्ठित स्मारक।"
        );
        assert_eq!(
            monument.description.resolve(Language::Telugu),
            "An iconic 16th-century monument with four grand minarets."
        );
        assert_eq!(
            monument.historical_info.resolve(Language::English),
            "Built in 1591 by Muhammad Quli Qutb Shah."
        );
        assert_eq!(
            monument.audio_url(Language::English),
            Some("https://cdn.example.com/charminar-en.mp3")
        );
        assert_eq!(monument.audio_url(Language::Hindi), None);
        assert_eq!(monument.nearby_places().count(), 1);
        assert!(monument.model_url.is_none());
    }

    #[test]
    fn test_monument_with_minimal_fields() {
        let json = r#"{"id": "x", "name": "Unnamed Site"}"#;
        let monument: Monument = serde_json::from_str(json).expect("Should deserialize");

        assert_eq!(monument.description.resolve(Language::English), "");
        assert!(monument.audio.is_empty());
        assert!(monument.recommendations.is_empty());
    }

    #[test]
    fn test_monument_round_trip() {
        let mut monument = monument_with(
            field(Some("desc"), &[(Language::Telugu, "వివరణ")]),
            field(None, &[]),
        );
        monument
            .audio
            .insert(Language::Telugu, "https://cdn.example.com/te.mp3".to_string());

        let json = serde_json::to_string(&monument).expect("Should serialize");
        let restored: Monument = serde_json::from_str(&json).expect("Should deserialize");

        assert_eq!(restored.description, monument.description);
        assert_eq!(
            restored.audio_url(Language::Telugu),
            Some("https://cdn.example.com/te.mp3")
        );
    }
}
