//! Audio guide preview binary - resolves a record and runs its audio action
//! against a console backend instead of a real audio device.
//!
//! Usage:
//!   cargo run -- data/sample-monument.json          # default language
//!   cargo run -- data/sample-monument.json telugu   # explicit language
//!
//! Environment variables (all optional):
//! - NARRATION_API_KEY (required only when the record has no stored
//!   recording for the selected language)
//! - NARRATION_API_URL, NARRATION_MODEL
//! - GUIDE_DEFAULT_LANGUAGE (defaults to english)

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use heritage_guide::config::Config;
use heritage_guide::error::GuideError;
use heritage_guide::i18n::Language;
use heritage_guide::player::{GuidePlayer, SpeechBackend};
use heritage_guide::policy::AudioAction;
use heritage_guide::record::Monument;

/// Backend that prints what a device would play instead of playing it.
struct ConsoleBackend;

#[async_trait]
impl SpeechBackend for ConsoleBackend {
    async fn play_url(&self, url: &str) -> anyhow::Result<()> {
        println!("--- Stored recording ---");
        println!("{}", url);
        Ok(())
    }

    async fn speak(&self, text: &str, locale_tag: &str) -> anyhow::Result<()> {
        println!("--- Synthesized narration ({}) ---", locale_tag);
        println!("{}", text);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("heritage_guide=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let record_path = args
        .get(1)
        .context("Usage: heritage-guide <record.json> [language]")?;

    // Load configuration from environment
    let config = Config::from_env()?;
    let language = match args.get(2) {
        Some(code) => Language::from_code(code)?,
        None => config.default_language,
    };
    let strings = language.strings();

    info!("Loading record from {}", record_path);
    let contents = std::fs::read_to_string(record_path)
        .with_context(|| format!("Failed to read record file {}", record_path))?;
    let monument: Monument =
        serde_json::from_str(&contents).context("Failed to parse record JSON")?;

    println!(
        "{} ({})",
        monument.name,
        monument.location.as_deref().unwrap_or("location unknown")
    );
    if let Some(model_url) = &monument.model_url {
        println!("3D model: {}", model_url);
    } else if let Some(image_url) = &monument.image_url {
        println!("Image: {}", image_url);
    }

    let description = monument.description.resolve(language);
    println!("\n{}", strings.description_heading);
    println!(
        "{}",
        if description.is_empty() {
            strings.no_content
        } else {
            description
        }
    );

    let historical = monument.historical_info.resolve(language);
    if !historical.is_empty() {
        println!("\n{}", strings.history_heading);
        println!("{}", historical);
    }

    for place in monument.nearby_places() {
        println!(
            "Nearby: {} ({})",
            place.name,
            place.distance.as_deref().unwrap_or("distance unknown")
        );
    }
    for hotel in monument.hotels() {
        println!("Hotel: {}", hotel.name);
    }

    info!("Resolving audio guide in {}", language.name());
    let player = GuidePlayer::new(config, ConsoleBackend);

    println!();
    match player.play(&monument, language).await {
        Ok(AudioAction::Playback { .. }) | Ok(AudioAction::Narrate { .. }) => {
            println!("{}", strings.now_playing);
        }
        Err(GuideError::InsufficientContent) => {
            println!("{}", strings.nothing_to_play);
        }
        Err(error @ GuideError::NarrationFailed(_)) => {
            info!("Narration failed: {}", error);
            println!("{}", strings.narration_failed);
        }
        Err(error @ (GuideError::PlaybackFailed(_) | GuideError::SynthesisFailed(_))) => {
            info!("Audio failed: {}", error);
            println!("{}", strings.playback_failed);
        }
        Err(error) => return Err(error.into()),
    }

    Ok(())
}
