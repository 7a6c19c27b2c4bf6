//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use log::info;

use crate::catalog::Effect;
use crate::cli::{OutputArgs, RenderArgs};
use crate::config::RenderConfig;
use crate::dsp::samples_for;
use crate::error::Result;
use crate::render::{clean_intermediates, RenderReport, Renderer};

/// Resolve the configuration file and apply command-line overrides.
pub fn resolve_config(args: &OutputArgs) -> Result<RenderConfig> {
    let mut config = RenderConfig::load_or_default(args.config.as_deref())?;
    if let Some(out) = &args.out {
        config.output_dir = out.clone();
    }
    Ok(config)
}

/// Render the selected effects and print a summary.
pub fn render(args: &RenderArgs) -> Result<RenderReport> {
    let mut config = resolve_config(&args.output)?;
    if args.keep_wav {
        config.keep_intermediate = true;
    }

    let effects = Effect::select(&args.only)?;
    info!(
        "Rendering {} effect(s) into {}",
        effects.len(),
        config.output_dir.display()
    );

    let renderer = if args.wav_only {
        Renderer::wav_only(config)
    } else {
        Renderer::new(config)
    };
    let report = renderer.render_all(&effects)?;

    let generated: Vec<String> = report.succeeded().map(|f| f.file_name()).collect();
    if !generated.is_empty() {
        println!("Generated: {}", generated.join(", "));
    }
    for (effect, err) in report.failed() {
        println!("Failed: {} [{}] {}", effect, err.error_code(), err);
        for suggestion in err.recovery_suggestions() {
            println!("  - {}", suggestion);
        }
    }
    if report.failed().any(|(_, err)| err.is_encoder_failure()) {
        println!("Unencoded WAV files were left in place; 'sfxgen clean' removes them");
    }
    if let Some(path) = &report.manifest_path {
        println!("Manifest: {}", path.display());
    }

    Ok(report)
}

/// Print the effect catalog.
pub fn list() -> Result<()> {
    println!(
        "{:<20} {:<8} {:>9} {:>8} {:>8}",
        "EFFECT", "CUE", "DURATION", "SAMPLES", "GAIN"
    );
    println!("{:-<57}", "");
    for effect in Effect::ALL {
        println!(
            "{:<20} {:<8} {:>8.2}s {:>8} {:>+6.1}dB",
            effect.name(),
            effect.cue(),
            effect.duration_secs(),
            samples_for(effect.duration_secs()),
            effect.export_gain_db()
        );
    }
    Ok(())
}

/// Remove leftover intermediate WAV files.
pub fn clean(args: &OutputArgs) -> Result<()> {
    let config = resolve_config(args)?;
    info!("Cleaning: {}", config.output_dir.display());

    let removed = clean_intermediates(&config.output_dir)?;
    println!(
        "Removed {} intermediate file(s) from {}",
        removed.len(),
        config.output_dir.display()
    );
    Ok(())
}
