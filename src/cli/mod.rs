//! CLI Module
//!
//! Command-line interface for rendering the sound effect catalog.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// sfxgen - procedural sound effect renderer
#[derive(Parser, Debug)]
#[command(name = "sfxgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the output directory comes from
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides the configuration file)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    #[command(flatten)]
    pub output: OutputArgs,

    /// Render only this effect (name or cue, repeatable)
    #[arg(long = "only", value_name = "EFFECT")]
    pub only: Vec<String>,

    /// Skip the encoder and keep the WAV as the final file
    #[arg(long)]
    pub wav_only: bool,

    /// Keep the intermediate WAV next to the encoded file
    #[arg(long)]
    pub keep_wav: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render effects to the output directory
    #[command(name = "render")]
    Render(RenderArgs),

    /// List the effects in the catalog
    #[command(name = "list")]
    List,

    /// Remove intermediate WAV files from the output directory
    #[command(name = "clean")]
    Clean(OutputArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from([
            "sfxgen", "render", "--out", "out", "--only", "knock", "--only", "chips_vacuum",
            "--wav-only",
        ]);
        match cli.command {
            Some(Commands::Render(args)) => {
                assert_eq!(args.output.out, Some(PathBuf::from("out")));
                assert_eq!(args.only, vec!["knock", "chips_vacuum"]);
                assert!(args.wav_only);
                assert!(!args.keep_wav);
            }
            other => panic!("Expected render command, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_verbose() {
        let cli = Cli::parse_from(["sfxgen", "list", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
