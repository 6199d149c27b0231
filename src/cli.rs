//! CLI definitions for formfill.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// formfill CLI.
#[derive(Debug, Parser)]
#[command(name = "formfill")]
#[command(about = "Fill web forms with synthetic values generated by Gemini")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.formfill/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Gemini model to use instead of the configured one
    #[arg(long, global = true, env = "FORMFILL_MODEL")]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Manage the stored Gemini API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Fill the forms of a page snapshot
    Fill {
        /// Page snapshot (JSON)
        snapshot: PathBuf,

        /// Write the filled snapshot to this file (default: overwrite SNAPSHOT unless --json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the filled snapshot to stdout
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum KeyAction {
    /// Save the API key, replacing any previous one
    Save {
        /// Gemini API key
        key: String,
    },

    /// Show whether an API key is saved
    Show,

    /// Remove the saved API key
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_save() {
        let cli = Cli::try_parse_from(["formfill", "key", "save", "AIza-test"]).unwrap();
        match cli.command {
            Commands::Key {
                action: KeyAction::Save { key },
            } => assert_eq!(key, "AIza-test"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_fill_with_global_flags() {
        let cli = Cli::try_parse_from([
            "formfill",
            "fill",
            "page.json",
            "--output",
            "out.json",
            "--config",
            "custom.toml",
            "--model",
            "gemini-1.5-pro",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.model.as_deref(), Some("gemini-1.5-pro"));
        match cli.command {
            Commands::Fill {
                snapshot,
                output,
                json,
            } => {
                assert_eq!(snapshot, PathBuf::from("page.json"));
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_fill_requires_snapshot() {
        assert!(Cli::try_parse_from(["formfill", "fill"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["formfill"]).is_err());
    }
}
