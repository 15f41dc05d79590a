use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "scribe-export")]
#[command(about = "Export transcription results as SRT, VTT, TXT, or JSON files.")]
pub struct Args {
    /// Path to config TOML (defaults to ./config.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a transcript JSON file into a downloadable export
    Export(ExportCmd),
    /// Check whether a string is a valid absolute URL
    CheckUrl(CheckUrlCmd),
    /// Print the effective default config as TOML and exit
    PrintDefaultConfig,
}

#[derive(Debug, Parser)]
pub struct ExportCmd {
    /// Transcript JSON path, or '-' for stdin
    pub input: String,

    /// Export format
    #[arg(long, value_enum)]
    pub to: Format,

    /// File name without extension (defaults to the transcript title or input stem)
    #[arg(long)]
    pub title: Option<String>,

    /// Directory to write the export into (overrides config)
    #[arg(short = 'd', long)]
    pub output_dir: Option<PathBuf>,

    /// Keep per-word timing in JSON exports (overrides config)
    #[arg(long, overrides_with = "no_include_words")]
    pub include_words: bool,

    /// Drop per-word timing from JSON exports (overrides config)
    #[arg(long, overrides_with = "include_words")]
    pub no_include_words: bool,

    /// Write to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Allow overwriting an existing export file
    #[arg(long)]
    pub overwrite: bool,
}

impl ExportCmd {
    /// `None` when neither flag was given and the config decides.
    pub fn include_words_override(&self) -> Option<bool> {
        match (self.include_words, self.no_include_words) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug, Parser)]
pub struct CheckUrlCmd {
    pub url: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    Srt,
    Vtt,
    Txt,
    Json,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Srt => "srt",
            Format::Vtt => "vtt",
            Format::Txt => "txt",
            Format::Json => "json",
        }
    }
}
