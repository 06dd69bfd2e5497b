//! # Vocabulary Control
//!
//! Command-line access to the voice command vocabulary: list phrases and
//! groups, look up settings, try recognition on sample text, and export the
//! longest-first document for other consumers.
//!
//! ## Command Set
//!
//! - `phrases` - All phrases, longest first
//! - `group <category>` - One category, longest first
//! - `setting <NAME>` - One setting (phrase aliases are resolved)
//! - `match <TEXT...>` - Longest-match recognition
//! - `mode [--prefix P] <TEXT...>` - Transcription mode resolution
//! - `export [--output FILE]` - Longest-first JSON document
//! - `check` - Load, validate, and summarize

pub mod logging;

use anyhow::Context;
use clap::{Parser, Subcommand};
use services_phrase_matcher::{resolve_mode, PhraseMatcher};
use services_vocabulary::{export_document, VocabularySource, VocabularyTable};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use vox_types::{CommandPhrase, SettingValue};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "voxctl", version, about = "Inspect the voice command vocabulary")]
pub struct Cli {
    /// Vocabulary document to use instead of the embedded one (or set VOX_VOCABULARY)
    #[arg(long, global = true, value_name = "FILE")]
    pub vocabulary: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// `--vocabulary` when given, otherwise `VOX_VOCABULARY`, otherwise embedded
    pub fn source(&self) -> VocabularySource {
        match &self.vocabulary {
            Some(path) => VocabularySource::File(path.clone()),
            None => VocabularySource::from_env(),
        }
    }
}

/// Subcommands
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List every phrase, longest first
    Phrases,

    /// List the phrases of one category, longest first
    Group {
        /// edit, tab, search, mode, multimodal-marker, prompt-suffix, or misc
        category: String,
    },

    /// Print a setting value
    Setting {
        /// Setting name, e.g. ZOOM_MAX
        name: String,
    },

    /// Recognize the longest phrase at the start of the text
    Match {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Resolve the multimodal transcription mode of the text
    Mode {
        /// Mode descriptor to fall back to
        #[arg(long)]
        prefix: Option<String>,

        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Write the vocabulary as a longest-first JSON document
    Export {
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Validate the vocabulary and print a summary
    Check,
}

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Completed normally
    Done,
    /// `match` found no phrase
    NoMatch,
}

/// Runs a parsed command, writing its output to `out`
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let source = cli.source();
    let table = source.table().with_context(|| match &source {
        VocabularySource::Embedded => "failed to load embedded vocabulary".to_string(),
        VocabularySource::File(path) => {
            format!("failed to load vocabulary from {}", path.display())
        }
    })?;
    let table: &VocabularyTable = &table;
    debug!(command = ?cli.command, phrases = table.len(), "running command");

    match &cli.command {
        Command::Phrases => {
            for phrase in table.get_all_phrases() {
                write_phrase(out, phrase)?;
            }
        }
        Command::Group { category } => {
            for phrase in table.get_group(category)? {
                write_phrase(out, phrase)?;
            }
        }
        Command::Setting { name } => match table.get_setting(name)? {
            SettingValue::Phrase(_) => {
                let phrase = table.resolve_phrase_setting(name)?;
                writeln!(out, "{}\t{}", phrase.name, phrase.text)?;
            }
            value => writeln!(out, "{}", value)?,
        },
        Command::Match { text } => {
            let matcher = PhraseMatcher::from_table(table);
            match matcher.recognize(&text.join(" ")) {
                Some(hit) => {
                    write_phrase(out, hit.phrase)?;
                    if !hit.remainder.is_empty() {
                        writeln!(out, "remainder\t{}", hit.remainder)?;
                    }
                }
                None => {
                    writeln!(out, "no match")?;
                    return Ok(Outcome::NoMatch);
                }
            }
        }
        Command::Mode { prefix, text } => {
            let resolution = resolve_mode(&text.join(" "), prefix.as_deref());
            writeln!(out, "{}\t{}", resolution.mode, resolution.text)?;
        }
        Command::Export { output } => {
            let bytes = export_document(table)?;
            match output {
                Some(path) => fs::write(path, &bytes)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => out.write_all(&bytes)?,
            }
        }
        Command::Check => {
            writeln!(
                out,
                "ok: {} phrases, {} settings",
                table.len(),
                table.settings().len()
            )?;
            for category in table.categories() {
                writeln!(out, "{}\t{}", category, table.group(category).len())?;
            }
        }
    }

    Ok(Outcome::Done)
}

fn write_phrase(out: &mut impl Write, phrase: &CommandPhrase) -> std::io::Result<()> {
    writeln!(out, "{}\t{}\t{}", phrase.name, phrase.category, phrase.text)
}
