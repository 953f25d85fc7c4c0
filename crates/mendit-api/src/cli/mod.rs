//! CLI command definitions for the `mendit` binary.
//!
//! Uses clap derive macros for argument parsing. Commands are grouped by
//! feature (`mediate`, `live`, `archive`, `quiz`).

pub mod archive;
pub mod display;
pub mod heal;
pub mod live;
pub mod mediate;
pub mod quiz;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// AI-style conflict mediation in your terminal.
#[derive(Parser)]
#[command(name = "mendit", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to stderr as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Also export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, hide = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Describe a conflict and get a mediation with a peace plan.
    Mediate(mediate::MediateArgs),

    /// Run a live mediation chat session.
    Live {
        #[command(subcommand)]
        action: LiveCommand,
    },

    /// Browse past mediations.
    Archive {
        #[command(subcommand)]
        action: ArchiveCommand,
    },

    /// Discover your conflict style.
    Quiz {
        #[command(subcommand)]
        action: QuizCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum LiveCommand {
    /// Start a new session and wait for others to join.
    Create {
        /// Your display name.
        #[arg(long)]
        name: Option<String>,

        /// Relationship between participants.
        #[arg(long, short)]
        relationship: Option<String>,

        /// Mediation tone.
        #[arg(long, short)]
        tone: Option<String>,
    },

    /// Join an existing session by code.
    Join {
        /// Six-character session code.
        code: Option<String>,

        /// Your display name.
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ArchiveCommand {
    /// List archived mediations, newest first.
    #[command(alias = "ls")]
    List {
        /// Case-insensitive search on names and peace plan text.
        #[arg(long, short)]
        search: Option<String>,

        /// all, healed, unhealed, or a relationship tag.
        #[arg(long, short, default_value = "all")]
        filter: String,
    },

    /// Show one archived mediation in full.
    Show {
        /// Mediation ID.
        id: String,
    },

    /// Totals across the archive.
    Stats,

    /// Delete every archived mediation.
    Clear {
        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum QuizCommand {
    /// Answer the five questions.
    Take {
        /// Answers in order, comma separated (direct, harmonizer,
        /// collaborator, avoider). Prompts when omitted.
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<String>>,
    },

    /// Show the saved conflict style.
    Show,

    /// Forget the saved conflict style.
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_mediate_with_people() {
        let cli = Cli::try_parse_from([
            "mendit",
            "mediate",
            "--relationship",
            "couple",
            "--tone",
            "funny",
            "--person",
            "Ana: you're always busy",
            "--person",
            "Ben: my job is hard",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Mediate(args) => {
                assert_eq!(args.person.len(), 2);
                assert_eq!(args.relationship.as_deref(), Some("couple"));
            }
            _ => panic!("expected mediate"),
        }
    }

    #[test]
    fn parses_quiz_answers_list() {
        let cli = Cli::try_parse_from([
            "mendit",
            "quiz",
            "take",
            "--answers",
            "direct,direct,avoider,direct,harmonizer",
        ])
        .unwrap();
        match cli.command {
            Commands::Quiz {
                action: QuizCommand::Take { answers: Some(answers) },
            } => assert_eq!(answers.len(), 5),
            _ => panic!("expected quiz take"),
        }
    }

    #[test]
    fn parses_archive_filter() {
        let cli = Cli::try_parse_from(["mendit", "archive", "ls", "-f", "healed", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::Archive {
                action: ArchiveCommand::List { .. }
            }
        ));
    }
}
