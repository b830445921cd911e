//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use interview::MatchType;

/// Ask questions on the terminal and print the answers.
#[derive(Debug, Parser)]
#[command(name = "interview-demo", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask for your name (free text)
    Name,
    /// Ask for your age (bounded integer)
    Age(AgeArgs),
    /// Pick a fruit (choice with a default)
    Fruit(ChoiceArgs),
    /// Confirm with yes or no
    Confirm(ChoiceArgs),
    /// Run the questions listed in a TOML file
    Questionnaire(QuestionnaireArgs),
}

#[derive(Debug, Args)]
pub struct AgeArgs {
    /// Smallest accepted age
    #[arg(long, default_value_t = 21)]
    pub min: i64,

    /// Largest accepted age
    #[arg(long, default_value_t = 99)]
    pub max: i64,

    /// Extra attempts after the first
    #[arg(long, default_value_t = 5)]
    pub retries: u32,
}

#[derive(Debug, Args)]
pub struct ChoiceArgs {
    /// How input is matched: exact, substring-start, substring or fuzzy
    #[arg(long = "match", value_name = "TYPE")]
    pub match_type: Option<MatchType>,

    /// Compare case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Accept answers that match no choice
    #[arg(long)]
    pub free_text: bool,

    /// Extra attempts after the first
    #[arg(long, default_value_t = 2)]
    pub retries: u32,
}

#[derive(Debug, Args)]
pub struct QuestionnaireArgs {
    /// Questionnaire file
    pub file: PathBuf,

    /// Print the answers as JSON
    #[arg(long)]
    pub json: bool,
}
