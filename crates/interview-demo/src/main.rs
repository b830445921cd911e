//! Interactive demo of the interview crate.
//!
//! ```text
//! interview-demo name
//! interview-demo age --min 18 --max 120
//! interview-demo fruit --match substring-start
//! interview-demo confirm --free-text
//! interview-demo questionnaire questions.toml --json
//! ```

mod cli;
mod questionnaire;

use anyhow::{Context, Result};
use clap::Parser;
use interview::{
    fuzzy, Choice, ChoiceQuestion, IntegerQuestion, InterviewError, Interviewer, MatchType,
    TextQuestion,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{AgeArgs, ChoiceArgs, Cli, Command, QuestionnaireArgs};
use crate::questionnaire::Questionnaire;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!(command = ?cli.command, "starting");

    match cli.command {
        Command::Name => name(),
        Command::Age(args) => age(&args),
        Command::Fruit(args) => fruit(&args),
        Command::Confirm(args) => confirm(&args),
        Command::Questionnaire(args) => run_questionnaire(&args),
    }
}

fn name() -> Result<()> {
    let answer = Interviewer::stdio().ask_string(&TextQuestion::new("Please tell me your name:"))?;
    println!("Your answer: {}.", answer);
    Ok(())
}

fn age(args: &AgeArgs) -> Result<()> {
    let question = IntegerQuestion::new("Please tell me your age")
        .min(args.min)
        .max(args.max)
        .show_bounds(true)
        .retries(args.retries);

    let answer = Interviewer::stdio().ask_int(&question)?;
    println!("Your answer: {} years.", answer);
    Ok(())
}

fn fruit(args: &ChoiceArgs) -> Result<()> {
    let apple = Choice::new("apple", "🍎");
    let question = choice_question("Please pick a fruit", args, MatchType::Fuzzy)
        .choices([apple.clone(), Choice::new("raspberry", "🍓")])
        .default_choice(apple);

    let answer = ask(&question)?;
    match answer.value() {
        Some(emoji) => println!("Your choice: {} {}", answer, emoji),
        None => println!("Your choice: {}", answer),
    }
    Ok(())
}

fn confirm(args: &ChoiceArgs) -> Result<()> {
    let yes = Choice::new("yes", true);
    let question = choice_question("Should we continue?", args, MatchType::Exact)
        .choices([yes.clone(), Choice::new("no", false)])
        .default_choice(yes);

    let answer = ask(&question)?;
    println!("Your choice: {}", answer);
    Ok(())
}

fn choice_question<V>(prompt: &str, args: &ChoiceArgs, fallback: MatchType) -> ChoiceQuestion<V> {
    ChoiceQuestion::new(prompt)
        .match_type(args.match_type.unwrap_or(fallback))
        .ignore_case(!args.case_sensitive)
        .allow_free_text(args.free_text)
        .retries(args.retries)
        .show_choices(true)
        .highlight_default(true)
}

/// Ask a choice question, hinting at close choices when every attempt fails.
fn ask<V: Clone>(question: &ChoiceQuestion<V>) -> Result<Choice<V>> {
    match Interviewer::stdio().ask_choice(question) {
        Ok(choice) => Ok(choice),
        Err(err) => {
            if let Some(input) = err.last_input().filter(|input| !input.is_empty()) {
                let names = question.choice_names();
                let near: Vec<&str> = fuzzy::rank_find_fold(input, &names)
                    .into_iter()
                    .map(|rank| rank.target)
                    .collect();
                if !near.is_empty() {
                    eprintln!("Did you mean one of: {}?", near.join(", "));
                }
            }
            Err(err.into())
        }
    }
}

fn run_questionnaire(args: &QuestionnaireArgs) -> Result<()> {
    let questionnaire = Questionnaire::load(&args.file)
        .with_context(|| format!("failed to load questionnaire {}", args.file.display()))?;
    info!(
        questions = questionnaire.questions.len(),
        retries_max = questionnaire.retries_max,
        "questionnaire loaded"
    );

    let responses = match questionnaire.run(&mut Interviewer::stdio()) {
        Ok(responses) => responses,
        Err(InterviewError::EndOfInput) => {
            anyhow::bail!("input closed before all questions were answered")
        }
        Err(err) => return Err(err.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&responses)?);
    } else {
        for response in &responses {
            println!("{}: {}", response.key, response.answer);
        }
    }
    Ok(())
}
