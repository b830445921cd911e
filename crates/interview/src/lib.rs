//! Interactive question/answer prompts for CLI applications.
//!
//! `interview` asks a user a question on the terminal, checks the answer and
//! asks again when it is not acceptable, until the question's retry budget
//! runs out. Answers come back typed:
//!
//! - [`TextQuestion`] → `String`
//! - [`IntegerQuestion`] → `i64`, optionally bounded
//! - [`ChoiceQuestion`] → a [`Choice`], matched exactly, by prefix, by
//!   substring or fuzzily
//!
//! # Quick Start
//!
//! ```no_run
//! use interview::{ask_choice, ask_int, Choice, ChoiceQuestion, IntegerQuestion, MatchType};
//!
//! let age = ask_int(
//!     &IntegerQuestion::new("Please tell me your age")
//!         .min(21)
//!         .max(99)
//!         .show_bounds(true)
//!         .retries(5),
//! )?;
//!
//! let fruit = ask_choice(
//!     &ChoiceQuestion::new("Please pick a fruit")
//!         .choices([Choice::new("apple", ()), Choice::new("raspberry", ())])
//!         .match_type(MatchType::Fuzzy)
//!         .ignore_case(true)
//!         .show_choices(true),
//! )?;
//!
//! println!("{} years, {}", age, fruit);
//! # Ok::<(), interview::InterviewError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! Interviewer
//! ├── PromptRenderer  → shows the prompt and its hints
//! ├── LineSource      → yields one line per attempt
//! └── retry loop      → parse / match, accept or try again
//! ```
//!
//! # Testing
//!
//! The terminal is injected, so questions can be answered from a script:
//!
//! ```
//! use interview::{IntegerQuestion, Interviewer, RecordingRenderer, ScriptedLines};
//!
//! let mut interviewer = Interviewer::new(
//!     ScriptedLines::new(["twelve", "12"]),
//!     RecordingRenderer::new(),
//! );
//! let question = IntegerQuestion::new("How many?").retries(1);
//! assert_eq!(interviewer.ask_int(&question).unwrap(), 12);
//! ```
//!
//! # Features
//!
//! - **`serde`** - (De)serialize [`MatchType`] by its kebab-case name

mod error;
pub mod fuzzy;
mod interviewer;
mod matching;
mod question;
mod retry;
pub mod terminal;

pub use error::{InterviewError, Result};
pub use interviewer::{Interviewer, StdioInterviewer};
pub use matching::{find_match, MatchType, ParseMatchTypeError};
pub use question::{Choice, ChoiceQuestion, IntegerQuestion, Question, TextQuestion};

pub use terminal::{
    format_prompt, LineSource, PromptRenderer, ReaderLines, RecordingRenderer, RenderContext,
    ScriptedLines, WriterRenderer,
};

/// Ask a free text question on the terminal.
pub fn ask_string(question: &TextQuestion) -> Result<String> {
    Interviewer::stdio().ask_string(question)
}

/// Ask an integer question on the terminal.
pub fn ask_int(question: &IntegerQuestion) -> Result<i64> {
    Interviewer::stdio().ask_int(question)
}

/// Ask a choice question on the terminal.
pub fn ask_choice<V: Clone>(question: &ChoiceQuestion<V>) -> Result<Choice<V>> {
    Interviewer::stdio().ask_choice(question)
}
