//! Questionnaires loaded from TOML.
//!
//! ```toml
//! retries_max = 2
//!
//! [[questions]]
//! kind = "text"
//! key = "name"
//! prompt = "Please tell me your name:"
//!
//! [[questions]]
//! kind = "choice"
//! prompt = "Pick a fruit"
//! choices = ["apple", "raspberry"]
//! default = "apple"
//! match_type = "fuzzy"
//! ignore_case = true
//! ```
//!
//! When loading from a file, values are merged from, lowest priority first:
//! built-in defaults, the file, then `INTERVIEW_`-prefixed environment
//! variables (`INTERVIEW_RETRIES_MAX=5`).

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use interview::{
    Choice, ChoiceQuestion, IntegerQuestion, Interviewer, LineSource, MatchType, PromptRenderer,
    TextQuestion,
};
use serde::{Deserialize, Serialize};

/// A list of questions asked one after the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    /// Retries for questions that do not set their own.
    #[serde(default)]
    pub retries_max: u32,

    #[serde(default)]
    pub questions: Vec<QuestionConfig>,
}

/// One question of a questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum QuestionConfig {
    Text {
        #[serde(default)]
        key: Option<String>,
        prompt: String,
    },
    Integer {
        #[serde(default)]
        key: Option<String>,
        prompt: String,
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
        #[serde(default)]
        default: Option<i64>,
        #[serde(default)]
        retry_on_empty: bool,
        #[serde(default)]
        retries_max: Option<u32>,
        #[serde(default = "enabled")]
        show_bounds: bool,
    },
    Choice {
        #[serde(default)]
        key: Option<String>,
        prompt: String,
        choices: Vec<String>,
        #[serde(default)]
        default: Option<String>,
        #[serde(default)]
        match_type: MatchType,
        #[serde(default)]
        ignore_case: bool,
        #[serde(default)]
        allow_free_text: bool,
        #[serde(default)]
        retry_on_empty: bool,
        #[serde(default)]
        retries_max: Option<u32>,
        #[serde(default = "enabled")]
        show_choices: bool,
    },
}

fn enabled() -> bool {
    true
}

/// A recorded answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Integer(i64),
    Choice(String),
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Text(text) | Answer::Choice(text) => f.write_str(text),
            Answer::Integer(value) => write!(f, "{}", value),
        }
    }
}

/// An answer together with the key of the question it answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub key: String,
    pub answer: Answer,
}

impl QuestionConfig {
    /// The key answers are reported under; `q<position>` when unset.
    pub fn key(&self, position: usize) -> String {
        let key = match self {
            QuestionConfig::Text { key, .. }
            | QuestionConfig::Integer { key, .. }
            | QuestionConfig::Choice { key, .. } => key,
        };
        key.clone().unwrap_or_else(|| format!("q{}", position))
    }

    /// Ask this question through `interviewer`.
    pub fn ask<L: LineSource, P: PromptRenderer>(
        &self,
        interviewer: &mut Interviewer<L, P>,
        retries_fallback: u32,
    ) -> interview::Result<Answer> {
        match self {
            QuestionConfig::Text { prompt, .. } => interviewer
                .ask_string(&TextQuestion::new(prompt.as_str()))
                .map(Answer::Text),
            QuestionConfig::Integer {
                prompt,
                min,
                max,
                default,
                retry_on_empty,
                retries_max,
                show_bounds,
                ..
            } => {
                let mut question = IntegerQuestion::new(prompt.as_str())
                    .retry_on_empty(*retry_on_empty)
                    .retries(retries_max.unwrap_or(retries_fallback))
                    .show_bounds(*show_bounds)
                    .show_default(default.is_some());
                if let Some(min) = min {
                    question = question.min(*min);
                }
                if let Some(max) = max {
                    question = question.max(*max);
                }
                if let Some(default) = default {
                    question = question.default_value(*default);
                }
                interviewer.ask_int(&question).map(Answer::Integer)
            }
            QuestionConfig::Choice {
                prompt,
                choices,
                default,
                match_type,
                ignore_case,
                allow_free_text,
                retry_on_empty,
                retries_max,
                show_choices,
                ..
            } => {
                let mut question = ChoiceQuestion::<()>::new(prompt.as_str())
                    .choices(choices.iter().map(|name| Choice::new(name.as_str(), ())))
                    .match_type(*match_type)
                    .ignore_case(*ignore_case)
                    .allow_free_text(*allow_free_text)
                    .retry_on_empty(*retry_on_empty)
                    .retries(retries_max.unwrap_or(retries_fallback))
                    .show_choices(*show_choices)
                    .highlight_default(true);
                if let Some(default) = default {
                    question = question.default_choice(Choice::new(default.as_str(), ()));
                }
                interviewer
                    .ask_choice(&question)
                    .map(|choice| Answer::Choice(choice.name().to_string()))
            }
        }
    }
}

impl Questionnaire {
    /// Load a questionnaire file, applying environment overrides.
    pub fn load(path: &Path) -> Result<Self, Box<figment::Error>> {
        Self::figment()
            .merge(Toml::file(path))
            .merge(Env::prefixed("INTERVIEW_").only(&["retries_max"]))
            .extract()
            .map_err(Box::new)
    }

    /// Parse a questionnaire from TOML text.
    pub fn from_toml_str(toml: &str) -> Result<Self, Box<figment::Error>> {
        Self::figment()
            .merge(Toml::string(toml))
            .extract()
            .map_err(Box::new)
    }

    fn figment() -> Figment {
        Figment::new().merge(Serialized::defaults(Questionnaire::default()))
    }

    /// Ask every question in order.
    ///
    /// Stops at the first question that cannot be answered.
    pub fn run<L: LineSource, P: PromptRenderer>(
        &self,
        interviewer: &mut Interviewer<L, P>,
    ) -> interview::Result<Vec<Response>> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let key = question.key(index + 1);
                tracing::info!(%key, "asking question");
                let answer = question.ask(interviewer, self.retries_max)?;
                Ok(Response { key, answer })
            })
            .collect()
    }
}
