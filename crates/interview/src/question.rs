//! Question definitions.
//!
//! Three kinds of question share a prompt through the [`Question`] trait:
//!
//! - [`TextQuestion`] - free text, accepted as typed
//! - [`IntegerQuestion`] - a signed integer, optionally bounded
//! - [`ChoiceQuestion`] - one entry from a list of [`Choice`]s
//!
//! Questions are plain configuration. Nothing is validated when they are
//! built; a question whose minimum exceeds its maximum simply never accepts
//! an answer.

use std::fmt;

use crate::matching::MatchType;

/// Anything that carries a prompt.
pub trait Question {
    /// The prompt text shown to the user.
    fn prompt(&self) -> &str;

    /// Replace the prompt text.
    fn set_prompt(&mut self, prompt: String);
}

/// A free text question.
///
/// Also serves as the prompt holder embedded in the other question kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuestion {
    prompt: String,
}

impl TextQuestion {
    /// Create a text question with the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl Question for TextQuestion {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }
}

/// A question answered by a base-10 signed integer.
///
/// # Example
///
/// ```
/// use interview::IntegerQuestion;
///
/// let question = IntegerQuestion::new("Please tell me your age")
///     .min(21)
///     .max(99)
///     .show_bounds(true)
///     .retries(5);
///
/// assert!(question.accepts(42));
/// assert!(!question.accepts(12));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerQuestion {
    base: TextQuestion,
    min: Option<i64>,
    max: Option<i64>,
    default: Option<i64>,
    retry_on_empty: bool,
    retries_max: u32,
    show_bounds: bool,
    show_default: bool,
}

impl IntegerQuestion {
    /// Create an unbounded integer question with a single attempt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            base: TextQuestion::new(prompt),
            ..Self::default()
        }
    }

    /// Require answers to be at least `min` (inclusive).
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Require answers to be at most `max` (inclusive).
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Answer with `value` when the user enters an empty line.
    ///
    /// The default is returned as-is, without a bounds check.
    pub fn default_value(mut self, value: i64) -> Self {
        self.default = Some(value);
        self
    }

    /// Treat an empty line as a failed attempt even when a default is set.
    pub fn retry_on_empty(mut self, retry: bool) -> Self {
        self.retry_on_empty = retry;
        self
    }

    /// Allow `retries` extra attempts after the first one.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries_max = retries;
        self
    }

    /// Show the enabled bounds next to the prompt.
    pub fn show_bounds(mut self, show: bool) -> Self {
        self.show_bounds = show;
        self
    }

    /// Show the default value next to the prompt.
    pub fn show_default(mut self, show: bool) -> Self {
        self.show_default = show;
        self
    }

    /// The lower bound, if enabled.
    pub fn min_value(&self) -> Option<i64> {
        self.min
    }

    /// The upper bound, if enabled.
    pub fn max_value(&self) -> Option<i64> {
        self.max
    }

    /// The answer given for an empty line, if any.
    pub fn default_answer(&self) -> Option<i64> {
        self.default
    }

    /// Whether an empty line uses up an attempt instead of taking the default.
    pub fn retries_on_empty(&self) -> bool {
        self.retry_on_empty
    }

    /// Attempts allowed after the first.
    pub fn retries_max(&self) -> u32 {
        self.retries_max
    }

    /// Whether the prompt lists the enabled bounds.
    pub fn shows_bounds(&self) -> bool {
        self.show_bounds
    }

    /// Whether the prompt shows the default value.
    pub fn shows_default(&self) -> bool {
        self.show_default
    }

    /// Check `value` against the enabled bounds.
    pub fn accepts(&self, value: i64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

impl Question for IntegerQuestion {
    fn prompt(&self) -> &str {
        self.base.prompt()
    }

    fn set_prompt(&mut self, prompt: String) {
        self.base.set_prompt(prompt);
    }
}

/// One selectable entry of a [`ChoiceQuestion`].
///
/// Only the name takes part in matching and equality. The value is an
/// arbitrary payload handed back with the answer; it is `None` for answers
/// produced by the free text fallback.
#[derive(Debug, Clone)]
pub struct Choice<V = ()> {
    name: String,
    value: Option<V>,
}

impl<V> Choice<V> {
    /// Create a choice carrying `value`.
    pub fn new(name: impl Into<String>, value: V) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }

    /// Create a choice without a value.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Consume the choice and return its value.
    pub fn into_value(self) -> Option<V> {
        self.value
    }
}

impl<V> PartialEq for Choice<V> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<V> Eq for Choice<V> {}

impl<V> fmt::Display for Choice<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<V> From<&str> for Choice<V> {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

/// A question answered by picking one of several [`Choice`]s.
///
/// # Example
///
/// ```
/// use interview::{Choice, ChoiceQuestion, MatchType};
///
/// let question = ChoiceQuestion::new("Should we continue?")
///     .choice(Choice::new("yes", true))
///     .choice(Choice::new("no", false))
///     .default_choice(Choice::new("yes", true))
///     .match_type(MatchType::Exact)
///     .ignore_case(true)
///     .show_choices(true)
///     .highlight_default(true);
///
/// assert_eq!(question.choice_names(), vec!["yes", "no"]);
/// ```
#[derive(Debug, Clone)]
pub struct ChoiceQuestion<V = ()> {
    base: TextQuestion,
    choices: Vec<Choice<V>>,
    default: Option<Choice<V>>,
    match_type: MatchType,
    ignore_case: bool,
    allow_free_text: bool,
    retry_on_empty: bool,
    retries_max: u32,
    show_choices: bool,
    highlight_default: bool,
}

impl<V> Default for ChoiceQuestion<V> {
    fn default() -> Self {
        Self {
            base: TextQuestion::default(),
            choices: Vec::new(),
            default: None,
            match_type: MatchType::default(),
            ignore_case: false,
            allow_free_text: false,
            retry_on_empty: false,
            retries_max: 0,
            show_choices: false,
            highlight_default: false,
        }
    }
}

impl<V> ChoiceQuestion<V> {
    /// Create a choice question with no choices and exact matching.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            base: TextQuestion::new(prompt),
            ..Self::default()
        }
    }

    /// Append a choice. Order matters: the first matching choice wins.
    pub fn choice(mut self, choice: Choice<V>) -> Self {
        self.choices.push(choice);
        self
    }

    /// Append several choices.
    pub fn choices(mut self, choices: impl IntoIterator<Item = Choice<V>>) -> Self {
        self.choices.extend(choices);
        self
    }

    /// Answer with `choice` when the user enters an empty line.
    ///
    /// A choice with an empty name is treated as no default.
    pub fn default_choice(mut self, choice: Choice<V>) -> Self {
        self.default = Some(choice);
        self
    }

    /// How typed input is compared with choice names.
    pub fn match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }

    /// Compare names without regard to case.
    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    /// Accept unmatched input as a value-less choice named after the input.
    pub fn allow_free_text(mut self, allow: bool) -> Self {
        self.allow_free_text = allow;
        self
    }

    /// Treat an empty line as a failed attempt, ignoring the default.
    pub fn retry_on_empty(mut self, retry: bool) -> Self {
        self.retry_on_empty = retry;
        self
    }

    /// Allow `retries` extra attempts after the first one.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries_max = retries;
        self
    }

    /// List the choice names next to the prompt.
    pub fn show_choices(mut self, show: bool) -> Self {
        self.show_choices = show;
        self
    }

    /// Mark the default choice in the listed names.
    pub fn highlight_default(mut self, highlight: bool) -> Self {
        self.highlight_default = highlight;
        self
    }

    /// The choices in declaration order.
    pub fn choice_list(&self) -> &[Choice<V>] {
        &self.choices
    }

    /// The names of all choices, in declaration order.
    pub fn choice_names(&self) -> Vec<&str> {
        self.choices.iter().map(Choice::name).collect()
    }

    /// The configured default, unless it is missing or has an empty name.
    pub fn default_answer(&self) -> Option<&Choice<V>> {
        self.default.as_ref().filter(|choice| !choice.name.is_empty())
    }

    /// The configured match strategy.
    pub fn matching(&self) -> MatchType {
        self.match_type
    }

    pub fn ignores_case(&self) -> bool {
        self.ignore_case
    }

    pub fn allows_free_text(&self) -> bool {
        self.allow_free_text
    }

    pub fn retries_on_empty(&self) -> bool {
        self.retry_on_empty
    }

    /// Attempts allowed after the first.
    pub fn retries_max(&self) -> u32 {
        self.retries_max
    }

    pub fn shows_choices(&self) -> bool {
        self.show_choices
    }

    pub fn highlights_default(&self) -> bool {
        self.highlight_default
    }
}

impl<V> Question for ChoiceQuestion<V> {
    fn prompt(&self) -> &str {
        self.base.prompt()
    }

    fn set_prompt(&mut self, prompt: String) {
        self.base.set_prompt(prompt);
    }
}
