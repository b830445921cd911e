//! The answer loop.
//!
//! An [`Interviewer`] pairs a [`LineSource`] with a [`PromptRenderer`] and
//! asks questions through them. Each ask cycle renders the prompt, reads a
//! line and judges it, repeating until an answer is accepted or the
//! question's retry budget (`retries_max + 1` attempts) is spent.
//!
//! Only two things end an ask cycle early: the line source failing, which
//! is returned at once and never retried, and budget exhaustion, reported as
//! [`InterviewError::MaxRetriesExceeded`].

use std::io::{StdinLock, Stdout};

use crate::error::{InterviewError, Result};
use crate::matching::find_match;
use crate::question::{Choice, ChoiceQuestion, IntegerQuestion, Question, TextQuestion};
use crate::retry::{self, Attempt, Outcome};
use crate::terminal::{LineSource, PromptRenderer, ReaderLines, RenderContext, WriterRenderer};

/// An interviewer reading stdin and writing prompts to stdout.
pub type StdioInterviewer = Interviewer<ReaderLines<StdinLock<'static>>, WriterRenderer<Stdout>>;

/// Asks questions over a line source and a prompt renderer.
///
/// # Example
///
/// ```
/// use interview::{
///     Choice, ChoiceQuestion, Interviewer, MatchType, RecordingRenderer, ScriptedLines,
/// };
///
/// let mut interviewer = Interviewer::new(ScriptedLines::new(["YES"]), RecordingRenderer::new());
///
/// let question = ChoiceQuestion::new("Should we continue?")
///     .choices([Choice::new("yes", true), Choice::new("no", false)])
///     .default_choice(Choice::new("yes", true))
///     .match_type(MatchType::Exact)
///     .ignore_case(true);
///
/// let answer = interviewer.ask_choice(&question).unwrap();
/// assert_eq!(answer.name(), "yes");
/// assert_eq!(answer.value(), Some(&true));
/// ```
#[derive(Debug)]
pub struct Interviewer<L, P> {
    lines: L,
    renderer: P,
}

impl StdioInterviewer {
    /// Create an interviewer on the process's terminal.
    pub fn stdio() -> Self {
        Self::new(ReaderLines::stdin(), WriterRenderer::stdout())
    }
}

impl<L: LineSource, P: PromptRenderer> Interviewer<L, P> {
    /// Create an interviewer reading from `lines` and prompting through `renderer`.
    pub fn new(lines: L, renderer: P) -> Self {
        Self { lines, renderer }
    }

    /// The line source.
    pub fn lines(&self) -> &L {
        &self.lines
    }

    /// The prompt renderer.
    pub fn renderer(&self) -> &P {
        &self.renderer
    }

    /// Take the interviewer apart.
    pub fn into_parts(self) -> (L, P) {
        (self.lines, self.renderer)
    }

    /// Ask for a line of free text.
    ///
    /// There is exactly one attempt and every line is accepted, the empty
    /// line included.
    pub fn ask_string(&mut self, question: &TextQuestion) -> Result<String> {
        self.render(question.prompt(), &RenderContext::Text);
        self.next_line()
    }

    /// Ask for an integer within the question's bounds.
    ///
    /// Lines that do not parse as a base-10 `i64`, or parse to a value
    /// outside an enabled bound, use up an attempt. An empty line answers
    /// with the question's default, if it has one and does not retry on
    /// empty input.
    pub fn ask_int(&mut self, question: &IntegerQuestion) -> Result<i64> {
        let context = RenderContext::Integer {
            min: question.min_value(),
            max: question.max_value(),
            default: question.default_answer(),
            show_bounds: question.shows_bounds(),
            show_default: question.shows_default(),
        };

        let mut last_input = String::new();
        let mut last_parsed = None;

        let outcome = retry::run(question.retries_max(), |_| {
            self.render(question.prompt(), &context);
            let line = self.next_line()?;

            if line.is_empty() && !question.retries_on_empty() {
                if let Some(default) = question.default_answer() {
                    return Ok(Attempt::Answered(default));
                }
            }

            last_parsed = line.parse::<i64>().ok();
            last_input = line;

            Ok(match last_parsed {
                Some(value) if question.accepts(value) => Attempt::Answered(value),
                Some(_) => Attempt::Rejected("out of bounds"),
                None => Attempt::Rejected("not an integer"),
            })
        })?;

        match outcome {
            Outcome::Answered(value) => Ok(value),
            Outcome::Exhausted { attempts } => Err(InterviewError::MaxRetriesExceeded {
                attempts,
                last_input,
                last_parsed,
            }),
        }
    }

    /// Ask for one of the question's choices.
    ///
    /// Per attempt: an empty line picks the default choice unless the
    /// question retries on empty input; anything else goes through
    /// [`find_match`]. Unmatched input becomes a value-less choice when free
    /// text is allowed and uses up the attempt otherwise.
    pub fn ask_choice<V: Clone>(&mut self, question: &ChoiceQuestion<V>) -> Result<Choice<V>> {
        let context = RenderContext::Choice {
            names: question.choice_names(),
            default: question.default_answer().map(Choice::name),
            highlight_default: question.highlights_default(),
            show_choices: question.shows_choices(),
        };

        let mut last_input = String::new();

        let outcome = retry::run(question.retries_max(), |_| {
            self.render(question.prompt(), &context);
            let line = self.next_line()?;

            let attempt = if line.is_empty() {
                match question.default_answer() {
                    _ if question.retries_on_empty() => Attempt::Rejected("empty answer"),
                    Some(default) => Attempt::Answered(default.clone()),
                    None => Attempt::Rejected("empty answer and no default"),
                }
            } else if let Some(choice) = find_match(
                &line,
                question.choice_list(),
                question.matching(),
                question.ignores_case(),
            ) {
                Attempt::Answered(choice.clone())
            } else if question.allows_free_text() {
                Attempt::Answered(Choice::named(line.as_str()))
            } else {
                Attempt::Rejected("no matching choice")
            };

            last_input = line;
            Ok(attempt)
        })?;

        match outcome {
            Outcome::Answered(choice) => Ok(choice),
            Outcome::Exhausted { attempts } => {
                Err(InterviewError::max_retries(attempts, last_input))
            }
        }
    }

    fn render(&mut self, prompt: &str, context: &RenderContext<'_>) {
        if let Err(e) = self.renderer.render(prompt, context) {
            tracing::warn!(error = %e, "failed to render prompt");
        }
    }

    fn next_line(&mut self) -> Result<String> {
        match self.lines.read_line() {
            Ok(Some(line)) => {
                tracing::trace!(len = line.len(), "read answer line");
                Ok(line)
            }
            Ok(None) => Err(InterviewError::EndOfInput),
            Err(e) => Err(InterviewError::Input(e)),
        }
    }
}
