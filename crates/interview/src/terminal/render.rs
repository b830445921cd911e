//! Prompt rendering.
//!
//! Prompts are printed on the line the answer is typed on, followed by a
//! bracketed hint when the question asks for one:
//!
//! ```text
//! Please tell me your age [min: 21, max: 99] _
//! Please pick a fruit [<apple>, raspberry] _
//! ```

use std::io::{self, Stdout, Write};

/// What a question wants shown next to its prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderContext<'a> {
    /// Free text: the prompt alone.
    Text,
    /// Integer questions: optional bounds and default.
    Integer {
        min: Option<i64>,
        max: Option<i64>,
        default: Option<i64>,
        show_bounds: bool,
        show_default: bool,
    },
    /// Choice questions: the choice names in order.
    Choice {
        names: Vec<&'a str>,
        default: Option<&'a str>,
        highlight_default: bool,
        show_choices: bool,
    },
}

/// Shows a question to the user before each attempt.
pub trait PromptRenderer {
    /// Display `prompt` with the hints described by `context`.
    fn render(&mut self, prompt: &str, context: &RenderContext<'_>) -> io::Result<()>;
}

impl<P: PromptRenderer + ?Sized> PromptRenderer for &mut P {
    fn render(&mut self, prompt: &str, context: &RenderContext<'_>) -> io::Result<()> {
        (**self).render(prompt, context)
    }
}

impl<P: PromptRenderer + ?Sized> PromptRenderer for Box<P> {
    fn render(&mut self, prompt: &str, context: &RenderContext<'_>) -> io::Result<()> {
        (**self).render(prompt, context)
    }
}

/// Format a prompt and its hints as displayed text.
///
/// The result always ends with a space so the answer does not touch it.
///
/// ```
/// use interview::{format_prompt, RenderContext};
///
/// let context = RenderContext::Choice {
///     names: vec!["yes", "no"],
///     default: Some("yes"),
///     highlight_default: true,
///     show_choices: true,
/// };
/// assert_eq!(format_prompt("Continue?", &context), "Continue? [<yes>, no] ");
/// ```
pub fn format_prompt(prompt: &str, context: &RenderContext<'_>) -> String {
    let mut text = format!("{} ", prompt);

    let hints: Vec<String> = match context {
        RenderContext::Text => Vec::new(),
        RenderContext::Integer {
            min,
            max,
            default,
            show_bounds,
            show_default,
        } => {
            let mut hints = Vec::new();
            if *show_bounds {
                hints.extend(min.map(|min| format!("min: {}", min)));
                hints.extend(max.map(|max| format!("max: {}", max)));
            }
            if *show_default {
                hints.extend(default.map(|default| format!("default: {}", default)));
            }
            hints
        }
        RenderContext::Choice {
            names,
            default,
            highlight_default,
            show_choices,
        } => {
            if *show_choices {
                names
                    .iter()
                    .map(|name| match default {
                        Some(default) if *highlight_default && default == name => {
                            format!("<{}>", name)
                        }
                        _ => name.to_string(),
                    })
                    .collect()
            } else {
                Vec::new()
            }
        }
    };

    if !hints.is_empty() {
        text.push_str(&format!("[{}] ", hints.join(", ")));
    }
    text
}

/// Renders prompts to a writer, stdout by default.
#[derive(Debug)]
pub struct WriterRenderer<W: Write = Stdout> {
    writer: W,
}

impl WriterRenderer<Stdout> {
    /// Create a renderer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterRenderer<W> {
    /// Create a renderer writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get the underlying writer back.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PromptRenderer for WriterRenderer<W> {
    fn render(&mut self, prompt: &str, context: &RenderContext<'_>) -> io::Result<()> {
        self.writer
            .write_all(format_prompt(prompt, context).as_bytes())?;
        self.writer.flush()
    }
}

/// Renderer that keeps every formatted prompt instead of printing it.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    rendered: Vec<String>,
}

impl RecordingRenderer {
    /// Create a renderer with nothing recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompts rendered so far, formatted as by [`format_prompt`].
    pub fn rendered(&self) -> &[String] {
        &self.rendered
    }
}

impl PromptRenderer for RecordingRenderer {
    fn render(&mut self, prompt: &str, context: &RenderContext<'_>) -> io::Result<()> {
        self.rendered.push(format_prompt(prompt, context));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integer(min: Option<i64>, max: Option<i64>, show_bounds: bool) -> RenderContext<'static> {
        RenderContext::Integer {
            min,
            max,
            default: None,
            show_bounds,
            show_default: false,
        }
    }

    fn choice<'a>(
        names: Vec<&'a str>,
        default: Option<&'a str>,
        highlight_default: bool,
    ) -> RenderContext<'a> {
        RenderContext::Choice {
            names,
            default,
            highlight_default,
            show_choices: true,
        }
    }

    #[test]
    fn text_prompt_gets_trailing_space() {
        assert_eq!(
            format_prompt("Please tell me your name:", &RenderContext::Text),
            "Please tell me your name: "
        );
    }

    #[test]
    fn integer_bounds_shown() {
        let context = integer(Some(21), Some(99), true);
        assert_eq!(
            format_prompt("Please tell me your age", &context),
            "Please tell me your age [min: 21, max: 99] "
        );
    }

    #[test]
    fn integer_single_bound() {
        assert_eq!(format_prompt("n", &integer(None, Some(5), true)), "n [max: 5] ");
        assert_eq!(format_prompt("n", &integer(Some(-3), None, true)), "n [min: -3] ");
    }

    #[test]
    fn integer_bounds_hidden() {
        assert_eq!(format_prompt("n", &integer(Some(1), Some(5), false)), "n ");
    }

    #[test]
    fn integer_unbounded_shows_no_brackets() {
        assert_eq!(format_prompt("n", &integer(None, None, true)), "n ");
    }

    #[test]
    fn integer_default_shown() {
        let context = RenderContext::Integer {
            min: Some(1),
            max: None,
            default: Some(3),
            show_bounds: true,
            show_default: true,
        };
        assert_eq!(format_prompt("n", &context), "n [min: 1, default: 3] ");
    }

    #[test]
    fn choices_listed_in_order() {
        let context = choice(vec!["apple", "raspberry"], None, true);
        assert_eq!(
            format_prompt("Please pick a fruit", &context),
            "Please pick a fruit [apple, raspberry] "
        );
    }

    #[test]
    fn default_choice_highlighted() {
        let context = choice(vec!["apple", "raspberry"], Some("raspberry"), true);
        assert_eq!(format_prompt("Pick", &context), "Pick [apple, <raspberry>] ");
    }

    #[test]
    fn default_choice_not_highlighted_when_disabled() {
        let context = choice(vec!["apple", "raspberry"], Some("apple"), false);
        assert_eq!(format_prompt("Pick", &context), "Pick [apple, raspberry] ");
    }

    #[test]
    fn duplicate_default_names_all_highlighted() {
        let context = choice(vec!["yes", "yes"], Some("yes"), true);
        assert_eq!(format_prompt("?", &context), "? [<yes>, <yes>] ");
    }

    #[test]
    fn choices_hidden() {
        let context = RenderContext::Choice {
            names: vec!["a", "b"],
            default: Some("a"),
            highlight_default: true,
            show_choices: false,
        };
        assert_eq!(format_prompt("Pick", &context), "Pick ");
    }

    #[test]
    fn writer_renderer_writes_formatted_prompt() {
        let mut renderer = WriterRenderer::new(Vec::new());
        renderer
            .render("Age", &integer(Some(1), None, true))
            .unwrap();
        assert_eq!(renderer.into_inner(), b"Age [min: 1] ".to_vec());
    }

    #[test]
    fn recording_renderer_keeps_history() {
        let mut renderer = RecordingRenderer::new();
        renderer.render("one", &RenderContext::Text).unwrap();
        renderer.render("two", &RenderContext::Text).unwrap();
        assert_eq!(renderer.rendered(), ["one ", "two "]);
    }
}
