//! Terminal I/O seams.
//!
//! The answer loop never touches stdin or stdout directly. It reads through
//! a [`LineSource`] and displays prompts through a [`PromptRenderer`], so
//! both can be swapped for scripted versions in tests:
//!
//! - [`ReaderLines`] - lines from any `BufRead`, stdin by default
//! - [`ScriptedLines`] - a fixed list of answers
//! - [`WriterRenderer`] - prompts written to any `Write`, stdout by default
//! - [`RecordingRenderer`] - prompts kept in memory

mod lines;
mod render;

pub use lines::{LineSource, ReaderLines, ScriptedLines};
pub use render::{format_prompt, PromptRenderer, RecordingRenderer, RenderContext, WriterRenderer};
