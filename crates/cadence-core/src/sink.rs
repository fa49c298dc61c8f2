//! The terminal output capability and the renderables it accepts.
//!
//! Elements never write escape sequences. They build [`Renderable`] values
//! carrying opaque [`Style`] annotations and hand them to a [`TerminalSink`],
//! which owns measurement, wrapping and color.

use crate::error::Result;
use crate::theme::{Align, BoxStyle, Style};

/// A run of text with an optional style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            style: Style::plain(),
        }
    }

    pub fn styled(text: &str, style: &Style) -> Self {
        Self {
            text: text.to_string(),
            style: style.clone(),
        }
    }
}

/// One output line: leading spaces followed by spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub indent: usize,
    pub spans: Vec<Span>,
}

impl StyledLine {
    pub fn new(indent: usize, spans: Vec<Span>) -> Self {
        Self { indent, spans }
    }

    /// The unstyled text of the line, including indentation.
    pub fn plain_text(&self) -> String {
        let mut out = " ".repeat(self.indent);
        for span in &self.spans {
            out.push_str(&span.text);
        }
        out
    }
}

/// Column definition for table blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub header: String,
    /// Fixed width in columns, if any
    pub width: Option<usize>,
    /// Wrap long cells (true) or truncate them with an ellipsis (false)
    pub wrap: bool,
    pub style: Style,
}

/// A tabular structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub title: Option<String>,
    pub title_style: Style,
    pub title_align: Align,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<Vec<String>>,
    pub show_header: bool,
    pub header_style: Style,
    pub box_style: BoxStyle,
    pub border_style: Style,
    pub expand: bool,
    pub width: Option<usize>,
}

/// A bordered box around text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelBlock {
    pub content: String,
    pub title: Option<String>,
    pub title_align: Align,
    pub subtitle: Option<String>,
    pub box_style: BoxStyle,
    pub border_style: Style,
    pub expand: bool,
}

/// A horizontal rule, optionally carrying a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    pub title: Option<Span>,
    pub align: Align,
    pub style: Style,
}

/// A block of source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub code: String,
    pub language: Option<String>,
    pub title: Option<String>,
    pub title_style: Style,
    pub line_numbers: bool,
    pub style: Style,
    pub gutter_style: Style,
}

/// Everything a sink knows how to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderable {
    Line(StyledLine),
    Rule(RuleBlock),
    Table(TableBlock),
    Panel(PanelBlock),
    Code(CodeBlock),
}

/// Parameters for an animated spinner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerBlock {
    pub message: String,
    pub frames: Vec<String>,
    pub interval_ms: u64,
    pub style: Style,
    /// Whether the spinner line is removed when it stops
    pub transient: bool,
}

/// Terminal output capability.
pub trait TerminalSink {
    /// Draw one renderable.
    fn emit(&mut self, renderable: &Renderable) -> Result<()>;

    /// Emit `count` blank lines.
    fn blank_lines(&mut self, count: usize) -> Result<()>;

    /// Begin animating a spinner. At most one spinner runs at a time.
    fn start_spinner(&mut self, spinner: &SpinnerBlock) -> Result<()>;

    /// Replace the running spinner's message.
    fn update_spinner(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }

    /// Stop the running spinner.
    fn stop_spinner(&mut self) -> Result<()>;
}

impl<T: TerminalSink + ?Sized> TerminalSink for &mut T {
    fn emit(&mut self, renderable: &Renderable) -> Result<()> {
        (**self).emit(renderable)
    }

    fn blank_lines(&mut self, count: usize) -> Result<()> {
        (**self).blank_lines(count)
    }

    fn start_spinner(&mut self, spinner: &SpinnerBlock) -> Result<()> {
        (**self).start_spinner(spinner)
    }

    fn update_spinner(&mut self, message: &str) -> Result<()> {
        (**self).update_spinner(message)
    }

    fn stop_spinner(&mut self) -> Result<()> {
        (**self).stop_spinner()
    }
}

/// One call received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Blank(usize),
    Emit(Renderable),
    SpinnerStarted(SpinnerBlock),
    SpinnerUpdated(String),
    SpinnerStopped,
}

/// A sink that records calls instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total blank lines emitted so far.
    pub fn blank_count(&self) -> usize {
        self.events
            .iter()
            .map(|event| match event {
                SinkEvent::Blank(count) => *count,
                _ => 0,
            })
            .sum()
    }

    /// Emitted renderables, in order.
    pub fn renderables(&self) -> impl Iterator<Item = &Renderable> {
        self.events.iter().filter_map(|event| match event {
            SinkEvent::Emit(renderable) => Some(renderable),
            _ => None,
        })
    }

    /// Emitted table blocks, in order.
    pub fn tables(&self) -> Vec<&TableBlock> {
        self.renderables()
            .filter_map(|renderable| match renderable {
                Renderable::Table(table) => Some(table),
                _ => None,
            })
            .collect()
    }

    /// Plain text of emitted lines, in order.
    pub fn lines(&self) -> Vec<String> {
        self.renderables()
            .filter_map(|renderable| match renderable {
                Renderable::Line(line) => Some(line.plain_text()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TerminalSink for RecordingSink {
    fn emit(&mut self, renderable: &Renderable) -> Result<()> {
        self.events.push(SinkEvent::Emit(renderable.clone()));
        Ok(())
    }

    fn blank_lines(&mut self, count: usize) -> Result<()> {
        self.events.push(SinkEvent::Blank(count));
        Ok(())
    }

    fn start_spinner(&mut self, spinner: &SpinnerBlock) -> Result<()> {
        self.events.push(SinkEvent::SpinnerStarted(spinner.clone()));
        Ok(())
    }

    fn update_spinner(&mut self, message: &str) -> Result<()> {
        self.events.push(SinkEvent::SpinnerUpdated(message.to_string()));
        Ok(())
    }

    fn stop_spinner(&mut self) -> Result<()> {
        self.events.push(SinkEvent::SpinnerStopped);
        Ok(())
    }
}
