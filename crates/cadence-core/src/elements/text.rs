//! Status messages and plain text lines.

use crate::error::{CadenceError, Result};
use crate::kind::ElementKind;
use crate::sink::{Renderable, Span, StyledLine, TerminalSink};
use crate::theme::Theme;

/// Semantic tone of a message; picks icon, style and indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
    Warning,
    ListItem,
}

impl Tone {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Info => ElementKind::Info,
            Self::Success => ElementKind::Success,
            Self::Error => ElementKind::Error,
            Self::Warning => ElementKind::Warning,
            Self::ListItem => ElementKind::ListItem,
        }
    }
}

/// A line prefixed with the tone's icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub tone: Tone,
    pub text: String,
}

impl Message {
    pub fn new(tone: Tone, text: &str) -> Self {
        Self {
            tone,
            text: text.to_string(),
        }
    }

    pub fn info(text: &str) -> Self {
        Self::new(Tone::Info, text)
    }

    pub fn success(text: &str) -> Self {
        Self::new(Tone::Success, text)
    }

    pub fn error(text: &str) -> Self {
        Self::new(Tone::Error, text)
    }

    pub fn warning(text: &str) -> Self {
        Self::new(Tone::Warning, text)
    }

    pub fn list_item(text: &str) -> Self {
        Self::new(Tone::ListItem, text)
    }

    pub fn validate(&self) -> Result<()> {
        require_text(&self.text, self.tone.kind())
    }

    pub(crate) fn line(&self, theme: &Theme) -> StyledLine {
        let kind = self.tone.kind();
        let style = theme.typography.for_kind(kind);
        let icon = theme.icons.for_kind(kind);
        StyledLine::new(
            theme.indentation.get(kind),
            vec![Span::styled(&format!("{} {}", icon, self.text), style)],
        )
    }

    pub fn render(&self, theme: &Theme, sink: &mut dyn TerminalSink) -> Result<()> {
        sink.emit(&Renderable::Line(self.line(theme)))
    }
}

/// Plain text without an icon. Uses the info indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_text(&self.text, ElementKind::Text)
    }

    pub fn render(&self, theme: &Theme, sink: &mut dyn TerminalSink) -> Result<()> {
        let line = StyledLine::new(
            theme.indentation.get(ElementKind::Info),
            vec![Span::plain(&self.text)],
        );
        sink.emit(&Renderable::Line(line))
    }
}

pub(crate) fn require_text(text: &str, kind: ElementKind) -> Result<()> {
    if text.is_empty() {
        return Err(CadenceError::Validation(format!(
            "{} requires non-empty text",
            kind
        )));
    }
    Ok(())
}
