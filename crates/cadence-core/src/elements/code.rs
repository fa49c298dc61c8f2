//! Source code blocks.

use crate::error::Result;
use crate::sink::{CodeBlock, Renderable, TerminalSink};
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    pub code: String,
    pub language: Option<String>,
    pub title: Option<String>,
    pub line_numbers: bool,
}

impl Code {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            language: None,
            title: None,
            line_numbers: false,
        }
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    pub fn block(&self, theme: &Theme) -> CodeBlock {
        let typography = &theme.typography;
        CodeBlock {
            code: self.code.clone(),
            language: self.language.clone(),
            title: self.title.clone(),
            title_style: typography.label_style.clone(),
            line_numbers: self.line_numbers,
            style: typography.code_style.clone(),
            gutter_style: typography.muted_style.clone(),
        }
    }

    pub fn render(&self, theme: &Theme, sink: &mut dyn TerminalSink) -> Result<()> {
        sink.emit(&Renderable::Code(self.block(theme)))
    }
}
