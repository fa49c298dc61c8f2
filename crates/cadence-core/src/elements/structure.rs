//! Structural elements: header, section, divider, spacer.

use super::text::require_text;
use crate::error::Result;
use crate::kind::ElementKind;
use crate::sink::{Renderable, RuleBlock, Span, StyledLine, TerminalSink};
use crate::theme::Theme;

/// Page-level title with optional subtitle and application name.
///
/// Rendered as `AppName · TITLE` followed by the subtitle line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub subtitle: Option<String>,
    pub app_name: Option<String>,
}

impl Header {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
            app_name: None,
        }
    }

    pub fn subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn app_name(mut self, app_name: &str) -> Self {
        self.app_name = Some(app_name.to_string());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_text(&self.title, ElementKind::Header)
    }

    pub fn render(&self, theme: &Theme, sink: &mut dyn TerminalSink) -> Result<()> {
        let typography = &theme.typography;
        let indent = theme.indentation.get(ElementKind::Header);

        let mut spans = Vec::new();
        if let Some(app) = &self.app_name {
            spans.push(Span::styled(app, &typography.muted_style));
            spans.push(Span::plain(" \u{00B7} "));
        }
        spans.push(Span::styled(
            &self.title.to_uppercase(),
            &typography.header_style,
        ));
        sink.emit(&Renderable::Line(StyledLine::new(indent, spans)))?;

        if let Some(subtitle) = &self.subtitle {
            let line = StyledLine::new(
                indent,
                vec![Span::styled(subtitle, &typography.subheader_style)],
            );
            sink.emit(&Renderable::Line(line))?;
        }
        Ok(())
    }
}

/// A titled rule marking the start of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
}

impl Section {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_text(&self.title, ElementKind::Section)
    }

    pub fn render(&self, theme: &Theme, sink: &mut dyn TerminalSink) -> Result<()> {
        sink.emit(&Renderable::Rule(RuleBlock {
            title: Some(Span::styled(
                &self.title.to_uppercase(),
                &theme.typography.section_style,
            )),
            align: theme.layout.title_align,
            style: theme.layout.divider_style.clone(),
        }))
    }
}

/// A subtle untitled rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Divider;

impl Divider {
    pub fn render(&self, theme: &Theme, sink: &mut dyn TerminalSink) -> Result<()> {
        sink.emit(&Renderable::Rule(RuleBlock {
            title: None,
            align: theme.layout.title_align,
            style: theme.layout.divider_style.clone(),
        }))
    }
}

/// Explicit blank lines. Bypasses automatic spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacer {
    pub lines: usize,
}

impl Spacer {
    pub fn new(lines: usize) -> Self {
        Self { lines }
    }

    pub fn render(&self, sink: &mut dyn TerminalSink) -> Result<()> {
        if self.lines == 0 {
            return Ok(());
        }
        sink.blank_lines(self.lines)
    }
}

impl Default for Spacer {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{RecordingSink, SinkEvent};
    use crate::theme::{Layout, Style, Typography};

    #[test]
    fn test_header_uppercases_title() {
        let theme = Theme::default();
        let mut sink = RecordingSink::new();
        Header::new("Title")
            .subtitle("Subtitle")
            .app_name("AppName")
            .render(&theme, &mut sink)
            .unwrap();
        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "AppName \u{00B7} TITLE");
        assert_eq!(lines[1], "Subtitle");
    }

    #[test]
    fn test_header_requires_title() {
        assert!(Header::new("").validate().is_err());
    }

    #[test]
    fn test_section_uses_theme_styles() {
        let theme = Theme::default()
            .with_typography(Typography {
                section_style: Style::new("bold magenta"),
                ..Typography::default()
            })
            .with_layout(Layout {
                divider_style: Style::new("dim cyan"),
                ..Layout::default()
            });
        let mut sink = RecordingSink::new();
        Section::new("Test").render(&theme, &mut sink).unwrap();

        match &sink.events[0] {
            SinkEvent::Emit(Renderable::Rule(rule)) => {
                let title = rule.title.as_ref().unwrap();
                assert_eq!(title.text, "TEST");
                assert_eq!(title.style.as_str(), "bold magenta");
                assert_eq!(rule.style.as_str(), "dim cyan");
            }
            other => panic!("expected rule, got {:?}", other),
        }
    }

    #[test]
    fn test_divider_has_no_title() {
        let theme = Theme::default();
        let mut sink = RecordingSink::new();
        Divider.render(&theme, &mut sink).unwrap();
        assert!(matches!(
            &sink.events[0],
            SinkEvent::Emit(Renderable::Rule(RuleBlock { title: None, .. }))
        ));
    }

    #[test]
    fn test_spacer_lines() {
        let mut sink = RecordingSink::new();
        Spacer::default().render(&mut sink).unwrap();
        Spacer::new(3).render(&mut sink).unwrap();
        Spacer::new(0).render(&mut sink).unwrap();
        assert_eq!(sink.events, vec![SinkEvent::Blank(1), SinkEvent::Blank(3)]);
    }
}
