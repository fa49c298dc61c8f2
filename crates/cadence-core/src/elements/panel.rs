//! Bordered content box.

use crate::error::Result;
use crate::sink::{PanelBlock, Renderable, TerminalSink};
use crate::theme::Theme;

/// Content framed by a border, with optional title and subtitle.
///
/// The subtitle always sits on the right of the bottom border (timestamps,
/// counters); the title follows the theme's title alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub content: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// `None` defers to `layout.panel_expand`
    pub expand: Option<bool>,
}

impl Panel {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            title: None,
            subtitle: None,
            expand: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = Some(expand);
        self
    }

    pub fn block(&self, theme: &Theme) -> PanelBlock {
        let layout = &theme.layout;
        PanelBlock {
            content: self.content.clone(),
            title: self.title.clone(),
            title_align: layout.title_align,
            subtitle: self.subtitle.clone(),
            box_style: layout.panel_box,
            border_style: layout.panel_border_style.clone(),
            expand: self.expand.unwrap_or(layout.panel_expand),
        }
    }

    pub fn render(&self, theme: &Theme, sink: &mut dyn TerminalSink) -> Result<()> {
        sink.emit(&Renderable::Panel(self.block(theme)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{BoxStyle, Layout};

    #[test]
    fn test_panel_expand_defaults_to_theme() {
        let theme = Theme::default().with_layout(Layout {
            panel_expand: false,
            ..Layout::default()
        });
        assert!(!Panel::new("x").block(&theme).expand);
        assert!(Panel::new("x").expand(true).block(&theme).expand);
    }

    #[test]
    fn test_panel_block_carries_layout() {
        let theme = Theme::default().with_layout(Layout {
            panel_box: BoxStyle::Double,
            ..Layout::default()
        });
        let block = Panel::new("System operational")
            .title("Status")
            .subtitle("Updated 2m ago")
            .block(&theme);
        assert_eq!(block.box_style, BoxStyle::Double);
        assert_eq!(block.title.as_deref(), Some("Status"));
        assert_eq!(block.subtitle.as_deref(), Some("Updated 2m ago"));
        assert_eq!(block.border_style, theme.layout.panel_border_style);
    }
}
