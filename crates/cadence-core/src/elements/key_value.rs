//! Dashboard-style label/value pairs.

use crate::error::Result;
use crate::sink::{ColumnSpec, Renderable, TableBlock, TerminalSink};
use crate::theme::{BoxStyle, Theme};

/// Aligned `label value` pairs drawn as a borderless, headerless table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyValue {
    pub pairs: Vec<(String, String)>,
    pub title: Option<String>,
}

impl KeyValue {
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: ToString,
        V: ToString,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            title: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn block(&self, theme: &Theme) -> TableBlock {
        let typography = &theme.typography;
        let column = |style| ColumnSpec {
            header: String::new(),
            width: None,
            wrap: true,
            style,
        };
        TableBlock {
            title: self.title.clone(),
            title_style: typography.header_style.clone(),
            title_align: theme.layout.title_align,
            columns: vec![
                column(typography.label_style.clone()),
                column(typography.value_style.clone()),
            ],
            rows: self
                .pairs
                .iter()
                .map(|(key, value)| vec![key.clone(), value.clone()])
                .collect(),
            show_header: false,
            header_style: typography.label_style.clone(),
            box_style: BoxStyle::None,
            border_style: theme.layout.table_border_style.clone(),
            expand: false,
            width: None,
        }
    }

    pub fn render(&self, theme: &Theme, sink: &mut dyn TerminalSink) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        sink.emit(&Renderable::Table(self.block(theme)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    #[test]
    fn test_key_value_block() {
        let theme = Theme::default();
        let kv = KeyValue::new([("Status", "Online"), ("Uptime", "14d 3h")]).title("Server");
        let block = kv.block(&theme);
        assert_eq!(block.rows.len(), 2);
        assert_eq!(block.rows[0], vec!["Status".to_string(), "Online".to_string()]);
        assert!(!block.show_header);
        assert_eq!(block.box_style, BoxStyle::None);
        assert_eq!(block.columns[0].style, theme.typography.label_style);
        assert_eq!(block.columns[1].style, theme.typography.value_style);
    }

    #[test]
    fn test_key_value_stringifies_values() {
        let kv = KeyValue::new([("Count", 3)]);
        assert_eq!(kv.pairs[0].1, "3");
    }

    #[test]
    fn test_empty_key_value_renders_nothing() {
        let theme = Theme::default();
        let mut sink = RecordingSink::new();
        KeyValue::default().render(&theme, &mut sink).unwrap();
        assert!(sink.events.is_empty());
    }
}
