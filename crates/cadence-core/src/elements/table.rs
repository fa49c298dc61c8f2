//! Tabular data, optionally paginated.

use std::collections::BTreeMap;

use crate::error::{CadenceError, Result};
use crate::sink::{ColumnSpec, Renderable, TableBlock, TerminalSink};
use crate::theme::Theme;

/// Rows of string cells under named columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub title: Option<String>,
    /// Fixed widths keyed by column name
    pub column_widths: BTreeMap<String, usize>,
    /// Wrap long cells; when false they are cut with an ellipsis
    pub wrap_text: bool,
    /// `None` defers to `layout.table_expand`
    pub expand: Option<bool>,
    pub width: Option<usize>,
    /// Rows per page; `None` or zero disables pagination
    pub page_size: Option<usize>,
}

impl Table {
    pub fn new<C: ToString>(columns: impl IntoIterator<Item = C>) -> Self {
        Self {
            columns: columns.into_iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
            title: None,
            column_widths: BTreeMap::new(),
            wrap_text: true,
            expand: None,
            width: None,
            page_size: None,
        }
    }

    /// Build a table from records of `(column, value)` pairs.
    ///
    /// Columns come from the first record, in order. Later records are
    /// looked up by column name; missing cells become empty strings and
    /// extra keys are ignored.
    pub fn from_records(records: &[Vec<(String, String)>]) -> Self {
        let columns: Vec<String> = records
            .first()
            .map(|first| first.iter().map(|(key, _)| key.clone()).collect())
            .unwrap_or_default();

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| {
                        record
                            .iter()
                            .find(|(key, _)| key == column)
                            .map(|(_, value)| value.clone())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Self {
            rows,
            ..Self::new(columns)
        }
    }

    pub fn row<C: ToString>(mut self, cells: impl IntoIterator<Item = C>) -> Self {
        self.rows
            .push(cells.into_iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn column_width(mut self, column: &str, width: usize) -> Self {
        self.column_widths.insert(column.to_string(), width);
        self
    }

    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }

    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = Some(expand);
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Page size when the rows do not fit on a single page.
    pub fn pagination(&self) -> Option<usize> {
        self.page_size
            .filter(|&size| size > 0 && self.rows.len() > size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        if self.columns.is_empty() {
            return Err(CadenceError::Validation(
                "table has rows but no columns".to_string(),
            ));
        }
        if let Some((index, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.columns.len())
        {
            return Err(CadenceError::Validation(format!(
                "table row {} has {} cells, expected {}",
                index,
                row.len(),
                self.columns.len()
            )));
        }
        Ok(())
    }

    /// Table body for a slice of this table's rows.
    ///
    /// Paginated and unpaginated rendering both go through here, so a page
    /// holding every row is identical to the unpaginated table.
    pub fn block(&self, theme: &Theme, rows: &[Vec<String>]) -> TableBlock {
        let typography = &theme.typography;
        let layout = &theme.layout;
        TableBlock {
            title: self.title.clone(),
            title_style: typography.header_style.clone(),
            title_align: layout.title_align,
            columns: self
                .columns
                .iter()
                .map(|name| ColumnSpec {
                    header: name.clone(),
                    width: self.column_widths.get(name).copied(),
                    wrap: self.wrap_text,
                    style: Default::default(),
                })
                .collect(),
            rows: rows.to_vec(),
            show_header: true,
            header_style: typography.label_style.clone(),
            box_style: layout.table_box,
            border_style: layout.table_border_style.clone(),
            expand: self.expand.unwrap_or(layout.table_expand),
            width: self.width,
        }
    }

    /// Render every row as one table.
    pub fn render(&self, theme: &Theme, sink: &mut dyn TerminalSink) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        sink.emit(&Renderable::Table(self.block(theme, &self.rows)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;
    use crate::theme::Layout;

    fn users(count: usize) -> Table {
        (0..count).fold(Table::new(["name"]), |table, i| {
            table.row([format!("User{}", i)])
        })
    }

    #[test]
    fn test_table_render() {
        let theme = Theme::default();
        let mut sink = RecordingSink::new();
        Table::new(["name", "age"])
            .row(["Alice", "30"])
            .row(["Bob", "25"])
            .title("Users")
            .render(&theme, &mut sink)
            .unwrap();
        let tables = sink.tables();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].title.as_deref(), Some("Users"));
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(tables[0].columns[1].header, "age");
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let theme = Theme::default();
        let mut sink = RecordingSink::new();
        Table::new(["name"]).title("Empty").render(&theme, &mut sink).unwrap();
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_expand_defaults_to_theme() {
        let expanding = Theme::default().with_layout(Layout {
            table_expand: true,
            ..Layout::default()
        });
        let table = users(1);
        assert!(table.block(&expanding, &table.rows).expand);
        assert!(!table.block(&Theme::default(), &table.rows).expand);
        let explicit = users(1).expand(false);
        assert!(!explicit.block(&expanding, &explicit.rows).expand);
    }

    #[test]
    fn test_column_widths_and_wrap() {
        let table = users(1).column_width("name", 12).wrap_text(false);
        let block = table.block(&Theme::default(), &table.rows);
        assert_eq!(block.columns[0].width, Some(12));
        assert!(!block.columns[0].wrap);
    }

    #[test]
    fn test_pagination_only_when_rows_exceed_page() {
        assert_eq!(users(5).pagination(), None);
        assert_eq!(users(5).page_size(5).pagination(), None);
        assert_eq!(users(5).page_size(0).pagination(), None);
        assert_eq!(users(5).page_size(2).pagination(), Some(2));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let table = Table::new(["a", "b"]).row(["1"]);
        let err = table.validate().unwrap_err();
        assert!(matches!(err, CadenceError::Validation(_)));
        assert!(err.to_string().contains("row 0"));
    }

    #[test]
    fn test_from_records_uses_first_record_columns() {
        let records = vec![
            vec![
                ("name".to_string(), "Alice".to_string()),
                ("age".to_string(), "30".to_string()),
            ],
            vec![("name".to_string(), "Bob".to_string())],
        ];
        let table = Table::from_records(&records);
        assert_eq!(table.columns, vec!["name", "age"]);
        assert_eq!(table.rows[1], vec!["Bob".to_string(), String::new()]);
    }
}
