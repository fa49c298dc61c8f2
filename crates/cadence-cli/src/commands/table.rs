use std::io::{IsTerminal, Read};
use std::path::Path;

use serde_json::Value;

use cadence_core::Table;

use crate::app::AppContext;
use crate::cli::TableArgs;

pub fn handle_table(ctx: &AppContext, args: &TableArgs) -> anyhow::Result<()> {
    let input = read_input(args.file.as_deref())?;
    let records = parse_records(&input)?;
    tracing::debug!(records = records.len(), "table input parsed");

    let mut stream = ctx.stream()?;
    if records.is_empty() {
        stream.warning("No records to display")?;
        return Ok(());
    }

    let mut table = Table::from_records(&records).wrap_text(!args.no_wrap);
    if let Some(title) = &args.title {
        table = table.title(title);
    }
    if let Some(size) = args.page_size {
        table = table.page_size(size);
    }
    if let Some(width) = args.width {
        table = table.width(width);
    }
    if args.expand {
        table = table.expand(true);
    }
    for spec in &args.column_widths {
        let (column, width) = parse_column_width(spec)?;
        table = table.column_width(&column, width);
    }

    stream.table(table)?;
    Ok(())
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e));
    }

    if std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "No input provided; pass a FILE or pipe JSON via stdin"
        ));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer)
}

/// Parse a JSON array of objects into `(column, cell)` records, keeping the
/// key order of each object.
fn parse_records(input: &str) -> anyhow::Result<Vec<Vec<(String, String)>>> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| anyhow::anyhow!("Invalid JSON input: {}", e))?;
    let Value::Array(items) = value else {
        return Err(anyhow::anyhow!("Expected a JSON array of objects"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(fields
                .into_iter()
                .map(|(key, value)| (key, cell_text(value)))
                .collect()),
            _ => Err(anyhow::anyhow!("Record {} is not a JSON object", index)),
        })
        .collect()
}

fn cell_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn parse_column_width(spec: &str) -> anyhow::Result<(String, usize)> {
    let (name, width) = spec
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Invalid column width \"{}\"; expected NAME=COLS", spec))?;
    let width = width
        .trim()
        .parse::<usize>()
        .map_err(|_| anyhow::anyhow!("Invalid width in \"{}\"", spec))?;
    if name.trim().is_empty() || width == 0 {
        return Err(anyhow::anyhow!(
            "Invalid column width \"{}\"; expected NAME=COLS",
            spec
        ));
    }
    Ok((name.trim().to_string(), width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records_keeps_key_order() {
        let records = parse_records(r#"[{"name": "Alice", "age": 30, "team": null}]"#).unwrap();
        assert_eq!(
            records[0],
            vec![
                ("name".to_string(), "Alice".to_string()),
                ("age".to_string(), "30".to_string()),
                ("team".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_parse_records_rejects_non_objects() {
        let err = parse_records("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("Record 0"));
        assert!(parse_records(r#"{"a": 1}"#).is_err());
        assert!(parse_records("not json").is_err());
    }

    #[test]
    fn test_parse_records_empty_array() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_column_width() {
        assert_eq!(
            parse_column_width("name=12").unwrap(),
            ("name".to_string(), 12)
        );
        assert!(parse_column_width("name").is_err());
        assert!(parse_column_width("name=wide").is_err());
        assert!(parse_column_width("=4").is_err());
        assert!(parse_column_width("name=0").is_err());
    }
}
