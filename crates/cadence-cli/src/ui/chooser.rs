//! Interactive selection backed by dialoguer.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Select};

use cadence_core::pagination::{Choice, Chooser};
use cadence_core::{CadenceError, Result};

/// Arrow-key selection list on the controlling terminal.
#[derive(Debug, Default)]
pub struct DialoguerChooser;

impl DialoguerChooser {
    pub fn new() -> Self {
        Self
    }
}

impl Chooser for DialoguerChooser {
    fn choose(&mut self, label: &str, options: &[Choice]) -> Result<String> {
        if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
            return Err(CadenceError::Interactive(
                "paginated output requires an interactive terminal".to_string(),
            ));
        }
        select(label, options)
    }
}

fn select(label: &str, options: &[Choice]) -> Result<String> {
    if options.is_empty() {
        return Err(CadenceError::Interactive("no options to choose from".to_string()));
    }
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| CadenceError::Interactive(e.to_string()))?;

    options
        .get(index)
        .map(|choice| choice.value.clone())
        .ok_or_else(|| CadenceError::Interactive(format!("selection {} out of range", index)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_rejected() {
        let err = select("Navigate", &[]).unwrap_err();
        assert!(matches!(err, CadenceError::Interactive(_)));
    }

    #[test]
    fn test_non_terminal_is_interactive_error() {
        // Test harness stdin is never a terminal under cargo test capture
        if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
            return;
        }
        let options = [Choice::new("Done", "done")];
        let err = DialoguerChooser::new().choose("Navigate", &options).unwrap_err();
        assert!(matches!(err, CadenceError::Interactive(_)));
    }
}
