//! Application context for the Cadence CLI.
//!
//! Combines the global flags with theme resolution and builds the output
//! stream every command renders through.

use std::io::Stdout;

use cadence_core::{Stream, Theme};

use crate::cli::Cli;
use crate::config::{load_theme, ThemeSource};
use crate::ui::{DialoguerChooser, TerminalRenderer, UiContext, UiFlags};

pub type CliStream = Stream<TerminalRenderer<Stdout>>;

pub struct AppContext<'a> {
    cli: &'a Cli,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self { cli }
    }

    /// Resolve the theme, switching to ASCII glyphs under `--ascii`.
    pub fn theme(&self) -> anyhow::Result<(Theme, ThemeSource)> {
        let (theme, source) = load_theme(self.cli.theme.as_deref())?;
        tracing::debug!(source = ?source, "theme resolved");
        let theme = if self.cli.ascii { theme.ascii() } else { theme };
        Ok((theme, source))
    }

    pub fn ui(&self) -> UiContext {
        UiContext::from_env(UiFlags {
            format: self.cli.format,
            no_color: self.cli.no_color,
            ascii: self.cli.ascii,
        })
    }

    /// A stream on stdout with the resolved theme.
    ///
    /// The chooser is attached only when stdin and stdout are terminals, so
    /// paginated tables fail before any output otherwise.
    pub fn stream(&self) -> anyhow::Result<CliStream> {
        let (theme, _) = self.theme()?;
        Ok(self.stream_with(theme))
    }

    pub fn stream_with(&self, theme: Theme) -> CliStream {
        let ui = self.ui();
        let interactive = ui.interactive;
        let stream = Stream::new(theme, TerminalRenderer::new(ui, std::io::stdout()));
        if interactive {
            stream.with_chooser(DialoguerChooser::new())
        } else {
            stream
        }
    }
}
