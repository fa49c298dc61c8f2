//! Terminal capabilities that drive rendering and interaction.

use std::io::IsTerminal;

use crate::cli::OutputFormat;

/// What the process can see of its terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalProbe {
    pub stdout_tty: bool,
    pub stdin_tty: bool,
    pub term_is_dumb: bool,
    pub no_color_env: bool,
    pub columns: Option<usize>,
}

impl TerminalProbe {
    pub fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stdin_tty: std::io::stdin().is_terminal(),
            term_is_dumb: std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
            columns: terminal_width(),
        }
    }
}

/// Presentation flags from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiFlags {
    pub format: Option<OutputFormat>,
    pub no_color: bool,
    pub ascii: bool,
}

/// Resolved rendering decisions for one stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiContext {
    /// Paint styles with ANSI escapes
    pub color: bool,
    /// Use unicode glyphs for rules, boxes and ellipses
    pub unicode: bool,
    /// Animate spinners in place
    pub animate: bool,
    /// A chooser can prompt on this terminal
    pub interactive: bool,
    /// Terminal width (columns)
    pub width: usize,
}

impl UiContext {
    pub fn from_env(flags: UiFlags) -> Self {
        Self::resolve(&TerminalProbe::detect(), flags)
    }

    /// Combine what the terminal supports with what the user asked for.
    ///
    /// Decoration (color, animation) follows `--format`, falling back to
    /// stdout being a capable terminal. Prompting depends only on stdin and
    /// stdout both being terminals.
    pub fn resolve(probe: &TerminalProbe, flags: UiFlags) -> Self {
        let pretty = match flags.format {
            Some(OutputFormat::Plain) => false,
            Some(OutputFormat::Pretty) => probe.stdout_tty,
            None => probe.stdout_tty && !probe.term_is_dumb,
        };

        Self {
            color: pretty && !flags.no_color && !probe.no_color_env,
            unicode: !flags.ascii,
            animate: pretty,
            interactive: probe.stdout_tty && probe.stdin_tty,
            width: probe.columns.unwrap_or(80),
        }
    }

    /// Undecorated output at a fixed width.
    #[cfg(test)]
    pub fn plain(width: usize, unicode: bool) -> Self {
        Self {
            color: false,
            unicode,
            animate: false,
            interactive: false,
            width,
        }
    }
}

fn terminal_width() -> Option<usize> {
    if let Some(width) = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|width| *width > 0)
    {
        return Some(width);
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}
