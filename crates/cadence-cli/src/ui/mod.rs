//! UI layer for the Cadence CLI.
//!
//! This module provides:
//! - **Context**: Terminal detection and `--format` resolution (color, animation, prompting, width)
//! - **Style**: Theme style strings to owo-colors / comfy-table styling
//! - **Terminal**: The `TerminalSink` that draws to stdout
//! - **Chooser**: The dialoguer-backed `Chooser`
//! - **Format**: String utilities (truncate, align, wrap)
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{DialoguerChooser, TerminalRenderer, UiContext};
//!
//! let ctx = UiContext::from_env(UiFlags { format: cli.format, no_color: cli.no_color, ascii: cli.ascii });
//! let renderer = TerminalRenderer::new(ctx, std::io::stdout());
//! let mut stream = Stream::new(theme, renderer).with_chooser(DialoguerChooser::new());
//! stream.success("Done")?;
//! ```

mod chooser;
mod context;
pub mod format;
pub mod style;
mod terminal;

pub use chooser::DialoguerChooser;
pub use context::{UiContext, UiFlags};
pub use terminal::TerminalRenderer;
