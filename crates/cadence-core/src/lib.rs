//! # Cadence Core
//!
//! Core library for Cadence - composable, consistently spaced terminal output.
//!
//! This crate owns the rendering model: what elements exist, how much
//! whitespace goes between them, and how paginated tables are navigated.
//! Drawing to a real terminal and prompting the user sit behind the
//! [`TerminalSink`] and [`Chooser`] traits, implemented by the CLI.
//!
//! ## Architecture
//!
//! - **kind**: Element kinds and the last-rendered mark
//! - **theme**: Typography, layout, spacing rules, icons, spinner settings
//! - **elements**: The closed set of visual elements
//! - **spacing**: Lead-in whitespace computation
//! - **pagination**: Page cursor and navigation loop
//! - **stream**: Session-scoped renderer tying it all together
//! - **sink**: Output capability and the recording sink used in tests

pub mod elements;
pub mod error;
pub mod kind;
pub mod pagination;
pub mod sink;
pub mod spacing;
pub mod stream;
pub mod theme;

pub use elements::{
    Code, Divider, Element, Header, KeyValue, Message, Panel, Section, Spacer, Spinner, Table,
    Text, Tone,
};
pub use error::{CadenceError, Result};
pub use kind::{ElementKind, RenderedMark};
pub use pagination::{paginate, Choice, Chooser, PageAction, Paginator, Transition};
pub use sink::{RecordingSink, Renderable, SinkEvent, TerminalSink};
pub use spacing::spacing_before;
pub use stream::{SpinnerGuard, Stream};
pub use theme::Theme;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
