//! The closed set of visual elements.
//!
//! Every element answers the same questions for the stream: its kind, whether
//! it is transient, whether it bypasses automatic spacing, whether its render
//! is deferred, and whether it has anything to show.

mod code;
mod key_value;
mod panel;
mod spinner;
mod structure;
mod table;
mod text;

pub use code::Code;
pub use key_value::KeyValue;
pub use panel::Panel;
pub use spinner::Spinner;
pub use structure::{Divider, Header, Section, Spacer};
pub use table::Table;
pub use text::{Message, Text, Tone};

use crate::error::Result;
use crate::kind::ElementKind;
use crate::sink::TerminalSink;
use crate::theme::Theme;

/// One unit of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Message(Message),
    Text(Text),
    Header(Header),
    Section(Section),
    Divider(Divider),
    Spacer(Spacer),
    KeyValue(KeyValue),
    Panel(Panel),
    Code(Code),
    Table(Table),
    Spinner(Spinner),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Message(message) => message.tone.kind(),
            Self::Text(_) => ElementKind::Text,
            Self::Header(_) => ElementKind::Header,
            Self::Section(_) => ElementKind::Section,
            Self::Divider(_) => ElementKind::Divider,
            Self::Spacer(_) => ElementKind::Spacer,
            Self::KeyValue(_) => ElementKind::KeyValue,
            Self::Panel(_) => ElementKind::Panel,
            Self::Code(_) => ElementKind::Code,
            Self::Table(_) => ElementKind::Table,
            Self::Spinner(_) => ElementKind::Spinner,
        }
    }

    /// Whether the element vanishes from the screen once done.
    pub fn is_transient(&self, theme: &Theme) -> bool {
        match self {
            Self::Spinner(spinner) => spinner.is_transient(theme),
            _ => false,
        }
    }

    /// Explicit spacers manage their own whitespace.
    pub fn bypasses_automatic_spacing(&self) -> bool {
        matches!(self, Self::Spacer(_))
    }

    /// Deferred elements drive their own lifecycle outside `Stream::render`.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Spinner(_))
    }

    /// False for tables and key-value lists without rows.
    pub fn has_content(&self) -> bool {
        match self {
            Self::Table(table) => !table.is_empty(),
            Self::KeyValue(kv) => !kv.is_empty(),
            _ => true,
        }
    }

    /// Reject malformed payloads before anything is written.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Message(message) => message.validate(),
            Self::Text(text) => text.validate(),
            Self::Header(header) => header.validate(),
            Self::Section(section) => section.validate(),
            Self::Table(table) => table.validate(),
            _ => Ok(()),
        }
    }

    /// Draw the element. Tables are drawn unpaginated; spinners draw nothing.
    pub fn render(&self, theme: &Theme, sink: &mut dyn TerminalSink) -> Result<()> {
        match self {
            Self::Message(message) => message.render(theme, sink),
            Self::Text(text) => text.render(theme, sink),
            Self::Header(header) => header.render(theme, sink),
            Self::Section(section) => section.render(theme, sink),
            Self::Divider(divider) => divider.render(theme, sink),
            Self::Spacer(spacer) => spacer.render(sink),
            Self::KeyValue(kv) => kv.render(theme, sink),
            Self::Panel(panel) => panel.render(theme, sink),
            Self::Code(code) => code.render(theme, sink),
            Self::Table(table) => table.render(theme, sink),
            Self::Spinner(_) => Ok(()),
        }
    }
}

macro_rules! impl_from_payload {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Element {
                fn from(payload: $variant) -> Self {
                    Element::$variant(payload)
                }
            }
        )*
    };
}

impl_from_payload!(
    Message, Text, Header, Section, Divider, Spacer, KeyValue, Panel, Code, Table, Spinner,
);
