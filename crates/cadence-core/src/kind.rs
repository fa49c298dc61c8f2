//! Element kind tags.
//!
//! Kinds key the spacing matrix and the indentation table, so they travel
//! through theme files as snake_case strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CadenceError;

/// Discriminant of every visual element the stream can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ElementKind {
    Info,
    Success,
    Error,
    Warning,
    ListItem,
    Text,
    Header,
    Section,
    Divider,
    Spacer,
    KeyValue,
    Panel,
    Code,
    Table,
    Spinner,
}

impl ElementKind {
    /// Every kind, in declaration order.
    pub const ALL: [ElementKind; 15] = [
        Self::Info,
        Self::Success,
        Self::Error,
        Self::Warning,
        Self::ListItem,
        Self::Text,
        Self::Header,
        Self::Section,
        Self::Divider,
        Self::Spacer,
        Self::KeyValue,
        Self::Panel,
        Self::Code,
        Self::Table,
        Self::Spinner,
    ];

    /// Stable name used in theme files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::ListItem => "list_item",
            Self::Text => "text",
            Self::Header => "header",
            Self::Section => "section",
            Self::Divider => "divider",
            Self::Spacer => "spacer",
            Self::KeyValue => "key_value",
            Self::Panel => "panel",
            Self::Code => "code",
            Self::Table => "table",
            Self::Spinner => "spinner",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CadenceError::Config(format!("unknown element kind '{}'", s)))
    }
}

impl TryFrom<String> for ElementKind {
    type Error = CadenceError;

    fn try_from(value: String) -> Result<Self, CadenceError> {
        value.parse()
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        kind.as_str().to_string()
    }
}

/// What the stream remembers about the last rendered element.
///
/// Only the kind and the transient flag survive a render; the payload is
/// dropped as soon as the element has been emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedMark {
    pub kind: ElementKind,
    pub transient: bool,
}

impl RenderedMark {
    pub fn new(kind: ElementKind, transient: bool) -> Self {
        Self { kind, transient }
    }
}
