//! Theme definitions: styles, layout, spacing rules, indentation, icons.
//!
//! A theme is built once (from defaults or a TOML file), validated, and then
//! only read. Every lookup falls back to a defined default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CadenceError, Result};
use crate::kind::ElementKind;

/// Opaque style annotation such as `"bold cyan"`.
///
/// The core never interprets styles; the terminal renderer does.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(String);

impl Style {
    pub fn new(spec: &str) -> Self {
        Self(spec.to_string())
    }

    /// A style that asks for no decoration at all.
    pub fn plain() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_plain(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Style {
    fn from(spec: &str) -> Self {
        Self::new(spec)
    }
}

/// Named text styles per semantic role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub info_style: Style,
    pub success_style: Style,
    pub error_style: Style,
    pub warning_style: Style,
    pub label_style: Style,
    pub value_style: Style,
    pub header_style: Style,
    pub subheader_style: Style,
    pub section_style: Style,
    pub list_style: Style,
    pub muted_style: Style,
    pub code_style: Style,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            info_style: Style::new("cyan"),
            success_style: Style::new("bold green"),
            error_style: Style::new("bold red"),
            warning_style: Style::new("yellow"),
            label_style: Style::new("bold"),
            value_style: Style::plain(),
            header_style: Style::new("bold white"),
            subheader_style: Style::new("dim white"),
            section_style: Style::new("bold"),
            list_style: Style::plain(),
            muted_style: Style::new("dim"),
            code_style: Style::plain(),
        }
    }
}

impl Typography {
    /// Style for a message of the given kind; non-message kinds get the
    /// info style.
    pub fn for_kind(&self, kind: ElementKind) -> &Style {
        match kind {
            ElementKind::Success => &self.success_style,
            ElementKind::Error => &self.error_style,
            ElementKind::Warning => &self.warning_style,
            ElementKind::ListItem => &self.list_style,
            _ => &self.info_style,
        }
    }
}

/// Border drawing style for tables and panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxStyle {
    Rounded,
    Square,
    Heavy,
    HeavyHead,
    Double,
    Minimal,
    Ascii,
    None,
}

/// Horizontal alignment for titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Box styles, alignment and expansion defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub table_box: BoxStyle,
    pub table_border_style: Style,
    pub panel_box: BoxStyle,
    pub panel_border_style: Style,
    pub divider_style: Style,
    pub title_align: Align,
    pub table_expand: bool,
    pub panel_expand: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            table_box: BoxStyle::HeavyHead,
            table_border_style: Style::new("bright_black"),
            panel_box: BoxStyle::Rounded,
            panel_border_style: Style::new("bright_black"),
            divider_style: Style::new("dim"),
            title_align: Align::Left,
            table_expand: false,
            panel_expand: true,
        }
    }
}

/// Blank-line counts keyed by (previous kind, current kind).
///
/// `default` is mandatory in theme files: a `[spacing]` table without it is
/// rejected when the theme is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingRules {
    pub default: usize,
    #[serde(default)]
    pub rules: BTreeMap<ElementKind, BTreeMap<ElementKind, usize>>,
}

impl SpacingRules {
    /// Rules with no specific entries.
    pub fn new(default: usize) -> Self {
        Self {
            default,
            rules: BTreeMap::new(),
        }
    }

    /// Set the gap between `previous` and `current`.
    pub fn with_rule(mut self, previous: ElementKind, current: ElementKind, lines: usize) -> Self {
        self.rules.entry(previous).or_default().insert(current, lines);
        self
    }

    /// Lines between `previous` and `current`, or the default.
    pub fn lookup(&self, previous: ElementKind, current: ElementKind) -> usize {
        self.rules
            .get(&previous)
            .and_then(|row| row.get(&current))
            .copied()
            .unwrap_or(self.default)
    }
}

impl Default for SpacingRules {
    fn default() -> Self {
        use ElementKind::{Error, Info, ListItem, Success, Text, Warning};

        // Consecutive status messages and list items stay compact.
        let tones = [Info, Success, Error, Warning];
        let mut rules = Self::new(1);
        for previous in tones {
            for current in tones {
                rules = rules.with_rule(previous, current, 0);
            }
            rules = rules.with_rule(previous, ListItem, 0);
        }
        rules
            .with_rule(ListItem, ListItem, 0)
            .with_rule(Text, Text, 0)
            .with_rule(Text, ListItem, 0)
    }
}

/// Leading spaces per element kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Indentation {
    pub default: usize,
    pub kinds: BTreeMap<ElementKind, usize>,
}

impl Default for Indentation {
    fn default() -> Self {
        let mut kinds = BTreeMap::new();
        kinds.insert(ElementKind::ListItem, 2);
        Self { default: 0, kinds }
    }
}

impl Indentation {
    pub fn with_kind(mut self, kind: ElementKind, spaces: usize) -> Self {
        self.kinds.insert(kind, spaces);
        self
    }

    /// Leading spaces for `kind`, or the default.
    pub fn get(&self, kind: ElementKind) -> usize {
        self.kinds.get(&kind).copied().unwrap_or(self.default)
    }
}

/// Glyphs per semantic role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSet {
    pub info: String,
    pub success: String,
    pub error: String,
    pub warning: String,
    pub bullet: String,
}

impl IconSet {
    pub fn unicode() -> Self {
        Self {
            info: "\u{2139}".to_string(),    // ℹ
            success: "\u{2714}".to_string(), // ✔
            error: "\u{2716}".to_string(),   // ✖
            warning: "\u{26A0}".to_string(), // ⚠
            bullet: "\u{2022}".to_string(),  // •
        }
    }

    pub fn ascii() -> Self {
        Self {
            info: "i".to_string(),
            success: "+".to_string(),
            error: "x".to_string(),
            warning: "!".to_string(),
            bullet: "*".to_string(),
        }
    }

    /// Glyph for a message of the given kind.
    pub fn for_kind(&self, kind: ElementKind) -> &str {
        match kind {
            ElementKind::Success => &self.success,
            ElementKind::Error => &self.error,
            ElementKind::Warning => &self.warning,
            ElementKind::ListItem => &self.bullet,
            _ => &self.info,
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Theme configuration for stream rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Frames cycled by spinners
    pub spinner_frames: Vec<String>,
    /// Milliseconds between spinner frames
    pub spinner_interval_ms: u64,
    /// Whether spinners vanish when they finish
    pub disappearing_spinners: bool,
    pub typography: Typography,
    pub layout: Layout,
    pub spacing: SpacingRules,
    pub indentation: Indentation,
    pub icons: IconSet,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Braille spinner (smooth rotation)
            spinner_frames: [
                "\u{280B}", // ⠋
                "\u{2819}", // ⠙
                "\u{2839}", // ⠹
                "\u{2838}", // ⠸
                "\u{283C}", // ⠼
                "\u{2834}", // ⠴
                "\u{2826}", // ⠦
                "\u{2827}", // ⠧
                "\u{2807}", // ⠇
                "\u{280F}", // ⠏
            ]
            .iter()
            .map(|frame| frame.to_string())
            .collect(),
            spinner_interval_ms: 80,
            disappearing_spinners: false,
            typography: Typography::default(),
            layout: Layout::default(),
            spacing: SpacingRules::default(),
            indentation: Indentation::default(),
            icons: IconSet::default(),
        }
    }
}

impl Theme {
    /// Parse and validate a theme from TOML. Missing sections use defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let theme: Theme = toml::from_str(input)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Serialize to TOML (the format accepted by [`Theme::from_toml_str`]).
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.spinner_frames.is_empty() {
            return Err(CadenceError::Config(
                "spinner_frames must contain at least one frame".to_string(),
            ));
        }
        if self.spinner_interval_ms == 0 {
            return Err(CadenceError::Config(
                "spinner_interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Switch to ASCII glyphs and an ASCII ticker.
    pub fn ascii(mut self) -> Self {
        self.icons = IconSet::ascii();
        self.spinner_frames = ["|", "/", "-", "\\"]
            .iter()
            .map(|frame| frame.to_string())
            .collect();
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingRules) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_indentation(mut self, indentation: Indentation) -> Self {
        self.indentation = indentation;
        self
    }

    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = typography;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_disappearing_spinners(mut self, disappearing: bool) -> Self {
        self.disappearing_spinners = disappearing;
        self
    }
}
