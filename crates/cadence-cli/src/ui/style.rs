//! Translation of theme style strings into terminal styling.
//!
//! A style string is a whitespace-separated list of tokens: modifiers
//! (`bold`, `dim`, `italic`, `underline`, `reverse`, `strike`), a foreground
//! color (`red`, `bright_black`, ...) and optionally `on <color>` for the
//! background. Unknown tokens are ignored.

use comfy_table::{Attribute, Cell, Color as TableColor};
use owo_colors::{AnsiColors, OwoColorize, Style as OwoStyle};

use cadence_core::theme::Style;

/// The sixteen ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    fn parse(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "bright_black" | "grey" | "gray" => Self::BrightBlack,
            "bright_red" => Self::BrightRed,
            "bright_green" => Self::BrightGreen,
            "bright_yellow" => Self::BrightYellow,
            "bright_blue" => Self::BrightBlue,
            "bright_magenta" => Self::BrightMagenta,
            "bright_cyan" => Self::BrightCyan,
            "bright_white" => Self::BrightWhite,
            _ => return None,
        };
        Some(color)
    }

    fn ansi(self) -> AnsiColors {
        match self {
            Self::Black => AnsiColors::Black,
            Self::Red => AnsiColors::Red,
            Self::Green => AnsiColors::Green,
            Self::Yellow => AnsiColors::Yellow,
            Self::Blue => AnsiColors::Blue,
            Self::Magenta => AnsiColors::Magenta,
            Self::Cyan => AnsiColors::Cyan,
            Self::White => AnsiColors::White,
            Self::BrightBlack => AnsiColors::BrightBlack,
            Self::BrightRed => AnsiColors::BrightRed,
            Self::BrightGreen => AnsiColors::BrightGreen,
            Self::BrightYellow => AnsiColors::BrightYellow,
            Self::BrightBlue => AnsiColors::BrightBlue,
            Self::BrightMagenta => AnsiColors::BrightMagenta,
            Self::BrightCyan => AnsiColors::BrightCyan,
            Self::BrightWhite => AnsiColors::BrightWhite,
        }
    }

    // comfy-table follows crossterm naming: "Dark" is the normal ANSI color.
    fn table(self) -> TableColor {
        match self {
            Self::Black => TableColor::Black,
            Self::Red => TableColor::DarkRed,
            Self::Green => TableColor::DarkGreen,
            Self::Yellow => TableColor::DarkYellow,
            Self::Blue => TableColor::DarkBlue,
            Self::Magenta => TableColor::DarkMagenta,
            Self::Cyan => TableColor::DarkCyan,
            Self::White => TableColor::Grey,
            Self::BrightBlack => TableColor::DarkGrey,
            Self::BrightRed => TableColor::Red,
            Self::BrightGreen => TableColor::Green,
            Self::BrightYellow => TableColor::Yellow,
            Self::BrightBlue => TableColor::Blue,
            Self::BrightMagenta => TableColor::Magenta,
            Self::BrightCyan => TableColor::Cyan,
            Self::BrightWhite => TableColor::White,
        }
    }

    /// Name understood by indicatif templates.
    fn template_name(self) -> &'static str {
        match self {
            Self::Black | Self::BrightBlack => "black",
            Self::Red | Self::BrightRed => "red",
            Self::Green | Self::BrightGreen => "green",
            Self::Yellow | Self::BrightYellow => "yellow",
            Self::Blue | Self::BrightBlue => "blue",
            Self::Magenta | Self::BrightMagenta => "magenta",
            Self::Cyan | Self::BrightCyan => "cyan",
            Self::White | Self::BrightWhite => "white",
        }
    }
}

/// A parsed style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleSpec {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
    pub strike: bool,
}

impl StyleSpec {
    pub fn parse(spec: &str) -> Self {
        let mut style = Self::default();
        let mut tokens = spec.split_whitespace().map(str::to_lowercase);
        while let Some(token) = tokens.next() {
            match token.as_str() {
                "bold" => style.bold = true,
                "dim" => style.dim = true,
                "italic" => style.italic = true,
                "underline" => style.underline = true,
                "reverse" => style.reverse = true,
                "strike" => style.strike = true,
                "on" => style.bg = tokens.next().as_deref().and_then(Color::parse),
                other => match Color::parse(other) {
                    Some(color) => style.fg = Some(color),
                    None => tracing::debug!(token = other, "ignoring unknown style token"),
                },
            }
        }
        style
    }

    pub fn from_style(style: &Style) -> Self {
        Self::parse(style.as_str())
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    fn owo(&self) -> OwoStyle {
        let mut style = OwoStyle::new();
        if let Some(fg) = self.fg {
            style = style.color(fg.ansi());
        }
        if let Some(bg) = self.bg {
            style = style.on_color(bg.ansi());
        }
        if self.bold {
            style = style.bold();
        }
        if self.dim {
            style = style.dimmed();
        }
        if self.italic {
            style = style.italic();
        }
        if self.underline {
            style = style.underline();
        }
        if self.reverse {
            style = style.reversed();
        }
        if self.strike {
            style = style.strikethrough();
        }
        style
    }

    /// Apply the style to `text` when color is enabled.
    pub fn paint(&self, text: &str, color: bool) -> String {
        if !color || self.is_plain() || text.is_empty() {
            return text.to_string();
        }
        text.style(self.owo()).to_string()
    }

    /// Apply the style to a comfy-table cell.
    pub fn cell(&self, text: &str) -> Cell {
        let mut cell = Cell::new(text);
        if let Some(fg) = self.fg {
            cell = cell.fg(fg.table());
        }
        if let Some(bg) = self.bg {
            cell = cell.bg(bg.table());
        }
        let attributes = [
            (self.bold, Attribute::Bold),
            (self.dim, Attribute::Dim),
            (self.italic, Attribute::Italic),
            (self.underline, Attribute::Underlined),
            (self.reverse, Attribute::Reverse),
            (self.strike, Attribute::CrossedOut),
        ];
        for (enabled, attribute) in attributes {
            if enabled {
                cell = cell.add_attribute(attribute);
            }
        }
        cell
    }

    /// Style suffix for an indicatif template key, e.g. `.cyan.bold`.
    pub fn template_suffix(&self) -> String {
        let mut suffix = String::new();
        if let Some(fg) = self.fg {
            suffix.push('.');
            suffix.push_str(fg.template_name());
        }
        if self.bold {
            suffix.push_str(".bold");
        }
        if self.dim {
            suffix.push_str(".dim");
        }
        suffix
    }
}

/// Paint `text` with a theme style.
pub fn paint(style: &Style, text: &str, color: bool) -> String {
    StyleSpec::from_style(style).paint(text, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modifiers_and_color() {
        let spec = StyleSpec::parse("bold green");
        assert!(spec.bold);
        assert_eq!(spec.fg, Some(Color::Green));
        assert!(spec.bg.is_none());
    }

    #[test]
    fn test_parse_background() {
        let spec = StyleSpec::parse("white on red");
        assert_eq!(spec.fg, Some(Color::White));
        assert_eq!(spec.bg, Some(Color::Red));
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let spec = StyleSpec::parse("sparkly dim");
        assert!(spec.dim);
        assert!(spec.fg.is_none());
    }

    #[test]
    fn test_empty_is_plain() {
        assert!(StyleSpec::parse("").is_plain());
        assert!(StyleSpec::parse("   ").is_plain());
    }

    #[test]
    fn test_paint_without_color_is_identity() {
        assert_eq!(StyleSpec::parse("bold red").paint("boom", false), "boom");
    }

    #[test]
    fn test_paint_with_color_adds_escapes() {
        let painted = StyleSpec::parse("bold red").paint("boom", true);
        assert!(painted.contains("boom"));
        assert!(painted.contains('\u{1b}'));
    }

    #[test]
    fn test_template_suffix() {
        assert_eq!(StyleSpec::parse("bold cyan").template_suffix(), ".cyan.bold");
        assert_eq!(StyleSpec::parse("").template_suffix(), "");
    }
}
