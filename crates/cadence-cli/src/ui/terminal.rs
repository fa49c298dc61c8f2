//! Terminal renderer: draws renderables to a writer.

use std::io::Write;
use std::time::Duration;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::NOTHING;
use comfy_table::{ColumnConstraint, ContentArrangement, Table as ComfyTable, Width};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use cadence_core::sink::{
    CodeBlock, PanelBlock, Renderable, RuleBlock, SpinnerBlock, StyledLine, TableBlock,
    TerminalSink,
};
use cadence_core::theme::{Align, BoxStyle, Style};
use cadence_core::{CadenceError, Result};

use super::context::UiContext;
use super::format::{align, max_line_width, truncate, wrap};
use super::style::{paint, StyleSpec};

// comfy-table presets, in TableComponent order:
// left, right, top, bottom, left-header, header-line, header-cross,
// right-header, vertical, horizontal, cross, left-cross, right-cross,
// top-cross, bottom-cross, top-left, top-right, bottom-left, bottom-right.
// A space removes the component.
const SQUARE: &str = "││──├─┼┤│    ┬┴┌┐└┘";
const HEAVY: &str = "┃┃━━┣━╋┫┃    ┳┻┏┓┗┛";
const HEAVY_HEAD: &str = "││━─┡━╇┩│    ┳┴┏┓└┘";
const DOUBLE: &str = "║║══╠═╬╣║    ╦╩╔╗╚╝";
const MINIMAL: &str = "     ─┼ │          ";
const ASCII: &str = "||--+-++|    ++++++";
const ASCII_MINIMAL: &str = "     -+ |          ";

/// Corner and edge glyphs for hand-drawn boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxGlyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl BoxGlyphs {
    const fn new(corners: [char; 4], horizontal: char, vertical: char) -> Self {
        Self {
            top_left: corners[0],
            top_right: corners[1],
            bottom_left: corners[2],
            bottom_right: corners[3],
            horizontal,
            vertical,
        }
    }

    fn for_style(style: BoxStyle, unicode: bool) -> Option<Self> {
        if !unicode {
            return match style {
                BoxStyle::None => None,
                _ => Some(Self::new(['+', '+', '+', '+'], '-', '|')),
            };
        }
        let glyphs = match style {
            BoxStyle::Rounded => Self::new(['╭', '╮', '╰', '╯'], '─', '│'),
            BoxStyle::Square | BoxStyle::Minimal => Self::new(['┌', '┐', '└', '┘'], '─', '│'),
            BoxStyle::Heavy | BoxStyle::HeavyHead => Self::new(['┏', '┓', '┗', '┛'], '━', '┃'),
            BoxStyle::Double => Self::new(['╔', '╗', '╚', '╝'], '═', '║'),
            BoxStyle::Ascii => Self::new(['+', '+', '+', '+'], '-', '|'),
            BoxStyle::None => return None,
        };
        Some(glyphs)
    }
}

struct ActiveSpinner {
    bar: Option<ProgressBar>,
    message: String,
    style: Style,
    transient: bool,
}

/// A [`TerminalSink`] writing styled text to `W`.
pub struct TerminalRenderer<W: Write> {
    ctx: UiContext,
    out: W,
    spinner: Option<ActiveSpinner>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(ctx: UiContext, out: W) -> Self {
        Self {
            ctx,
            out,
            spinner: None,
        }
    }

    pub fn context(&self) -> &UiContext {
        &self.ctx
    }

    #[allow(dead_code)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        paint(style, text, self.ctx.color)
    }

    fn line(&self, line: &StyledLine) -> String {
        let mut out = " ".repeat(line.indent);
        for span in &line.spans {
            out.push_str(&self.paint(&span.style, &span.text));
        }
        out
    }

    fn rule(&self, rule: &RuleBlock) -> String {
        let width = self.ctx.width.max(1);
        let fill = if self.ctx.unicode { "\u{2500}" } else { "-" };
        let Some(title) = &rule.title else {
            return self.paint(&rule.style, &fill.repeat(width));
        };

        let label = format!(" {} ", title.text);
        let label_width = label.chars().count();
        if label_width + 2 > width {
            return self.paint(&title.style, &title.text);
        }
        let gap = width - label_width;
        let (left, right) = match rule.align {
            Align::Left => (2, gap - 2),
            Align::Right => (gap - 2, 2),
            Align::Center => (gap / 2, gap - gap / 2),
        };
        format!(
            "{}{}{}",
            self.paint(&rule.style, &fill.repeat(left)),
            self.paint(&title.style, &label),
            self.paint(&rule.style, &fill.repeat(right)),
        )
    }

    fn table(&self, block: &TableBlock) -> String {
        let mut table = ComfyTable::new();
        table.load_preset(self.preset(block.box_style));
        if self.ctx.unicode && block.box_style == BoxStyle::Rounded {
            table.apply_modifier(UTF8_ROUND_CORNERS);
        }
        if self.ctx.color {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }

        let width = block.width.unwrap_or(self.ctx.width).max(1);
        table.set_width(width as u16);
        table.set_content_arrangement(if block.expand {
            ContentArrangement::DynamicFullWidth
        } else {
            ContentArrangement::Dynamic
        });

        if block.show_header {
            let header = StyleSpec::from_style(&block.header_style);
            table.set_header(block.columns.iter().map(|c| header.cell(&c.header)));
        }

        let styles: Vec<StyleSpec> = block
            .columns
            .iter()
            .map(|c| StyleSpec::from_style(&c.style))
            .collect();
        for row in &block.rows {
            table.add_row(row.iter().enumerate().map(|(i, value)| {
                let column = &block.columns[i];
                let text = match (column.wrap, column.width) {
                    (false, Some(limit)) => truncate(value, limit, self.ctx.unicode),
                    _ => value.clone(),
                };
                styles[i].cell(&text)
            }));
        }

        for (i, column) in block.columns.iter().enumerate() {
            if let (Some(width), Some(target)) = (column.width, table.column_mut(i)) {
                target.set_constraint(ColumnConstraint::Absolute(Width::Fixed(width as u16)));
            }
            if block.box_style == BoxStyle::None {
                if let Some(target) = table.column_mut(i) {
                    target.set_padding((0, 2));
                }
            }
        }

        let body = table.to_string();
        let Some(title) = &block.title else {
            return body;
        };
        let table_width = max_line_width(&body);
        let heading = align(title, table_width, block.title_align, " ");
        format!(
            "{}\n{}",
            self.paint(&block.title_style, heading.trim_end()),
            body
        )
    }

    fn preset(&self, style: BoxStyle) -> &'static str {
        if !self.ctx.unicode {
            return match style {
                BoxStyle::None => NOTHING,
                BoxStyle::Minimal => ASCII_MINIMAL,
                _ => ASCII,
            };
        }
        match style {
            BoxStyle::Rounded | BoxStyle::Square => SQUARE,
            BoxStyle::Heavy => HEAVY,
            BoxStyle::HeavyHead => HEAVY_HEAD,
            BoxStyle::Double => DOUBLE,
            BoxStyle::Minimal => MINIMAL,
            BoxStyle::Ascii => ASCII,
            BoxStyle::None => NOTHING,
        }
    }

    fn panel(&self, block: &PanelBlock) -> Vec<String> {
        let Some(glyphs) = BoxGlyphs::for_style(block.box_style, self.ctx.unicode) else {
            return wrap(&block.content, self.ctx.width.max(1));
        };

        // Two border columns plus one space of padding on each side
        let max_inner = self.ctx.width.saturating_sub(4).max(1);
        let edge_labels = [block.title.as_deref(), block.subtitle.as_deref()]
            .into_iter()
            .flatten()
            .map(|label| label.chars().count() + 2)
            .max()
            .unwrap_or(0);
        let inner = if block.expand {
            max_inner
        } else {
            max_line_width(&block.content)
                .max(edge_labels)
                .clamp(1, max_inner)
        };

        let horizontal = glyphs.horizontal.to_string();
        let edge = |label: &Option<String>, align_to: Align, left: char, right: char| {
            let span = inner + 2;
            let fill = match label {
                Some(label) if label.chars().count() + 2 <= span => {
                    align(&format!(" {} ", label), span, align_to, &horizontal)
                }
                _ => horizontal.repeat(span),
            };
            self.paint(&block.border_style, &format!("{}{}{}", left, fill, right))
        };

        let mut lines = vec![edge(
            &block.title,
            block.title_align,
            glyphs.top_left,
            glyphs.top_right,
        )];
        let side = self.paint(&block.border_style, &glyphs.vertical.to_string());
        for text in wrap(&block.content, inner) {
            lines.push(format!(
                "{} {} {}",
                side,
                align(&text, inner, Align::Left, " "),
                side
            ));
        }
        lines.push(edge(
            &block.subtitle,
            Align::Right,
            glyphs.bottom_left,
            glyphs.bottom_right,
        ));
        lines
    }

    fn code(&self, block: &CodeBlock) -> Vec<String> {
        let mut lines = Vec::new();
        let heading = match (&block.title, &block.language) {
            (Some(title), Some(language)) => Some(format!("{} ({})", title, language)),
            (Some(title), None) => Some(title.clone()),
            (None, Some(language)) => Some(language.clone()),
            (None, None) => None,
        };
        if let Some(heading) = heading {
            lines.push(self.paint(&block.title_style, &heading));
        }

        let source: Vec<&str> = block.code.lines().collect();
        let gutter_width = source.len().to_string().len();
        let separator = if self.ctx.unicode { "\u{2502}" } else { "|" };
        for (index, text) in source.iter().enumerate() {
            let body = self.paint(&block.style, text);
            if block.line_numbers {
                let gutter = format!("{:>width$} {}", index + 1, separator, width = gutter_width);
                lines.push(format!("{} {}", self.paint(&block.gutter_style, &gutter), body));
            } else {
                lines.push(body);
            }
        }
        lines
    }

    fn spinner_bar(&self, block: &SpinnerBlock) -> Result<ProgressBar> {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        let suffix = if self.ctx.color {
            StyleSpec::from_style(&block.style).template_suffix()
        } else {
            String::new()
        };
        let mut frames: Vec<&str> = block.frames.iter().map(String::as_str).collect();
        // indicatif shows the last tick string once finished
        frames.push("");
        let style = ProgressStyle::default_spinner()
            .template(&format!("{{spinner{}}} {{msg}}", suffix))
            .map_err(|e| CadenceError::Render(format!("invalid spinner template: {}", e)))?
            .tick_strings(&frames);
        bar.set_style(style);
        bar.set_message(block.message.clone());
        bar.enable_steady_tick(Duration::from_millis(block.interval_ms));
        Ok(bar)
    }
}

impl<W: Write> TerminalSink for TerminalRenderer<W> {
    fn emit(&mut self, renderable: &Renderable) -> Result<()> {
        match renderable {
            Renderable::Line(line) => {
                let text = self.line(line);
                self.write_line(&text)
            }
            Renderable::Rule(rule) => {
                let text = self.rule(rule);
                self.write_line(&text)
            }
            Renderable::Table(block) => {
                let text = self.table(block);
                self.write_line(&text)
            }
            Renderable::Panel(block) => {
                for line in self.panel(block) {
                    self.write_line(&line)?;
                }
                Ok(())
            }
            Renderable::Code(block) => {
                for line in self.code(block) {
                    self.write_line(&line)?;
                }
                Ok(())
            }
        }
    }

    fn blank_lines(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn start_spinner(&mut self, block: &SpinnerBlock) -> Result<()> {
        self.stop_spinner()?;
        let bar = if self.ctx.animate {
            self.out.flush()?;
            Some(self.spinner_bar(block)?)
        } else {
            None
        };
        self.spinner = Some(ActiveSpinner {
            bar,
            message: block.message.clone(),
            style: block.style.clone(),
            transient: block.transient,
        });
        Ok(())
    }

    fn update_spinner(&mut self, message: &str) -> Result<()> {
        if let Some(active) = self.spinner.as_mut() {
            active.message = message.to_string();
            if let Some(bar) = &active.bar {
                bar.set_message(message.to_string());
            }
        }
        Ok(())
    }

    fn stop_spinner(&mut self) -> Result<()> {
        let Some(active) = self.spinner.take() else {
            return Ok(());
        };
        if let Some(bar) = &active.bar {
            bar.finish_and_clear();
        }
        if !active.transient {
            let text = self.paint(&active.style, &active.message);
            self.write_line(&text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::sink::{ColumnSpec, Span};

    fn plain_ctx(unicode: bool) -> UiContext {
        UiContext::plain(40, unicode)
    }

    fn rendered(unicode: bool, renderables: &[Renderable]) -> String {
        let mut renderer = TerminalRenderer::new(plain_ctx(unicode), Vec::new());
        for renderable in renderables {
            renderer.emit(renderable).unwrap();
        }
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    fn table_block(box_style: BoxStyle) -> TableBlock {
        TableBlock {
            title: Some("Users".to_string()),
            title_style: Style::plain(),
            title_align: Align::Left,
            columns: vec![
                ColumnSpec {
                    header: "name".to_string(),
                    width: None,
                    wrap: true,
                    style: Style::plain(),
                },
                ColumnSpec {
                    header: "age".to_string(),
                    width: None,
                    wrap: true,
                    style: Style::plain(),
                },
            ],
            rows: vec![vec!["Alice".to_string(), "30".to_string()]],
            show_header: true,
            header_style: Style::new("bold"),
            box_style,
            border_style: Style::plain(),
            expand: false,
            width: None,
        }
    }

    #[test]
    fn test_presets_have_every_component() {
        for preset in [SQUARE, HEAVY, HEAVY_HEAD, DOUBLE, MINIMAL, ASCII, ASCII_MINIMAL] {
            assert_eq!(preset.chars().count(), 19, "{}", preset);
        }
    }

    #[test]
    fn test_line_with_indent() {
        let line = StyledLine::new(2, vec![Span::styled("\u{2022} item", &Style::new("bold"))]);
        let out = rendered(true, &[Renderable::Line(line)]);
        assert_eq!(out, "  \u{2022} item\n");
    }

    #[test]
    fn test_untitled_rule_spans_width() {
        let rule = RuleBlock {
            title: None,
            align: Align::Left,
            style: Style::new("dim"),
        };
        let out = rendered(false, &[Renderable::Rule(rule)]);
        assert_eq!(out.trim_end(), "-".repeat(40));
    }

    #[test]
    fn test_titled_rule_keeps_title() {
        let rule = RuleBlock {
            title: Some(Span::plain("SETUP")),
            align: Align::Left,
            style: Style::plain(),
        };
        let out = rendered(false, &[Renderable::Rule(rule)]);
        assert!(out.starts_with("-- SETUP -"));
        assert_eq!(out.trim_end().chars().count(), 40);
    }

    #[test]
    fn test_table_has_title_header_and_rows() {
        let out = rendered(true, &[Renderable::Table(table_block(BoxStyle::HeavyHead))]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Users");
        assert!(out.contains("name"));
        assert!(out.contains("Alice"));
        assert!(out.contains('\u{250F}'));
    }

    #[test]
    fn test_ascii_table_has_no_box_drawing() {
        let out = rendered(false, &[Renderable::Table(table_block(BoxStyle::Rounded))]);
        assert!(out.contains('+'));
        assert!(!out.contains('\u{256D}'));
    }

    #[test]
    fn test_borderless_table() {
        let mut block = table_block(BoxStyle::None);
        block.title = None;
        block.show_header = false;
        let out = rendered(true, &[Renderable::Table(block)]);
        assert!(out.contains("Alice"));
        assert!(!out.contains('\u{2502}'));
        assert!(!out.contains("name"));
    }

    #[test]
    fn test_fixed_width_without_wrap_truncates() {
        let mut block = table_block(BoxStyle::None);
        block.title = None;
        block.rows[0][0] = "Alexandria".to_string();
        block.columns[0].width = Some(6);
        block.columns[0].wrap = false;
        let out = rendered(false, &[Renderable::Table(block)]);
        assert!(out.contains("Ale"));
        assert!(!out.contains("Alexandria"));
    }

    #[test]
    fn test_panel_borders_and_labels() {
        let panel = PanelBlock {
            content: "hello".to_string(),
            title: Some("Note".to_string()),
            title_align: Align::Left,
            subtitle: Some("end".to_string()),
            box_style: BoxStyle::Rounded,
            border_style: Style::plain(),
            expand: false,
        };
        let out = rendered(true, &[Renderable::Panel(panel)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("\u{256D} Note "));
        assert_eq!(lines[1], "\u{2502} hello  \u{2502}");
        assert!(lines[2].ends_with(" end \u{256F}"));
        // All three rows line up
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_expanded_panel_fills_width() {
        let panel = PanelBlock {
            content: "x".to_string(),
            title: None,
            title_align: Align::Left,
            subtitle: None,
            box_style: BoxStyle::Square,
            border_style: Style::plain(),
            expand: true,
        };
        let out = rendered(true, &[Renderable::Panel(panel)]);
        assert!(out.lines().all(|l| l.chars().count() == 40));
    }

    #[test]
    fn test_code_with_line_numbers() {
        let block = CodeBlock {
            code: "fn main() {\n}".to_string(),
            language: Some("rust".to_string()),
            title: Some("main.rs".to_string()),
            title_style: Style::plain(),
            line_numbers: true,
            style: Style::plain(),
            gutter_style: Style::plain(),
        };
        let out = rendered(false, &[Renderable::Code(block)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "main.rs (rust)");
        assert_eq!(lines[1], "1 | fn main() {");
        assert_eq!(lines[2], "2 | }");
    }

    #[test]
    fn test_spinner_without_animation() {
        let block = SpinnerBlock {
            message: "Loading".to_string(),
            frames: vec!["-".to_string()],
            interval_ms: 80,
            style: Style::plain(),
            transient: false,
        };
        let mut renderer = TerminalRenderer::new(plain_ctx(true), Vec::new());
        renderer.start_spinner(&block).unwrap();
        renderer.update_spinner("Loaded").unwrap();
        renderer.stop_spinner().unwrap();

        let transient = SpinnerBlock {
            transient: true,
            ..block
        };
        renderer.start_spinner(&transient).unwrap();
        renderer.stop_spinner().unwrap();
        // Stopping twice is harmless
        renderer.stop_spinner().unwrap();

        assert_eq!(String::from_utf8(renderer.into_inner()).unwrap(), "Loaded\n");
    }

    #[test]
    fn test_blank_lines() {
        let mut renderer = TerminalRenderer::new(plain_ctx(true), Vec::new());
        renderer.blank_lines(2).unwrap();
        renderer.blank_lines(0).unwrap();
        assert_eq!(renderer.into_inner(), b"\n\n");
    }
}
