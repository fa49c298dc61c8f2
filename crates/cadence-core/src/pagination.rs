//! Interactive paginated tables.
//!
//! [`Paginator`] is the pure state machine (current page plus transition
//! function). [`paginate`] drives it against a sink and a [`Chooser`]:
//! render the page, render the footer, ask for the next action, repeat
//! until the user is done.

use std::ops::Range;

use crate::elements::Table;
use crate::error::Result;
use crate::sink::{Renderable, Span, StyledLine, TerminalSink};
use crate::theme::Theme;

/// Prompt label shown above the navigation options.
pub const NAVIGATION_PROMPT: &str = "Navigate";

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Interactive selection capability.
pub trait Chooser {
    /// Present `options` under `label` and block until one is selected.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::Interactive` when no terminal is available or
    /// the prompt fails.
    fn choose(&mut self, label: &str, options: &[Choice]) -> Result<String>;
}

impl<T: Chooser + ?Sized> Chooser for &mut T {
    fn choose(&mut self, label: &str, options: &[Choice]) -> Result<String> {
        (**self).choose(label, options)
    }
}

/// Navigation actions offered between pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Next,
    Previous,
    Done,
}

impl PageAction {
    pub fn value(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Next => "Next \u{2192}",
            Self::Previous => "\u{2190} Previous",
            Self::Done => "Done",
        }
    }

    pub fn choice(&self) -> Choice {
        Choice::new(self.label(), self.value())
    }
}

/// Result of applying a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved(usize),
    Finished,
}

/// Page cursor over a fixed number of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    total_rows: usize,
    page_size: usize,
    current_page: usize,
}

impl Paginator {
    /// `None` when the rows fit on one page or the page size is unset/zero.
    pub fn new(total_rows: usize, page_size: Option<usize>) -> Option<Self> {
        let page_size = page_size.filter(|&size| size > 0)?;
        if total_rows <= page_size {
            return None;
        }
        Some(Self {
            total_rows,
            page_size,
            current_page: 0,
        })
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn total_pages(&self) -> usize {
        self.total_rows.div_ceil(self.page_size)
    }

    /// Zero-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Row indices shown on the current page.
    pub fn page_range(&self) -> Range<usize> {
        let start = self.current_page * self.page_size;
        let end = (start + self.page_size).min(self.total_rows);
        start..end
    }

    /// `Page {n} of {total} ({rows} items)`
    pub fn footer(&self) -> String {
        format!(
            "Page {} of {} ({} items)",
            self.current_page + 1,
            self.total_pages(),
            self.total_rows
        )
    }

    /// Actions available on the current page: Next, Previous, Done.
    pub fn actions(&self) -> Vec<PageAction> {
        let mut actions = Vec::with_capacity(3);
        if self.has_next() {
            actions.push(PageAction::Next);
        }
        if self.has_previous() {
            actions.push(PageAction::Previous);
        }
        actions.push(PageAction::Done);
        actions
    }

    pub fn choices(&self) -> Vec<Choice> {
        self.actions().iter().map(PageAction::choice).collect()
    }

    /// Apply a selected value.
    ///
    /// `next`/`previous` move when they were offered on this page; any
    /// other value ends navigation.
    pub fn apply(&mut self, selected: &str) -> Transition {
        if selected == PageAction::Next.value() && self.has_next() {
            self.current_page += 1;
            Transition::Moved(self.current_page)
        } else if selected == PageAction::Previous.value() && self.has_previous() {
            self.current_page -= 1;
            Transition::Moved(self.current_page)
        } else {
            Transition::Finished
        }
    }
}

/// Run the navigation loop for `table`. Returns the number of pages shown.
///
/// The caller has already checked that the table needs pagination; if it
/// does not, the table is drawn once without footer or prompt.
pub fn paginate(
    table: &Table,
    theme: &Theme,
    sink: &mut dyn TerminalSink,
    chooser: &mut dyn Chooser,
) -> Result<usize> {
    let Some(mut pager) = Paginator::new(table.rows.len(), table.page_size) else {
        table.render(theme, sink)?;
        return Ok(1);
    };

    let mut shown = 0;
    loop {
        let rows = &table.rows[pager.page_range()];
        sink.emit(&Renderable::Table(table.block(theme, rows)))?;
        sink.emit(&Renderable::Line(StyledLine::new(
            0,
            vec![Span::styled(&pager.footer(), &theme.typography.muted_style)],
        )))?;
        shown += 1;

        let selected = chooser.choose(NAVIGATION_PROMPT, &pager.choices())?;
        match pager.apply(&selected) {
            Transition::Moved(page) => {
                tracing::debug!(page, selected = %selected, "table page changed");
            }
            Transition::Finished => {
                tracing::debug!(selected = %selected, pages_shown = shown, "table navigation finished");
                return Ok(shown);
            }
        }
    }
}
