//! The stream: sequences elements with automatic spacing.

use std::sync::Arc;

use crate::elements::{
    Code, Divider, Element, Header, KeyValue, Message, Panel, Section, Spacer, Spinner, Table,
    Text,
};
use crate::error::{CadenceError, Result};
use crate::kind::{ElementKind, RenderedMark};
use crate::pagination::{paginate, Chooser};
use crate::sink::TerminalSink;
use crate::spacing::spacing_before;
use crate::theme::Theme;

/// Session-scoped renderer.
///
/// Each stream remembers only the kind and transient flag of the last
/// element it rendered. Independent streams never share that mark; the theme
/// may be shared between them.
pub struct Stream<S: TerminalSink> {
    theme: Arc<Theme>,
    sink: S,
    chooser: Option<Box<dyn Chooser>>,
    last: Option<RenderedMark>,
}

impl<S: TerminalSink> std::fmt::Debug for Stream<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stream")
            .field("theme", &self.theme)
            .field("has_chooser", &self.chooser.is_some())
            .field("last", &self.last)
            .finish()
    }
}

impl<S: TerminalSink> Stream<S> {
    pub fn new(theme: impl Into<Arc<Theme>>, sink: S) -> Self {
        Self {
            theme: theme.into(),
            sink,
            chooser: None,
            last: None,
        }
    }

    /// Attach the chooser used to navigate paginated tables.
    pub fn with_chooser(mut self, chooser: impl Chooser + 'static) -> Self {
        self.chooser = Some(Box::new(chooser));
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Kind and transient flag of the last rendered element.
    pub fn last_rendered(&self) -> Option<RenderedMark> {
        self.last
    }

    /// Render one element with automatic lead-in spacing.
    ///
    /// # Errors
    ///
    /// - `Validation` for malformed payloads; nothing is written and the
    ///   last-rendered mark is unchanged
    /// - `Interactive` when a table needs pagination and no chooser is
    ///   attached (also before any output), or the chooser fails
    /// - `Render` when the sink fails
    pub fn render(&mut self, element: impl Into<Element>) -> Result<()> {
        let element = element.into();
        element.validate()?;

        let kind = element.kind();
        if element.is_deferred() {
            tracing::debug!(kind = %kind, "deferred element skipped by render");
            return Ok(());
        }
        if !element.has_content() {
            tracing::debug!(kind = %kind, "element has no content");
            return Ok(());
        }

        let paginated = match &element {
            Element::Table(table) => table.pagination().is_some(),
            _ => false,
        };
        if paginated && self.chooser.is_none() {
            return Err(CadenceError::Interactive(
                "table needs pagination but no chooser is attached".to_string(),
            ));
        }

        let bypasses = element.bypasses_automatic_spacing();
        self.lead_in(kind, bypasses)?;

        match (&element, self.chooser.as_deref_mut()) {
            (Element::Table(table), Some(chooser)) if paginated => {
                paginate(table, &self.theme, &mut self.sink, chooser)?;
            }
            _ => element.render(&self.theme, &mut self.sink)?,
        }

        if !bypasses {
            self.last = Some(RenderedMark::new(kind, element.is_transient(&self.theme)));
        }
        Ok(())
    }

    /// Start a spinner. The returned guard stops it on `finish` or drop.
    pub fn spinner(&mut self, spinner: Spinner) -> Result<SpinnerGuard<'_, S>> {
        self.lead_in(ElementKind::Spinner, false)?;
        let block = spinner.block(&self.theme);
        self.sink.start_spinner(&block)?;
        tracing::debug!(message = %block.message, transient = block.transient, "spinner started");
        Ok(SpinnerGuard {
            stream: self,
            transient: block.transient,
            finished: false,
        })
    }

    fn lead_in(&mut self, kind: ElementKind, bypasses: bool) -> Result<()> {
        let lines = spacing_before(self.last, kind, bypasses, &self.theme.spacing);
        if lines > 0 {
            self.sink.blank_lines(lines)?;
        }
        Ok(())
    }

    pub fn info(&mut self, text: &str) -> Result<()> {
        self.render(Message::info(text))
    }

    pub fn success(&mut self, text: &str) -> Result<()> {
        self.render(Message::success(text))
    }

    pub fn error(&mut self, text: &str) -> Result<()> {
        self.render(Message::error(text))
    }

    pub fn warning(&mut self, text: &str) -> Result<()> {
        self.render(Message::warning(text))
    }

    pub fn list_item(&mut self, text: &str) -> Result<()> {
        self.render(Message::list_item(text))
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        self.render(Text::new(text))
    }

    pub fn header(&mut self, header: Header) -> Result<()> {
        self.render(header)
    }

    pub fn section(&mut self, title: &str) -> Result<()> {
        self.render(Section::new(title))
    }

    pub fn divider(&mut self) -> Result<()> {
        self.render(Divider)
    }

    pub fn spacer(&mut self, lines: usize) -> Result<()> {
        self.render(Spacer::new(lines))
    }

    pub fn panel(&mut self, panel: Panel) -> Result<()> {
        self.render(panel)
    }

    pub fn key_value(&mut self, key_value: KeyValue) -> Result<()> {
        self.render(key_value)
    }

    pub fn code(&mut self, code: Code) -> Result<()> {
        self.render(code)
    }

    pub fn table(&mut self, table: Table) -> Result<()> {
        self.render(table)
    }
}

/// A running spinner.
///
/// Finishing records the spinner as the last rendered element, so the next
/// element's gap accounts for a vanished (transient) spinner.
pub struct SpinnerGuard<'a, S: TerminalSink> {
    stream: &'a mut Stream<S>,
    transient: bool,
    finished: bool,
}

impl<S: TerminalSink> std::fmt::Debug for SpinnerGuard<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpinnerGuard")
            .field("transient", &self.transient)
            .field("finished", &self.finished)
            .finish()
    }
}

impl<S: TerminalSink> SpinnerGuard<'_, S> {
    pub fn set_message(&mut self, message: &str) -> Result<()> {
        self.stream.sink.update_spinner(message)
    }

    /// Stop the spinner and record it in the stream.
    pub fn finish(mut self) -> Result<()> {
        self.stop()
    }

    fn stop(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.stream.sink.stop_spinner()?;
        self.stream.last = Some(RenderedMark::new(ElementKind::Spinner, self.transient));
        Ok(())
    }
}

impl<S: TerminalSink> Drop for SpinnerGuard<'_, S> {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            tracing::warn!(error = %err, "failed to stop spinner");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{RecordingSink, SinkEvent};
    use crate::theme::SpacingRules;

    fn stream() -> Stream<RecordingSink> {
        Stream::new(Theme::default(), RecordingSink::new())
    }

    /// Draws nothing and refuses to stop spinners.
    struct StuckSpinnerSink;

    impl TerminalSink for StuckSpinnerSink {
        fn emit(&mut self, _renderable: &crate::sink::Renderable) -> Result<()> {
            Ok(())
        }

        fn blank_lines(&mut self, _count: usize) -> Result<()> {
            Ok(())
        }

        fn start_spinner(&mut self, _spinner: &crate::sink::SpinnerBlock) -> Result<()> {
            Ok(())
        }

        fn stop_spinner(&mut self) -> Result<()> {
            Err(CadenceError::Render("terminal closed".to_string()))
        }
    }

    #[test]
    fn test_fresh_stream_has_no_mark() {
        assert!(stream().last_rendered().is_none());
    }

    #[test]
    fn test_first_element_has_no_lead_in() {
        let mut stream = stream();
        stream.render(Panel::new("hello")).unwrap();
        assert_eq!(stream.sink().blank_count(), 0);
        assert_eq!(
            stream.last_rendered(),
            Some(RenderedMark::new(ElementKind::Panel, false))
        );
    }

    #[test]
    fn test_default_gap_between_unrelated_kinds() {
        let mut stream = stream();
        stream.info("one").unwrap();
        stream.divider().unwrap();
        assert!(matches!(stream.sink().events[1], SinkEvent::Blank(1)));
    }

    #[test]
    fn test_spacer_does_not_move_mark() {
        let mut stream = stream();
        stream.info("one").unwrap();
        stream.spacer(2).unwrap();
        assert_eq!(
            stream.last_rendered(),
            Some(RenderedMark::new(ElementKind::Info, false))
        );
        // Spacer writes its own lines and nothing else
        assert_eq!(stream.sink().blank_count(), 2);
    }

    #[test]
    fn test_validation_failure_leaves_state() {
        let mut stream = stream();
        stream.info("one").unwrap();
        stream.sink_mut().clear();

        let err = stream.text("").unwrap_err();
        assert!(matches!(err, CadenceError::Validation(_)));
        assert!(stream.sink().events.is_empty());
        assert_eq!(
            stream.last_rendered(),
            Some(RenderedMark::new(ElementKind::Info, false))
        );
    }

    #[test]
    fn test_deferred_render_is_skipped() {
        let mut stream = stream();
        stream.info("one").unwrap();
        stream.sink_mut().clear();
        stream.render(Spinner::new("Loading")).unwrap();
        assert!(stream.sink().events.is_empty());
        assert_eq!(stream.last_rendered().unwrap().kind, ElementKind::Info);
    }

    #[test]
    fn test_spinner_guard_marks_transient() {
        let theme = Theme::default()
            .with_disappearing_spinners(true)
            .with_spacing(SpacingRules::new(2));
        let mut stream = Stream::new(theme, RecordingSink::new());
        stream.info("start").unwrap();
        {
            let mut guard = stream.spinner(Spinner::new("Working")).unwrap();
            guard.set_message("Still working").unwrap();
            guard.finish().unwrap();
        }
        assert_eq!(
            stream.last_rendered(),
            Some(RenderedMark::new(ElementKind::Spinner, true))
        );
        stream.success("done").unwrap();

        let events = &stream.sink().events;
        assert!(matches!(events[1], SinkEvent::Blank(2)));
        assert!(matches!(events[2], SinkEvent::SpinnerStarted(_)));
        assert_eq!(events[3], SinkEvent::SpinnerUpdated("Still working".to_string()));
        assert_eq!(events[4], SinkEvent::SpinnerStopped);
        // 2 reduced by one for the vanished spinner
        assert_eq!(events[5], SinkEvent::Blank(1));
    }

    #[test]
    fn test_failed_spinner_stop_keeps_previous_mark() {
        let mut stream = Stream::new(Theme::default(), StuckSpinnerSink);
        stream.info("one").unwrap();
        let guard = stream.spinner(Spinner::new("Working")).unwrap();
        let err = guard.finish().unwrap_err();
        assert!(matches!(err, CadenceError::Render(_)));
        assert_eq!(
            stream.last_rendered(),
            Some(RenderedMark::new(ElementKind::Info, false))
        );
    }

    #[test]
    fn test_dropped_spinner_stops_once() {
        let mut stream = stream();
        {
            let _guard = stream.spinner(Spinner::new("Working").transient(false)).unwrap();
        }
        let stops = stream
            .sink()
            .events
            .iter()
            .filter(|event| **event == SinkEvent::SpinnerStopped)
            .count();
        assert_eq!(stops, 1);
        assert_eq!(
            stream.last_rendered(),
            Some(RenderedMark::new(ElementKind::Spinner, false))
        );
    }

    #[test]
    fn test_paginated_table_without_chooser_fails_before_output() {
        let mut stream = stream();
        let table = (0..5).fold(Table::new(["n"]), |t, i| t.row([i])).page_size(2);
        let err = stream.table(table).unwrap_err();
        assert!(matches!(err, CadenceError::Interactive(_)));
        assert!(stream.sink().events.is_empty());
        assert!(stream.last_rendered().is_none());
    }

    #[test]
    fn test_empty_table_skips_spacing() {
        let mut stream = stream();
        stream.info("one").unwrap();
        stream.sink_mut().clear();
        stream.table(Table::new(["n"])).unwrap();
        assert!(stream.sink().events.is_empty());
        assert_eq!(stream.last_rendered().unwrap().kind, ElementKind::Info);
    }
}
