//! Spinner payload. Spinners are deferred: the stream never renders them
//! directly, see [`crate::Stream::spinner`].

use crate::sink::SpinnerBlock;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner {
    pub message: String,
    /// `None` defers to `theme.disappearing_spinners`
    pub transient: Option<bool>,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            transient: None,
        }
    }

    pub fn transient(mut self, transient: bool) -> Self {
        self.transient = Some(transient);
        self
    }

    pub fn is_transient(&self, theme: &Theme) -> bool {
        self.transient.unwrap_or(theme.disappearing_spinners)
    }

    pub fn block(&self, theme: &Theme) -> SpinnerBlock {
        SpinnerBlock {
            message: self.message.clone(),
            frames: theme.spinner_frames.clone(),
            interval_ms: theme.spinner_interval_ms,
            style: theme.typography.info_style.clone(),
            transient: self.is_transient(theme),
        }
    }
}
