//! Debug-line sink handed to the store and the loader.
//!
//! Components never log through the process-wide subscriber for their debug
//! chatter. They hold a [`LogSink`] and emit inside it, so switching debug
//! output on or off is a construction-time choice of the caller.

use std::io;

use tracing::Dispatch;
use tracing::level_filters::LevelFilter;

/// Optional, leveled debug-message sink.
///
/// The default sink discards everything. Cloning is cheap (the dispatcher is
/// reference counted).
#[derive(Clone)]
pub struct LogSink {
    dispatch: Dispatch,
    enabled: bool,
}

impl LogSink {
    /// Sink that drops every event.
    pub fn disabled() -> Self {
        Self {
            dispatch: Dispatch::none(),
            enabled: false,
        }
    }

    /// Single-line DEBUG-level output on stdout, with the emitting module and
    /// line number in front of each message.
    pub fn debug() -> Self {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::DEBUG)
            .with_writer(io::stdout)
            .with_target(true)
            .with_line_number(true)
            .without_time()
            .finish();
        Self::from_dispatch(Dispatch::new(subscriber))
    }

    /// Route events to an arbitrary subscriber (tests, embedding).
    pub fn from_dispatch(dispatch: Dispatch) -> Self {
        Self {
            dispatch,
            enabled: true,
        }
    }

    /// `debug()` when `enabled`, otherwise `disabled()`.
    pub fn from_flag(enabled: bool) -> Self {
        if enabled { Self::debug() } else { Self::disabled() }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Run `f` with this sink as the current dispatcher.
    ///
    /// Any `tracing` event emitted inside `f` goes to this sink only.
    pub fn emit<R>(&self, f: impl FnOnce() -> R) -> R {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::disabled()
    }
}

impl core::fmt::Debug for LogSink {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LogSink")
            .field("enabled", &self.enabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sink_is_disabled() {
        assert!(!LogSink::default().is_enabled());
    }

    #[test]
    fn emit_returns_closure_value_regardless_of_sink() {
        let off = LogSink::disabled();
        let on = LogSink::debug();
        assert_eq!(off.emit(|| 41 + 1), 42);
        assert_eq!(on.emit(|| 41 + 1), 42);
    }

    #[test]
    fn from_flag_selects_sink() {
        assert!(LogSink::from_flag(true).is_enabled());
        assert!(!LogSink::from_flag(false).is_enabled());
    }
}
