//! Observer module - notifications from the session to its host
//!
//! The session owns one observer and calls it whenever something the host
//! shows has changed: status text (score, pause, game over) and the board
//! picture.

use std::fmt;

/// Status text pushed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    /// The score changed to this value
    Score(u32),
    Paused,
    /// The round ended with this final score
    GameOver { score: u32 },
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Score(score) => write!(f, "{}", score),
            StatusMessage::Paused => f.write_str("Paused"),
            StatusMessage::GameOver { score } => write!(
                f,
                "GAME OVER: Total score {}! For another round press <Enter>",
                score
            ),
        }
    }
}

/// Receives session notifications
pub trait SessionObserver {
    fn on_status(&mut self, message: StatusMessage);

    /// Something visible changed (plane moved, board scrolled, pause toggled)
    fn on_render_invalidated(&mut self) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn on_status(&mut self, _message: StatusMessage) {}
}

/// Observer that keeps the latest status text and a redraw flag
///
/// This is what a status-bar host needs: show `text()`, redraw when
/// `take_dirty()` says so. Only the latest message is kept, so a long-lived
/// host can reuse one across any number of rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    last: Option<StatusMessage>,
    text: String,
    dirty: bool,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn last(&self) -> Option<StatusMessage> {
        self.last
    }

    /// Return whether a redraw was requested since the last call, and reset it
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl SessionObserver for StatusLine {
    fn on_status(&mut self, message: StatusMessage) {
        use std::fmt::Write as _;

        self.text.clear();
        let _ = write!(self.text, "{}", message);
        self.last = Some(message);
        self.dirty = true;
    }

    fn on_render_invalidated(&mut self) {
        self.dirty = true;
    }
}

impl<O: SessionObserver + ?Sized> SessionObserver for &mut O {
    fn on_status(&mut self, message: StatusMessage) {
        (**self).on_status(message);
    }

    fn on_render_invalidated(&mut self) {
        (**self).on_render_invalidated();
    }
}

/// Status line that also records every message, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingObserver {
    pub(crate) line: StatusLine,
    pub(crate) messages: Vec<StatusMessage>,
}

#[cfg(test)]
impl SessionObserver for RecordingObserver {
    fn on_status(&mut self, message: StatusMessage) {
        self.messages.push(message);
        self.line.on_status(message);
    }

    fn on_render_invalidated(&mut self) {
        self.line.on_render_invalidated();
    }
}
