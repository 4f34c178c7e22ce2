//! Per-interaction state for an active pair selection.
//!
//! After a navigation the host shows two simultaneous selections (the
//! target tag's content and its partner's). That multi-selection lives
//! until the primary cursor leaves the target tag, at which point the host
//! collapses back to a single cursor. The session is the explicit owner of
//! that interaction: the host creates one per applied [`Navigation`], feeds
//! it subsequent cursor offsets, and drops it once it reports collapse.

use tracing::debug;

use crate::tags::Navigation;

/// Whether the pair selection should stay up or collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The primary cursor is still within the target tag; keep both
    /// selections.
    Active,
    /// The primary cursor left the target tag; collapse to a single cursor
    /// and end the session.
    Collapsed,
}

/// Watches the primary cursor of one pair selection.
#[derive(Debug, Clone)]
pub struct NavigationSession {
    brace_start: usize,
    brace_end: usize,
    slack: usize,
}

impl NavigationSession {
    /// Start a session for an applied navigation, with no slack.
    pub fn new(navigation: &Navigation) -> Self {
        Self::with_slack(navigation, 0)
    }

    /// Start a session that tolerates the cursor drifting up to `slack`
    /// bytes beyond the target tag's braces before collapsing.
    pub fn with_slack(navigation: &Navigation, slack: usize) -> Self {
        Self {
            brace_start: navigation.target.brace_start,
            brace_end: navigation.target.brace_end,
            slack,
        }
    }

    /// Report a movement of the primary cursor.
    ///
    /// The watched region is brace-inclusive on both sides: the cursor may
    /// sit on either brace of the target tag without collapsing.
    pub fn on_cursor_moved(&self, cursor_offset: usize) -> SessionStatus {
        let lower = self.brace_start.saturating_sub(self.slack);
        let upper = self.brace_end + self.slack;

        if cursor_offset < lower || cursor_offset > upper {
            debug!(cursor_offset, "primary cursor left the target tag; collapsing");
            SessionStatus::Collapsed
        } else {
            SessionStatus::Active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{navigate, Direction};

    fn itemize_session(slack: usize) -> NavigationSession {
        // Begin tag braces at 6 and 14.
        let nav = navigate(Direction::Forward, 0, r"\begin{itemize}\item x\end{itemize}")
            .unwrap()
            .unwrap();
        NavigationSession::with_slack(&nav, slack)
    }

    #[test]
    fn cursor_within_braces_keeps_session_active() {
        let session = itemize_session(0);
        assert_eq!(session.on_cursor_moved(6), SessionStatus::Active);
        assert_eq!(session.on_cursor_moved(10), SessionStatus::Active);
        assert_eq!(session.on_cursor_moved(14), SessionStatus::Active);
    }

    #[test]
    fn cursor_past_either_brace_collapses() {
        let session = itemize_session(0);
        assert_eq!(session.on_cursor_moved(5), SessionStatus::Collapsed);
        assert_eq!(session.on_cursor_moved(15), SessionStatus::Collapsed);
        assert_eq!(session.on_cursor_moved(0), SessionStatus::Collapsed);
    }

    #[test]
    fn slack_widens_the_watched_region() {
        let session = itemize_session(2);
        assert_eq!(session.on_cursor_moved(4), SessionStatus::Active);
        assert_eq!(session.on_cursor_moved(16), SessionStatus::Active);
        assert_eq!(session.on_cursor_moved(3), SessionStatus::Collapsed);
        assert_eq!(session.on_cursor_moved(17), SessionStatus::Collapsed);
    }

    #[test]
    fn slack_does_not_underflow_at_document_start() {
        // Tag braces at 6 and 8; slack larger than brace_start.
        let nav = navigate(Direction::Forward, 0, r"\begin{a}").unwrap().unwrap();
        let session = NavigationSession::with_slack(&nav, 100);
        assert_eq!(session.on_cursor_moved(0), SessionStatus::Active);
    }
}
