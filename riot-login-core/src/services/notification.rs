//! Transient status/error message widget state

use std::time::{Duration, Instant};

/// How long info and success notices stay up.
pub const DEFAULT_AUTO_DISMISS: Duration = Duration::from_secs(5);

/// 通知类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    /// Errors stay until the user closes them.
    pub fn auto_dismisses(self) -> bool {
        !matches!(self, Self::Error)
    }
}

/// A message for the notification area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }
}

/// Hidden/visible state machine of the notification area.
///
/// Time is passed in by the caller so the UI loop decides when to tick.
#[derive(Debug)]
pub struct Notifier {
    current: Option<(Notice, Instant)>,
    auto_dismiss: Duration,
}

impl Notifier {
    pub fn new(auto_dismiss: Duration) -> Self {
        Self {
            current: None,
            auto_dismiss,
        }
    }

    /// Show `notice`, replacing whatever is visible and restarting the timer.
    pub fn show(&mut self, notice: Notice, now: Instant) {
        match notice.level {
            NoticeLevel::Error => log::warn!("notice: {}", notice.message),
            NoticeLevel::Info | NoticeLevel::Success => log::info!("notice: {}", notice.message),
        }
        self.current = Some((notice, now));
    }

    /// Explicit close action.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Hide an auto-dismissing notice whose delay has passed.
    ///
    /// Returns `true` when the visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self.current.as_ref().is_some_and(|(notice, shown_at)| {
            notice.level.auto_dismisses()
                && now.saturating_duration_since(*shown_at) >= self.auto_dismiss
        });
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(notice, _)| notice)
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_DISMISS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_hides_after_delay() {
        let start = Instant::now();
        let mut notifier = Notifier::default();
        notifier.show(Notice::success("Account saved successfully"), start);

        assert!(!notifier.tick(start + Duration::from_secs(4)));
        assert!(notifier.is_visible());

        assert!(notifier.tick(start + DEFAULT_AUTO_DISMISS));
        assert!(!notifier.is_visible());
    }

    #[test]
    fn error_requires_explicit_dismissal() {
        let start = Instant::now();
        let mut notifier = Notifier::default();
        notifier.show(Notice::error("Please fill in all fields"), start);

        assert!(!notifier.tick(start + Duration::from_secs(60)));
        assert!(notifier.is_visible());

        notifier.dismiss();
        assert!(notifier.current().is_none());
    }

    #[test]
    fn newer_notice_restarts_timer() {
        let start = Instant::now();
        let mut notifier = Notifier::new(Duration::from_secs(5));
        notifier.show(Notice::info("Logging in..."), start);
        notifier.show(
            Notice::success("Login successful!"),
            start + Duration::from_secs(4),
        );

        assert!(!notifier.tick(start + Duration::from_secs(6)));
        assert_eq!(
            notifier.current().map(|n| n.message.as_str()),
            Some("Login successful!")
        );
    }

    #[test]
    fn error_replacing_info_is_not_auto_hidden() {
        let start = Instant::now();
        let mut notifier = Notifier::default();
        notifier.show(Notice::info("Logging in..."), start);
        notifier.show(Notice::error("Login failed: timeout"), start);

        assert!(!notifier.tick(start + Duration::from_secs(10)));
        assert!(notifier.is_visible());
    }
}
