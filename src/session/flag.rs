use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

/// Authentication status as seen by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionFlag {
    pub is_authenticated: bool,
    /// True while the authentication collaborator is still resolving.
    pub loading: bool,
}

impl SessionFlag {
    /// State at app mount: nothing known yet.
    pub const MOUNTING: SessionFlag = SessionFlag {
        is_authenticated: false,
        loading: true,
    };

    pub const SIGNED_OUT: SessionFlag = SessionFlag {
        is_authenticated: false,
        loading: false,
    };

    pub const SIGNED_IN: SessionFlag = SessionFlag {
        is_authenticated: true,
        loading: false,
    };
}

/// Writable source of the [`SessionFlag`].
///
/// Only the authentication collaborator should call the setters, on login,
/// logout, or refresh completion. Everyone else reads via [`current`] or
/// [`subscribe`].
///
/// [`current`]: SessionHandle::current
/// [`subscribe`]: SessionHandle::subscribe
#[derive(Clone, Debug)]
pub struct SessionHandle {
    sender: Arc<watch::Sender<SessionFlag>>,
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHandle {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(SessionFlag::MOUNTING);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn current(&self) -> SessionFlag {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionFlag> {
        self.sender.subscribe()
    }

    /// A login, logout or refresh request has started.
    pub fn begin_loading(&self) {
        let is_authenticated = self.current().is_authenticated;
        self.set(SessionFlag {
            is_authenticated,
            loading: true,
        });
    }

    /// The collaborator finished resolving the session.
    pub fn set_authenticated(&self, is_authenticated: bool) {
        self.set(SessionFlag {
            is_authenticated,
            loading: false,
        });
    }

    /// Clears the flag on logout or app teardown.
    pub fn logout(&self) {
        self.set(SessionFlag::SIGNED_OUT);
    }

    /// Subscribers are only notified when the value actually changes.
    fn set(&self, next: SessionFlag) {
        let changed = self.sender.send_if_modified(|flag| {
            if *flag == next {
                false
            } else {
                *flag = next;
                true
            }
        });
        if changed {
            debug!(
                is_authenticated = next.is_authenticated,
                loading = next.loading,
                "session flag updated"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_handle_starts_loading() {
        let handle = SessionHandle::new();
        assert_eq!(handle.current(), SessionFlag::MOUNTING);
    }

    #[test]
    fn test_begin_loading_keeps_authentication() {
        let handle = SessionHandle::new();
        handle.set_authenticated(true);
        handle.begin_loading();
        assert_eq!(
            handle.current(),
            SessionFlag {
                is_authenticated: true,
                loading: true
            }
        );
        handle.logout();
        assert_eq!(handle.current(), SessionFlag::SIGNED_OUT);
    }

    #[tokio::test]
    async fn test_subscribers_skip_unchanged_values() {
        let handle = SessionHandle::new();
        let mut rx = handle.subscribe();

        handle.set_authenticated(true);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), SessionFlag::SIGNED_IN);

        handle.set_authenticated(true);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_clones_share_state() {
        let handle = SessionHandle::new();
        let other = handle.clone();
        other.set_authenticated(true);
        assert!(handle.current().is_authenticated);
    }
}
