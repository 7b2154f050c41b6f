//! Client-side counterpart of the edge gate.
//!
//! Client navigations never reach the gate, so a protected view watches the
//! session flag itself and opens the login modal when the user turns out to
//! be signed out. Reactions fire on transitions only: observing the same
//! settled state twice does nothing the second time.

use tokio::sync::watch;
use tracing::debug;

use super::context::{ContextError, SessionScope};
use super::flag::SessionFlag;
use super::modal::LoginModal;

/// What the view shows for the current session flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Session still resolving.
    Loading,
    /// Signed out: nothing is shown while the login modal is up.
    Nothing,
    Children,
}

/// Side effect the view applied to the login modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    Open(String),
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewUpdate {
    pub render: Render,
    pub action: Option<ModalAction>,
}

pub struct ProtectedView {
    modal: LoginModal,
    current_path: String,
    /// Authentication value of the last observation with `loading == false`.
    last_settled: Option<bool>,
}

impl ProtectedView {
    /// Fails when the scope has no login modal, so a missing provider shows
    /// up at construction instead of as a prompt that never opens.
    pub fn new(scope: &SessionScope, current_path: impl Into<String>) -> Result<Self, ContextError> {
        Ok(Self::with_modal(scope.login_modal()?, current_path))
    }

    pub fn with_modal(modal: LoginModal, current_path: impl Into<String>) -> Self {
        Self {
            modal,
            current_path: current_path.into(),
            last_settled: None,
        }
    }

    /// Feeds one session flag observation to the view.
    pub fn observe(&mut self, flag: SessionFlag) -> ViewUpdate {
        if flag.loading {
            return ViewUpdate {
                render: Render::Loading,
                action: None,
            };
        }

        let previous = self.last_settled.replace(flag.is_authenticated);
        let action = Self::transition(previous, flag.is_authenticated, &self.current_path);
        match &action {
            Some(ModalAction::Open(path)) => self.modal.open_modal(Some(path.clone())),
            Some(ModalAction::Close) => self.modal.close_modal(),
            None => {}
        }
        if let Some(action) = &action {
            debug!(path = %self.current_path, action = ?action, "protected view reacted");
        }

        let render = if flag.is_authenticated {
            Render::Children
        } else {
            Render::Nothing
        };
        ViewUpdate { render, action }
    }

    /// Edge detection: open on entering the signed-out state (the first
    /// settled observation counts), close once on leaving it.
    fn transition(previous: Option<bool>, authenticated: bool, path: &str) -> Option<ModalAction> {
        match (previous, authenticated) {
            (Some(false), false) => None,
            (_, false) => Some(ModalAction::Open(path.to_string())),
            (Some(false), true) => Some(ModalAction::Close),
            (_, true) => None,
        }
    }

    /// Drives the view from a session subscription, handing each render to
    /// `on_render`, until the session handle is dropped.
    pub async fn watch<F>(mut self, mut session: watch::Receiver<SessionFlag>, mut on_render: F)
    where
        F: FnMut(ViewUpdate),
    {
        loop {
            let flag = *session.borrow_and_update();
            on_render(self.observe(flag));
            if session.changed().await.is_err() {
                break;
            }
        }
    }
}
