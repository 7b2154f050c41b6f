use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

/// Where [`LoginModal::complete_login`] sends the user when no return path
/// was recorded.
pub const DEFAULT_RETURN_PATH: &str = "/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginModalState {
    pub is_open: bool,
    pub return_path: Option<String>,
}

/// Shared handle to the login prompt state. Clones refer to the same modal.
#[derive(Clone, Debug, Default)]
pub struct LoginModal {
    state: Arc<Mutex<LoginModalState>>,
}

impl LoginModal {
    pub fn new() -> Self {
        Self::default()
    }

    // The state is two plain fields and every update rewrites both, so a
    // poisoned lock still holds a consistent value.
    fn lock(&self) -> MutexGuard<'_, LoginModalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Opens the prompt. If it is already open, the latest return path
    /// replaces the previous one.
    pub fn open_modal(&self, return_path: Option<String>) {
        debug!(return_path = ?return_path, "login modal opened");
        *self.lock() = LoginModalState {
            is_open: true,
            return_path,
        };
    }

    /// Closes the prompt and forgets the return path, whatever the current state.
    pub fn close_modal(&self) {
        debug!("login modal closed");
        *self.lock() = LoginModalState::default();
    }

    /// Called after a successful login: closes the prompt and returns the
    /// path the user originally wanted.
    pub fn complete_login(&self) -> String {
        let previous = std::mem::take(&mut *self.lock());
        previous
            .return_path
            .unwrap_or_else(|| DEFAULT_RETURN_PATH.to_string())
    }

    pub fn snapshot(&self) -> LoginModalState {
        self.lock().clone()
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_open
    }
}
