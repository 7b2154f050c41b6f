use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use tracing::{error, info};

use super::flag::SessionHandle;
use super::modal::LoginModal;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContextError {
    /// A lookup for something that was never provided to this scope. This is
    /// a wiring bug in the caller, not a runtime condition to recover from.
    #[error("{0} was not provided in this session scope")]
    NotProvided(&'static str),
}

/// Explicit container for client-wide state, created at app mount and
/// passed to whatever needs it.
#[derive(Default)]
pub struct SessionScope {
    entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl SessionScope {
    /// An empty scope. Lookups fail until values are provided.
    pub fn new() -> Self {
        Self::default()
    }

    /// A scope provisioned with a fresh [`SessionHandle`] and [`LoginModal`].
    pub fn mount() -> Self {
        let mut scope = Self::new();
        scope.provide(SessionHandle::new());
        scope.provide(LoginModal::new());
        info!("session scope mounted");
        scope
    }

    /// Makes `value` available to lookups, replacing any previous value of
    /// the same type.
    pub fn provide<T: Clone + Send + Sync + 'static>(&mut self, value: T) {
        self.entries.insert(TypeId::of::<T>(), Box::new(value));
    }

    pub fn use_context<T: Clone + Send + Sync + 'static>(&self) -> Result<T, ContextError> {
        match self.get::<T>() {
            Some(value) => Ok(value.clone()),
            None => {
                error!(
                    context = type_name::<T>(),
                    "context lookup outside its provider"
                );
                Err(ContextError::NotProvided(type_name::<T>()))
            }
        }
    }

    pub fn login_modal(&self) -> Result<LoginModal, ContextError> {
        self.use_context::<LoginModal>()
    }

    pub fn session(&self) -> Result<SessionHandle, ContextError> {
        self.use_context::<SessionHandle>()
    }

    /// Tears the scope down: signs the session out, closes the modal, and
    /// drops every provided value.
    pub fn unmount(self) {
        if let Some(session) = self.get::<SessionHandle>() {
            session.logout();
        }
        if let Some(modal) = self.get::<LoginModal>() {
            modal.close_modal();
        }
        info!("session scope unmounted");
    }

    /// Plain lookup without the misuse logging of [`use_context`].
    ///
    /// [`use_context`]: SessionScope::use_context
    fn get<T: 'static>(&self) -> Option<&T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionFlag;

    #[test]
    fn test_mounted_scope_provides_session_and_modal() {
        let scope = SessionScope::mount();
        assert!(scope.login_modal().is_ok());
        assert_eq!(scope.session().unwrap().current(), SessionFlag::MOUNTING);
    }

    #[test]
    fn test_lookup_outside_provider_fails() {
        let scope = SessionScope::new();
        let err = scope.login_modal().unwrap_err();
        assert!(matches!(err, ContextError::NotProvided(name) if name.ends_with("LoginModal")));
        assert!(scope.session().is_err());
    }

    #[test]
    fn test_lookups_share_the_provided_instance() {
        let scope = SessionScope::mount();
        scope
            .login_modal()
            .unwrap()
            .open_modal(Some("/account".to_string()));
        assert!(scope.login_modal().unwrap().is_open());
    }

    #[test]
    fn test_unmount_of_unprovisioned_scope_is_quiet() {
        let mut scope = SessionScope::new();
        assert!(scope.get::<SessionHandle>().is_none());
        assert!(scope.get::<LoginModal>().is_none());

        let modal = LoginModal::new();
        modal.open_modal(None);
        scope.provide(modal.clone());
        assert!(scope.get::<SessionHandle>().is_none());

        scope.unmount();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_unmount_clears_session_and_modal() {
        let scope = SessionScope::mount();
        let session = scope.session().unwrap();
        let modal = scope.login_modal().unwrap();
        session.set_authenticated(true);
        modal.open_modal(None);

        scope.unmount();

        assert_eq!(session.current(), SessionFlag::SIGNED_OUT);
        assert!(!modal.is_open());
    }
}
