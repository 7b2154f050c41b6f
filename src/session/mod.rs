//! Client-held session state and the login-modal coordinator.
//!
//! A [`SessionScope`] is created at app mount and provides the
//! [`SessionHandle`] (is the user logged in, is that still being resolved)
//! and the [`LoginModal`] (is the login prompt open, where to go after
//! login). [`ProtectedView`] mirrors the edge gate for client-side
//! navigations by opening the modal when the session becomes
//! unauthenticated.

pub mod context;
pub mod flag;
pub mod modal;
pub mod protected_view;

pub use context::{ContextError, SessionScope};
pub use flag::{SessionFlag, SessionHandle};
pub use modal::{LoginModal, LoginModalState};
pub use protected_view::{ModalAction, ProtectedView, Render, ViewUpdate};
