use storefront_gate::session::{
    ContextError, LoginModalState, ModalAction, ProtectedView, Render, SessionFlag, SessionScope,
};

#[test]
fn login_flow_resumes_original_path() {
    let scope = SessionScope::mount();
    let session = scope.session().expect("session provided at mount");
    let modal = scope.login_modal().expect("modal provided at mount");
    let mut view = ProtectedView::new(&scope, "/checkout/cart").expect("view should mount");

    assert_eq!(view.observe(session.current()).render, Render::Loading);

    session.set_authenticated(false);
    let update = view.observe(session.current());
    assert_eq!(update.render, Render::Nothing);
    assert_eq!(
        modal.snapshot(),
        LoginModalState {
            is_open: true,
            return_path: Some("/checkout/cart".to_string()),
        }
    );

    session.begin_loading();
    assert_eq!(view.observe(session.current()).render, Render::Loading);
    session.set_authenticated(true);
    let next = modal.complete_login();
    assert_eq!(next, "/checkout/cart");

    let update = view.observe(session.current());
    assert_eq!(update.render, Render::Children);
    assert_eq!(update.action, Some(ModalAction::Close));
    assert_eq!(modal.snapshot(), LoginModalState::default());
}

#[test]
fn logout_reopens_modal_for_current_view() {
    let scope = SessionScope::mount();
    let session = scope.session().unwrap();
    let modal = scope.login_modal().unwrap();
    let mut view = ProtectedView::new(&scope, "/account").unwrap();

    session.set_authenticated(true);
    assert_eq!(view.observe(session.current()).action, None);

    session.logout();
    assert_eq!(session.current(), SessionFlag::SIGNED_OUT);
    assert_eq!(
        view.observe(session.current()).action,
        Some(ModalAction::Open("/account".to_string()))
    );
    assert!(modal.is_open());
}

#[test]
fn views_outside_a_mounted_scope_fail_fast() {
    let scope = SessionScope::new();
    assert!(matches!(
        ProtectedView::new(&scope, "/account"),
        Err(ContextError::NotProvided(_))
    ));
}
