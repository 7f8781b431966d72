use crate::models::Identity;
use crate::session::Session;
use crate::shell::MenuItem;

#[test]
fn test_new_session_is_anonymous() {
    let session = Session::anonymous();
    assert!(!session.is_authenticated());
    assert_eq!(
        MenuItem::for_session(&session),
        &[MenuItem::Home, MenuItem::Login, MenuItem::Register]
    );
}

#[test]
fn test_sign_in_switches_menu() {
    let mut session = Session::anonymous();
    session.sign_in(Identity::new("alice", Some("T".to_string())));

    assert!(session.is_authenticated());
    let menu = MenuItem::for_session(&session);
    assert!(menu.contains(&MenuItem::Add));
    assert!(menu.contains(&MenuItem::Logout));
    assert!(!menu.contains(&MenuItem::Login));
}

#[test]
fn test_sign_out_returns_identity_and_clears() {
    let mut session = Session::anonymous();
    session.sign_in(Identity::new("alice", Some("T".to_string())));

    let identity = session.sign_out().unwrap();
    assert_eq!(identity.username, "alice");
    assert_eq!(identity.bearer(), Some("T"));
    assert!(session.identity().is_none());
    assert!(session.sign_out().is_none());
}

#[test]
fn test_identity_debug_redacts_token() {
    let identity = Identity::new("alice", Some("secret-token".to_string())).with_user_id(4);
    let debug = format!("{identity:?}");
    assert!(!debug.contains("secret-token"));
    assert!(debug.contains("alice"));
    assert!(debug.contains('4'));
}
