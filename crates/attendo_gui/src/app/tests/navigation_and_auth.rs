//! Startup routing, registration, login and sign-out.

use super::*;

#[test]
fn startup_without_session_shows_register() {
    let mut harness = make_app();
    harness
        .app
        .apply_event(CoreEvent::SessionLoaded { session: None });
    assert_eq!(harness.app.route(), Some(Route::Register));
    assert!(harness.app.session.is_none());
}

#[test]
fn startup_with_session_shows_home() {
    let harness = signed_in_app("uid-1");
    assert_eq!(harness.app.company_name(), "Acme Staffing");
    assert_eq!(
        harness.app.session.as_ref().map(|s| s.uid()),
        Some("uid-1")
    );
}

#[test]
fn late_session_reply_does_not_move_a_live_screen() {
    let mut harness = make_app();
    harness.app.navigate(Route::Login);
    harness.app.apply_event(CoreEvent::SessionLoaded {
        session: Some(SessionIdentity::new("uid-1")),
    });
    assert_eq!(harness.app.route(), Some(Route::Login));
}

#[test]
fn register_requires_every_field() {
    let mut harness = make_app();
    harness.app.navigate(Route::Register);
    if let ScreenView::Register(form) = &mut harness.app.screen.view {
        form.username = "Alice".to_string();
        form.email = "   ".to_string();
        form.password = "pw123456".to_string();
    }
    harness.app.register_submit();
    assert_no_cmd(&harness.cmd_rx);
    assert_eq!(harness.app.toast_texts(), vec!["Please fill all the fields"]);
}

fn submit_registration(harness: &mut TestHarness) -> ScreenToken {
    harness.app.navigate(Route::Register);
    if let ScreenView::Register(form) = &mut harness.app.screen.view {
        form.username = " Alice ".to_string();
        form.email = "a@x.com".to_string();
        form.password = "pw123456".to_string();
    }
    harness.app.register_submit();
    match recv_cmd(&harness.cmd_rx) {
        CoreCmd::Register {
            screen,
            username,
            email,
            password,
        } => {
            assert_eq!(username, "Alice");
            assert_eq!(email, "a@x.com");
            assert_eq!(password, "pw123456");
            screen
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn registration_in_flight_blocks_resubmit_then_lands_on_home() {
    let mut harness = make_app();
    let screen = submit_registration(&mut harness);

    harness.app.register_submit();
    assert_no_cmd(&harness.cmd_rx);

    harness.app.apply_event(CoreEvent::Registered {
        screen,
        session: SessionIdentity::new("uid-9"),
    });
    assert_eq!(harness.app.route(), Some(Route::Home));
    assert_eq!(harness.app.toast_texts(), vec!["Registration Successful"]);
    assert_eq!(
        harness.app.session.as_ref().map(|s| s.uid()),
        Some("uid-9")
    );
}

#[test]
fn registration_failure_reports_reason_and_allows_retry() {
    let mut harness = make_app();
    let screen = submit_registration(&mut harness);

    harness.app.apply_event(CoreEvent::RegistrationFailed {
        screen,
        message: "The email address is already in use by another account.".to_string(),
    });
    assert_eq!(harness.app.route(), Some(Route::Register));
    assert_eq!(
        harness.app.toast_texts(),
        vec!["Registration Failed: The email address is already in use by another account."]
    );

    harness.app.register_submit();
    assert!(matches!(recv_cmd(&harness.cmd_rx), CoreCmd::Register { .. }));
}

#[test]
fn record_write_failure_stays_on_register() {
    let mut harness = make_app();
    let screen = submit_registration(&mut harness);

    harness.app.apply_event(CoreEvent::RegistrationRecordFailed {
        screen,
        session: SessionIdentity::new("uid-9"),
        message: "storage offline".to_string(),
    });
    assert_eq!(harness.app.route(), Some(Route::Register));
    assert_eq!(
        harness.app.toast_texts(),
        vec!["Registration Failed to Save Data"]
    );
}

#[test]
fn login_requires_email_and_password() {
    let mut harness = make_app();
    harness.app.navigate(Route::Login);
    harness.app.login_submit();
    assert_no_cmd(&harness.cmd_rx);
    assert_eq!(
        harness.app.toast_texts(),
        vec!["Please enter email and password"]
    );
}

#[test]
fn login_failure_then_success() {
    let mut harness = make_app();
    harness.app.navigate(Route::Login);
    if let ScreenView::Login(form) = &mut harness.app.screen.view {
        form.email = " a@x.com ".to_string();
        form.password = "wrong".to_string();
    }
    harness.app.login_submit();
    let screen = match recv_cmd(&harness.cmd_rx) {
        CoreCmd::SignIn {
            screen,
            email,
            password,
        } => {
            assert_eq!(email, "a@x.com");
            assert_eq!(password, "wrong");
            screen
        }
        other => panic!("unexpected command: {:?}", other),
    };

    harness.app.apply_event(CoreEvent::SignInFailed {
        screen,
        message: "The email or password is incorrect.".to_string(),
    });
    assert_eq!(harness.app.route(), Some(Route::Login));
    assert_eq!(
        harness.app.toast_texts(),
        vec!["Login Failed: The email or password is incorrect."]
    );

    harness.app.login_submit();
    let _ = recv_cmd(&harness.cmd_rx);
    harness.app.apply_event(CoreEvent::SignedIn {
        screen,
        session: SessionIdentity::new("uid-1"),
    });
    assert_eq!(harness.app.route(), Some(Route::Home));
}

#[test]
fn sign_out_clears_session_and_shows_login() {
    let mut harness = signed_in_app("uid-1");
    harness.app.sign_out();
    assert!(matches!(recv_cmd(&harness.cmd_rx), CoreCmd::SignOut));
    assert_eq!(harness.app.route(), Some(Route::Login));
    assert!(harness.app.session.is_none());
}

#[test]
fn profile_without_session_redirects_to_login() {
    let mut harness = make_app();
    harness
        .app
        .apply_event(CoreEvent::SessionLoaded { session: None });
    harness.app.open_profile();
    assert_no_cmd(&harness.cmd_rx);
    assert_eq!(harness.app.route(), Some(Route::Login));
    assert_eq!(harness.app.toast_texts(), vec!["Please log in to continue"]);
}

#[test]
fn closed_backend_surfaces_a_notice() {
    let TestHarness { mut app, cmd_rx } = make_app();
    drop(cmd_rx);
    app.apply_event(CoreEvent::SessionLoaded { session: None });
    if let ScreenView::Register(form) = &mut app.screen.view {
        form.username = "Alice".to_string();
        form.email = "a@x.com".to_string();
        form.password = "pw123456".to_string();
    }
    app.register_submit();
    assert_eq!(
        app.toast_texts(),
        vec!["Service unavailable; please restart the app"]
    );
    match &app.screen.view {
        ScreenView::Register(form) => assert!(!form.in_flight),
        _ => panic!("register screen is not live"),
    }
}

#[test]
fn repeated_notice_is_collapsed() {
    let mut harness = make_app();
    harness.app.navigate(Route::Login);
    harness.app.login_submit();
    harness.app.login_submit();
    assert_eq!(
        harness.app.toast_texts(),
        vec!["Please enter email and password"]
    );
}
