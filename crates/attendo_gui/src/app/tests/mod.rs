//! App-level tests driven through test channels: commands the UI emits are
//! read from `cmd_rx`, backend replies are applied with `apply_event`.

use super::profile::{ProfileController, ProfileMode};
use super::*;
use crate::backend::{BackendHandle, CoreCmd, CoreEvent};
use attendo_core::models::user::UserRecord;
use crossbeam_channel::{unbounded, Receiver, TryRecvError};

struct TestHarness {
    app: AttendoApp,
    cmd_rx: Receiver<CoreCmd>,
}

fn make_app() -> TestHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (_evt_tx, evt_rx) = unbounded();
    let app = AttendoApp::with_backend(
        BackendHandle::from_test_channels(cmd_tx, evt_rx),
        "Acme Staffing".to_string(),
    );
    assert!(matches!(recv_cmd(&cmd_rx), CoreCmd::LoadSession));
    assert_eq!(app.route(), None);
    TestHarness { app, cmd_rx }
}

fn signed_in_app(uid: &str) -> TestHarness {
    let mut harness = make_app();
    harness.app.apply_event(CoreEvent::SessionLoaded {
        session: Some(SessionIdentity::new(uid)),
    });
    assert_eq!(harness.app.route(), Some(Route::Home));
    harness
}

/// Opens the profile screen and returns the token its subscription uses.
fn open_profile(harness: &mut TestHarness) -> ScreenToken {
    harness.app.navigate(Route::Profile);
    match recv_cmd(&harness.cmd_rx) {
        CoreCmd::SubscribeUser { screen, uid } => {
            assert_eq!(Some(uid.as_str()), harness.app.session.as_ref().map(|s| s.uid()));
            assert_eq!(screen, harness.app.screen.token);
            screen
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

fn controller(app: &AttendoApp) -> &ProfileController {
    match &app.screen.view {
        ScreenView::Profile(profile) => &profile.controller,
        _ => panic!("profile screen is not live"),
    }
}

fn controller_mut(app: &mut AttendoApp) -> &mut ProfileController {
    match &mut app.screen.view {
        ScreenView::Profile(profile) => &mut profile.controller,
        _ => panic!("profile screen is not live"),
    }
}

fn alice() -> UserRecord {
    UserRecord {
        username: "Alice".to_string(),
        email: "a@x.com".to_string(),
        skill: "welding".to_string(),
        last_edited: "Just Created".to_string(),
    }
}

fn recv_cmd(rx: &Receiver<CoreCmd>) -> CoreCmd {
    rx.try_recv().expect("expected outbound command")
}

fn assert_no_cmd(rx: &Receiver<CoreCmd>) {
    match rx.try_recv() {
        Err(TryRecvError::Empty) => {}
        Ok(cmd) => panic!("unexpected command: {:?}", cmd),
        Err(TryRecvError::Disconnected) => panic!("command channel closed"),
    }
}

mod navigation_and_auth;
mod render_smoke;
