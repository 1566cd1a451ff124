//! Headless frame rendering for every screen.

use super::*;

fn run_frame(app: &mut AttendoApp, ctx: &egui::Context) {
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        app.ensure_style(ctx);
        match app.route() {
            None => app.render_loading(ctx),
            Some(Route::Register) => app.render_register_panel(ctx),
            Some(Route::Login) => app.render_login_panel(ctx),
            Some(Route::Home) => app.render_home_panel(ctx),
            Some(Route::Profile) => app.render_profile_panel(ctx),
        }
        app.render_toasts(ctx);
    });
}

#[test]
fn every_screen_renders_without_emitting_commands() {
    let ctx = egui::Context::default();
    let mut harness = make_app();
    run_frame(&mut harness.app, &ctx);
    assert!(harness.app.style_applied);

    for route in [Route::Register, Route::Login, Route::Home] {
        harness.app.navigate(route);
        harness.app.push_toast("hello");
        run_frame(&mut harness.app, &ctx);
        assert_eq!(harness.app.route(), Some(route));
    }
    assert_no_cmd(&harness.cmd_rx);
}

#[test]
fn profile_renders_in_both_modes() {
    let ctx = egui::Context::default();
    let mut harness = signed_in_app("uid-1");
    let screen = open_profile(&mut harness);
    harness.app.apply_event(CoreEvent::UserRecordChanged {
        screen,
        record: Some(alice()),
    });

    run_frame(&mut harness.app, &ctx);
    assert_eq!(controller(&harness.app).mode(), ProfileMode::Viewing);

    harness.app.profile_enter_edit();
    run_frame(&mut harness.app, &ctx);
    assert_eq!(controller(&harness.app).mode(), ProfileMode::Editing);
    assert_eq!(harness.app.route(), Some(Route::Profile));
    assert_no_cmd(&harness.cmd_rx);
}

#[test]
fn expired_toasts_are_dropped() {
    let mut harness = make_app();
    harness.app.push_toast("first");
    harness.app.push_toast("second");
    harness.app.expire_toasts(Instant::now());
    assert_eq!(harness.app.toast_texts(), vec!["first", "second"]);
    harness
        .app
        .expire_toasts(Instant::now() + TOAST_TTL + Duration::from_millis(1));
    assert!(harness.app.toast_texts().is_empty());
}

#[test]
fn toast_queue_is_bounded() {
    let mut harness = make_app();
    for idx in 0..(TOAST_LIMIT + 3) {
        harness.app.push_toast(format!("notice {}", idx));
    }
    let texts = harness.app.toast_texts();
    assert_eq!(texts.len(), TOAST_LIMIT);
    assert_eq!(texts.last().copied(), Some("notice 6"));
}
