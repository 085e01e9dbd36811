//! State machine tests.

use super::*;
use crate::duration::ParseError;
use crate::notify::testing::RecordingNotifier;
use std::time::Instant;

fn app_with(options: AppOptions) -> (App, Arc<RecordingNotifier>) {
    let sink = Arc::new(RecordingNotifier::default());
    let (app, _) = App::new(options, sink.clone());
    (app, sink)
}

fn fresh() -> (App, Arc<RecordingNotifier>) {
    app_with(AppOptions::default())
}

fn press(app: &mut App, spec: &str) -> Option<Cmd> {
    let key = KeyPress::parse(spec).unwrap();
    app.handle(Event::Key(key))
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, &c.to_string());
    }
}

/// Landing → DurationInput → Running with `text` entered.
fn start_with(app: &mut App, text: &str) {
    press(app, "enter");
    assert_eq!(app.screen(), Screen::DurationInput);
    type_str(app, text);
    press(app, "enter");
}

/// Delivers a tick stamped `elapsed` after the last one.
fn tick(app: &mut App, elapsed: Duration) -> Option<Cmd> {
    let msg = TickMsg {
        id: app.timer().id(),
        tag: app.timer().tag(),
        at: Instant::now() + elapsed,
    };
    app.handle(Event::Tick(msg))
}

/// Delivers the tick that brings the countdown to zero.
fn expire(app: &mut App) -> Option<Cmd> {
    let configured = app.countdown().configured();
    let cmd = tick(app, configured + Duration::from_millis(1));
    assert!(app.countdown().expired());
    cmd
}

fn plain(s: &str) -> String {
    String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
}

#[test]
fn test_starts_on_landing() {
    let (app, _) = fresh();
    assert_eq!(app.screen(), Screen::Landing);
    assert_eq!(app.landing_cursor(), 0);
    assert!(!app.quitting());
}

#[test]
fn test_landing_cursor_clamps() {
    let (mut app, _) = fresh();
    press(&mut app, "up");
    assert_eq!(app.landing_cursor(), 0);
    press(&mut app, "j");
    press(&mut app, "down");
    assert_eq!(app.landing_cursor(), 1);
    press(&mut app, "k");
    assert_eq!(app.landing_cursor(), 0);
}

#[test]
fn test_landing_quit_option_quits() {
    let (mut app, _) = fresh();
    press(&mut app, "down");
    assert!(press(&mut app, "enter").is_some());
    assert!(app.quitting());
}

#[test]
fn test_valid_duration_starts_countdown() {
    let (mut app, _) = fresh();
    start_with(&mut app, "5m");

    assert_eq!(app.screen(), Screen::Running);
    assert_eq!(app.countdown().configured(), Duration::from_secs(300));
    assert_eq!(app.countdown().remaining(), Duration::from_secs(300));
    assert!(app.countdown().running());
    assert_eq!(app.last_duration_text(), "5m");
    assert!(app.error().is_none());
    assert!(!app.keymap().start.enabled());
    assert!(app.keymap().stop.enabled());
}

#[test]
fn test_malformed_duration_stays_on_input() {
    let (mut app, _) = fresh();
    start_with(&mut app, "abc");

    assert_eq!(app.screen(), Screen::DurationInput);
    assert_eq!(app.error(), Some(ParseError::Malformed.to_string().as_str()));
    assert_eq!(app.input_value(), "abc");
}

#[test]
fn test_zero_duration_rejected() {
    let (mut app, _) = fresh();
    start_with(&mut app, "0s");

    assert_eq!(app.screen(), Screen::DurationInput);
    assert_eq!(app.error(), Some("Duration must be greater than 0"));
}

#[test]
fn test_error_cleared_after_valid_duration() {
    let (mut app, _) = fresh();
    start_with(&mut app, "x");
    assert!(app.error().is_some());

    press(&mut app, "backspace");
    type_str(&mut app, "30s");
    press(&mut app, "enter");
    assert_eq!(app.screen(), Screen::Running);
    assert!(app.error().is_none());
}

#[test]
fn test_input_is_bounded() {
    let (mut app, _) = fresh();
    press(&mut app, "enter");
    type_str(&mut app, "1234567890123456789012345");
    assert_eq!(app.input_value().chars().count(), INPUT_CHAR_LIMIT);
}

#[test]
fn test_navigation_keys_type_into_input() {
    let (mut app, _) = fresh();
    press(&mut app, "enter");
    type_str(&mut app, "jk");
    assert_eq!(app.input_value(), "jk");
    assert_eq!(app.screen(), Screen::DurationInput);
}

#[test]
fn test_ticks_count_down() {
    let (mut app, _) = fresh();
    start_with(&mut app, "5m");

    assert!(tick(&mut app, Duration::from_secs(60)).is_some());
    let remaining = app.countdown().remaining();
    assert!(remaining <= Duration::from_secs(240));
    assert!(remaining > Duration::from_secs(239));
}

#[test]
fn test_stale_tick_ignored() {
    let (mut app, _) = fresh();
    start_with(&mut app, "5m");

    let stale = TickMsg {
        id: app.timer().id(),
        tag: app.timer().tag() - 1,
        at: Instant::now() + Duration::from_secs(60),
    };
    assert!(app.handle(Event::Tick(stale)).is_none());
    assert_eq!(app.countdown().remaining(), Duration::from_secs(300));
}

#[test]
fn test_toggle_pauses_and_resumes() {
    let (mut app, _) = fresh();
    start_with(&mut app, "5m");

    assert!(press(&mut app, "s").is_none());
    assert!(!app.countdown().running());
    assert!(app.keymap().start.enabled());
    assert!(!app.keymap().stop.enabled());

    // Ticks from the paused chain are dropped.
    assert!(tick(&mut app, Duration::from_secs(60)).is_none());

    assert!(press(&mut app, "s").is_some());
    assert!(app.countdown().running());
    assert!(!app.keymap().start.enabled());
    assert!(app.keymap().stop.enabled());
}

#[test]
fn test_reset_restores_full_duration() {
    let (mut app, _) = fresh();
    start_with(&mut app, "5m");
    let _ = tick(&mut app, Duration::from_secs(100));

    press(&mut app, "r");
    assert_eq!(app.countdown().remaining(), Duration::from_secs(300));
    assert!(app.countdown().running());
}

#[tokio::test]
async fn test_expiry_notifies_once_and_completes() {
    let (mut app, sink) = fresh();
    start_with(&mut app, "5m");

    let cmd = expire(&mut app).expect("notification command");
    assert_eq!(app.screen(), Screen::Completed);
    assert_eq!(app.completion_cursor(), 0);

    assert!(cmd.await.is_none());
    assert_eq!(sink.count(), 1);
    let sent = sink.sent.lock().unwrap();
    assert_eq!(sent[0].title, "hourglass");
    assert_eq!(sent[0].body, "Time is up!!");

    // Later ticks are ignored once the screen has moved on.
    drop(sent);
    assert!(tick(&mut app, Duration::from_secs(1)).is_none());
    assert_eq!(sink.count(), 1);
}

#[tokio::test]
async fn test_keys_after_expiring_tick_leave_countdown_expired() {
    let (mut app, sink) = fresh();
    start_with(&mut app, "5m");

    let cmd = expire(&mut app).expect("notification command");
    assert_eq!(app.screen(), Screen::Completed);

    // Reset and start/stop are Running-only keys.
    press(&mut app, "r");
    press(&mut app, "s");
    assert_eq!(app.screen(), Screen::Completed);
    assert!(app.countdown().expired());
    assert!(!app.countdown().running());
    assert_eq!(app.countdown().remaining(), Duration::ZERO);

    assert!(cmd.await.is_none());
    assert_eq!(sink.count(), 1);
}

#[test]
fn test_expiry_happens_on_the_expiring_tick() {
    let (mut app, _) = fresh();
    start_with(&mut app, "5m");

    assert!(tick(&mut app, Duration::from_secs(299)).is_some());
    assert_eq!(app.screen(), Screen::Running);

    // Tick instants are absolute, so this one lands 2s after the last.
    let _ = tick(&mut app, Duration::from_secs(301));
    assert_eq!(app.screen(), Screen::Completed);
    assert!(app.countdown().expired());
}

#[tokio::test]
async fn test_notification_failure_is_not_fatal() {
    let sink = Arc::new(RecordingNotifier::failing());
    let (mut app, _) = App::new(AppOptions::default(), sink.clone());
    start_with(&mut app, "1s");

    let cmd = expire(&mut app).expect("notification command");
    assert!(cmd.await.is_none());
    assert_eq!(sink.count(), 1);
    assert_eq!(app.screen(), Screen::Completed);
    assert!(!app.quitting());
}

#[test]
fn test_tick_from_other_timer_ignored() {
    let (mut app, _) = fresh();
    start_with(&mut app, "5m");

    let other = TickMsg {
        id: app.timer().id() + 1000,
        tag: app.timer().tag(),
        at: Instant::now() + Duration::from_secs(400),
    };
    assert!(app.handle(Event::Tick(other)).is_none());
    assert_eq!(app.screen(), Screen::Running);
    assert_eq!(app.countdown().remaining(), Duration::from_secs(300));
}

#[test]
fn test_input_buffer_discarded_after_submit() {
    let (mut app, _) = fresh();
    start_with(&mut app, "5m");
    assert_eq!(app.screen(), Screen::Running);
    assert!(app.input.is_none());
    assert_eq!(app.input_value(), "");

    let _ = expire(&mut app);
    press(&mut app, "down");
    press(&mut app, "enter");
    press(&mut app, "enter");
    assert_eq!(app.screen(), Screen::DurationInput);
    assert!(app.input.is_some());
    assert_eq!(app.input_value(), "");
}

#[test]
fn test_restart_runs_same_duration() {
    let (mut app, _) = fresh();
    start_with(&mut app, "5m");
    let _ = expire(&mut app);

    press(&mut app, "enter");
    assert_eq!(app.screen(), Screen::Running);
    assert_eq!(app.countdown().configured(), Duration::from_secs(300));
    assert_eq!(app.countdown().remaining(), Duration::from_secs(300));
    assert!(app.countdown().running());
}

#[test]
fn test_return_to_menu() {
    let (mut app, _) = fresh();
    press(&mut app, "down");
    press(&mut app, "up");
    start_with(&mut app, "10s");
    let _ = expire(&mut app);

    press(&mut app, "down");
    press(&mut app, "down");
    assert_eq!(app.completion_cursor(), 1);
    press(&mut app, "enter");

    assert_eq!(app.screen(), Screen::Landing);
    assert_eq!(app.landing_cursor(), 0);
    assert!(!app.countdown().running());
    assert_eq!(app.countdown().configured(), Duration::ZERO);
}

#[test]
fn test_quit_from_every_screen() {
    let (mut app, _) = fresh();
    assert!(press(&mut app, "q").is_some());
    assert!(app.quitting());

    let (mut app, _) = fresh();
    press(&mut app, "enter");
    assert!(press(&mut app, "ctrl+c").is_some());
    assert!(app.quitting());

    let (mut app, _) = fresh();
    start_with(&mut app, "5m");
    assert!(press(&mut app, "q").is_some());
    assert!(app.quitting());

    let (mut app, _) = fresh();
    start_with(&mut app, "5m");
    let _ = expire(&mut app);
    assert!(press(&mut app, "q").is_some());
    assert!(app.quitting());
}

#[test]
fn test_start_on_duration_input() {
    let (mut app, _) = app_with(AppOptions {
        start_screen: StartScreen::DurationInput,
        ..AppOptions::default()
    });
    assert_eq!(app.screen(), Screen::DurationInput);

    type_str(&mut app, "30s");
    press(&mut app, "enter");
    let _ = expire(&mut app);

    // Without a landing menu, returning goes back to the prompt.
    press(&mut app, "down");
    press(&mut app, "enter");
    assert_eq!(app.screen(), Screen::DurationInput);
    assert_eq!(app.input_value(), "");
}

#[tokio::test]
async fn test_without_completion_screen_notifies_then_quits() {
    let (mut app, sink) = app_with(AppOptions {
        completion_screen: false,
        ..AppOptions::default()
    });
    start_with(&mut app, "1s");

    let cmd = expire(&mut app).expect("quit command");
    assert!(app.quitting());
    assert!(cmd.await.is_some());
    assert_eq!(sink.count(), 1);
}

#[test]
fn test_resize_recorded_on_any_screen() {
    let (mut app, _) = fresh();
    app.handle(Event::Resize {
        width: 120,
        height: 40,
    });
    assert_eq!(app.size(), (120, 40));

    start_with(&mut app, "5m");
    app.handle(Event::Resize {
        width: 80,
        height: 24,
    });
    assert_eq!(app.size(), (80, 24));
}

#[test]
fn test_event_from_runtime_messages() {
    let msg: Msg = Box::new(WindowSizeMsg {
        width: 10,
        height: 5,
    });
    assert!(matches!(
        Event::from(msg),
        Event::Resize {
            width: 10,
            height: 5
        }
    ));

    let msg: Msg = Box::new(TickMsg {
        id: 7,
        tag: 2,
        at: Instant::now(),
    });
    assert!(matches!(
        Event::from(msg),
        Event::Tick(TickMsg { id: 7, tag: 2, .. })
    ));

    let msg: Msg = Box::new(42u32);
    assert!(matches!(Event::from(msg), Event::Other(_)));
}

#[test]
fn test_landing_view() {
    let (app, _) = fresh();
    let view = plain(&app.render());
    assert!(view.contains("> Start Timer"));
    assert!(view.contains("  Quit"));
    assert!(view.contains("j/k to navigate"));
}

#[test]
fn test_input_view_shows_error() {
    let (mut app, _) = fresh();
    start_with(&mut app, "abc");
    let view = plain(&app.render());
    assert!(view.contains("Enter timer duration"));
    assert!(view.contains("abc"));
    assert!(view.contains("Error: Invalid duration format"));
    assert!(view.contains("Press Enter to start timer"));
}

#[test]
fn test_running_view() {
    let (mut app, _) = fresh();
    start_with(&mut app, "5m");
    let view = plain(&app.render());
    assert!(view.contains("Timer: 5m0s"));
    assert!(view.contains("s stop"));
    assert!(!view.contains("s start"));
    assert!(view.contains("r reset"));
}

#[test]
fn test_completed_view() {
    let (mut app, _) = fresh();
    start_with(&mut app, "5m");
    let _ = expire(&mut app);
    let view = plain(&app.render());
    assert!(view.contains("Timer Complete!"));
    assert!(view.contains("> Restart Timer for: 5m"));
    assert!(view.contains("Return to Menu"));
}
