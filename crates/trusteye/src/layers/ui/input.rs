use crate::layers::service::events::DashboardTarget;
use crate::layers::service::tasks::Dispatcher;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use super::app::{AppState, Focus, ViewKind};
use super::examples::EXAMPLES;

/// Returns true when the loop should exit.
pub(crate) fn handle_key_event(key: KeyEvent, app: &mut AppState, dispatcher: &Dispatcher) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return false;
    }

    if app.confirm_quit {
        match key.code {
            KeyCode::Char('q') if ctrl => return true,
            KeyCode::Esc => {
                app.confirm_quit = false;
                return false;
            }
            _ => app.confirm_quit = false,
        }
    }

    match key.code {
        KeyCode::Char('q') if ctrl => app.confirm_quit = true,
        KeyCode::Char('n') if ctrl => app.scan_another(),
        KeyCode::Char('l') if ctrl => app.clear_results(),
        KeyCode::F(5) => app.toggle_view(),
        KeyCode::F(n @ 1..=3) => {
            if let Some(example) = EXAMPLES.get(usize::from(n) - 1) {
                app.load_example(example.key);
            }
        }
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => submit_focused(app, dispatcher),
        _ => edit_focused(key, app),
    }
    false
}

fn submit_focused(app: &mut AppState, dispatcher: &Dispatcher) {
    match app.focus {
        Focus::ScanButton if !app.scanner.button.is_enabled() => {}
        Focus::ScanText | Focus::ScanUrl | Focus::ScanButton => {
            if let Some(request) = app.begin_scan(Instant::now()) {
                dispatcher.scan(request);
            }
        }
        Focus::DashText | Focus::DashTextButton => submit_dashboard(app, dispatcher, DashboardTarget::Text),
        Focus::DashUrl | Focus::DashUrlButton => submit_dashboard(app, dispatcher, DashboardTarget::Url),
    }
}

fn submit_dashboard(app: &mut AppState, dispatcher: &Dispatcher, target: DashboardTarget) {
    if let Some(submission) = app.begin_dashboard(target) {
        dispatcher.dashboard(submission);
    }
}

fn edit_focused(key: KeyEvent, app: &mut AppState) {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return;
    }
    let Some(field) = app.focused_field_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char(ch) => field.insert(ch),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => return,
    }
    if app.view == ViewKind::Scanner {
        app.validate_scanner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::layers::service::tasks::tests::MockClient;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn app() -> AppState {
        AppState::new(&Settings {
            api_base: "http://localhost:5000/api".to_string(),
            connect_timeout: None,
            default_view: ViewKind::Scanner,
            toast_duration: Duration::from_secs(3),
        })
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[tokio::test]
    async fn typing_validates_scanner_form() {
        let (tx, _rx) = mpsc::channel(4);
        let dispatcher = Dispatcher::new(Arc::new(MockClient::failing(500)), tx);
        let mut app = app();
        assert!(!handle_key_event(press(KeyCode::Char('h')), &mut app, &dispatcher));
        assert_eq!(app.scanner.text.value(), "h");
        assert!(app.scanner.button.is_enabled());
        handle_key_event(press(KeyCode::Backspace), &mut app, &dispatcher);
        assert!(!app.scanner.button.is_enabled());
    }

    #[tokio::test]
    async fn failed_submit_round_trip() {
        let (tx, mut rx) = mpsc::channel(4);
        let dispatcher = Dispatcher::new(Arc::new(MockClient::failing(500)), tx);
        let mut app = app();
        handle_key_event(press(KeyCode::F(1)), &mut app, &dispatcher);
        handle_key_event(press(KeyCode::Enter), &mut app, &dispatcher);
        assert!(app.scanner.button.is_busy());

        let event = rx.recv().await.expect("event");
        app.handle_event(event, Instant::now());
        assert!(app.scanner.button.is_enabled());
        assert_eq!(app.notifier.len(), 1);
    }

    #[tokio::test]
    async fn alert_blocks_other_keys() {
        let (tx, _rx) = mpsc::channel(4);
        let dispatcher = Dispatcher::new(Arc::new(MockClient::failing(500)), tx);
        let mut app = app();
        app.toggle_view();
        handle_key_event(press(KeyCode::Enter), &mut app, &dispatcher);
        assert!(app.alert.is_some());
        handle_key_event(press(KeyCode::Char('x')), &mut app, &dispatcher);
        assert!(app.dash_text.field.value().is_empty());
        handle_key_event(press(KeyCode::Esc), &mut app, &dispatcher);
        assert!(app.alert.is_none());
    }

    #[tokio::test]
    async fn quit_needs_confirmation() {
        let (tx, _rx) = mpsc::channel(4);
        let dispatcher = Dispatcher::new(Arc::new(MockClient::failing(500)), tx);
        let mut app = app();
        assert!(!handle_key_event(ctrl('q'), &mut app, &dispatcher));
        assert!(app.confirm_quit);
        handle_key_event(press(KeyCode::Esc), &mut app, &dispatcher);
        assert!(!app.confirm_quit);
        handle_key_event(ctrl('q'), &mut app, &dispatcher);
        assert!(handle_key_event(ctrl('q'), &mut app, &dispatcher));
    }
}
