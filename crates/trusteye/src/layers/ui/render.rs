use crate::layers::service::events::DashboardTarget;
use crate::layers::view::report::{ResultPanel, RiskReport};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Clear, Gauge, Paragraph, Wrap};
use std::time::Instant;

use super::app::{AppState, DashboardForm, Focus, HealthState, ViewKind};
use super::examples::EXAMPLES;
use super::form::{SubmitButton, TextField};
use super::text::{display_width, sanitize_text_for_tui, truncate_with_ellipsis};
use super::theme::{Theme, ValueStyle};

const TOAST_WIDTH: u16 = 48;
const ALERT_WIDTH: u16 = 60;

pub(crate) fn draw_ui(frame: &mut ratatui::Frame, app: &AppState) {
    let theme = Theme::dark();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, app, &theme, chunks[0]);
    match app.view {
        ViewKind::Scanner => draw_scanner(frame, app, &theme, chunks[1]),
        ViewKind::Dashboard => draw_dashboard(frame, app, &theme, chunks[1]),
    }
    draw_footer(frame, app, &theme, chunks[2]);
    draw_toasts(frame, app, &theme, Instant::now());
    if let Some(message) = &app.alert {
        draw_alert(frame, &theme, message);
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &AppState, theme: &Theme, area: Rect) {
    let (health_label, health_style) = match &app.health {
        HealthState::Checking => ("checking".to_string(), theme.value_style(ValueStyle::Dim)),
        HealthState::Healthy => ("healthy".to_string(), theme.accent_style()),
        HealthState::Unhealthy(status) => (format!("unhealthy ({status})"), theme.warn_style()),
        HealthState::Unreachable => ("unreachable".to_string(), theme.warn_style()),
    };
    let view_label = match app.view {
        ViewKind::Scanner => "Scanner",
        ViewKind::Dashboard => "Dashboard",
    };
    let base_width = (area.width as usize).saturating_sub(50).max(12);
    let line = Line::from(vec![
        Span::styled("View: ", theme.key_style()),
        Span::styled(view_label, theme.value_style(ValueStyle::Important)),
        Span::styled("  API: ", theme.key_style()),
        Span::styled(
            truncate_with_ellipsis(&app.api_base, base_width),
            theme.value_style(ValueStyle::Normal),
        ),
        Span::styled("  Health: ", theme.key_style()),
        Span::styled(health_label, health_style),
    ]);
    let header = Paragraph::new(line).block(theme.block("TrustEye"));
    frame.render_widget(header, area);
}

fn draw_scanner(frame: &mut ratatui::Frame, app: &AppState, theme: &Theme, area: Rect) {
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
        ])
        .split(body[0]);

    draw_field(frame, theme, "Text / Message", &app.scanner.text, app.focus == Focus::ScanText, left[0]);
    draw_field(frame, theme, "URL", &app.scanner.url, app.focus == Focus::ScanUrl, left[1]);
    draw_button(frame, theme, &app.scanner.button, app.focus == Focus::ScanButton, left[2]);

    let example_lines = EXAMPLES
        .iter()
        .enumerate()
        .map(|(idx, example)| {
            Line::from(vec![
                Span::styled(format!("F{} ", idx + 1), theme.accent_style()),
                Span::styled(example.label, theme.value_style(ValueStyle::Normal)),
            ])
        })
        .collect::<Vec<_>>();
    frame.render_widget(
        Paragraph::new(example_lines).block(theme.block("Examples")),
        left[3],
    );

    match (&app.scanner.report, app.scanner.results_visible) {
        (Some(report), true) => draw_result_panel(frame, theme, "Analysis Results", &report.panel(), body[1]),
        _ => {
            let placeholder = Paragraph::new(Text::from("no analysis yet"))
                .style(theme.value_style(ValueStyle::Dim))
                .block(theme.block("Analysis Results"));
            frame.render_widget(placeholder, body[1]);
        }
    }
}

fn draw_dashboard(frame: &mut ratatui::Frame, app: &AppState, theme: &Theme, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    draw_dashboard_column(frame, app, theme, DashboardTarget::Text, columns[0]);
    draw_dashboard_column(frame, app, theme, DashboardTarget::Url, columns[1]);
}

fn draw_dashboard_column(
    frame: &mut ratatui::Frame,
    app: &AppState,
    theme: &Theme,
    target: DashboardTarget,
    area: Rect,
) {
    let form: &DashboardForm = app.dashboard_form(target);
    let (title, field_focus, button_focus, result_title) = match target {
        DashboardTarget::Text => ("Text Analysis", Focus::DashText, Focus::DashTextButton, "Text Results"),
        DashboardTarget::Url => ("URL Analysis", Focus::DashUrl, Focus::DashUrlButton, "URL Results"),
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);
    draw_field(frame, theme, title, &form.field, app.focus == field_focus, rows[0]);
    draw_button(frame, theme, &form.button, app.focus == button_focus, rows[1]);
    match &form.result {
        Some(result) => draw_result_panel(frame, theme, result_title, &result.panel(), rows[2]),
        None => {
            let placeholder = Paragraph::new(Text::from("no analysis yet"))
                .style(theme.value_style(ValueStyle::Dim))
                .block(theme.block(result_title));
            frame.render_widget(placeholder, rows[2]);
        }
    }
}

fn draw_field(
    frame: &mut ratatui::Frame,
    theme: &Theme,
    title: &str,
    field: &TextField,
    focused: bool,
    area: Rect,
) {
    let normal = theme.value_style(ValueStyle::Normal);
    let (before, at, after) = field.split_at_cursor();
    let mut spans = vec![Span::styled(before.to_string(), normal)];
    if focused {
        let cursor = at.map(String::from).unwrap_or_else(|| " ".to_string());
        spans.push(Span::styled(cursor, theme.cursor_style()));
    } else if let Some(ch) = at {
        spans.push(Span::styled(ch.to_string(), normal));
    }
    spans.push(Span::styled(after.to_string(), normal));
    let paragraph = Paragraph::new(Line::from(spans))
        .block(theme.field_block(title, focused))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_button(
    frame: &mut ratatui::Frame,
    theme: &Theme,
    button: &SubmitButton,
    focused: bool,
    area: Rect,
) {
    let label = Line::from(Span::styled(
        format!(" {} ", button.label()),
        theme.button_style(button.is_enabled(), focused),
    ));
    let widget = Paragraph::new(label)
        .centered()
        .block(theme.field_block("", focused));
    frame.render_widget(widget, area);
}

fn draw_result_panel(
    frame: &mut ratatui::Frame,
    theme: &Theme,
    title: &str,
    panel: &ResultPanel,
    area: Rect,
) {
    let block = theme.block(title);
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let gauge_height = if panel.gauge.is_some() { 1 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(gauge_height),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let mut header = vec![Span::styled(panel.header, theme.verdict_style(panel.verdict))];
    if let Some(badge) = &panel.badge {
        header.push(Span::raw("  "));
        header.push(Span::styled(
            format!(" {} ", sanitize_text_for_tui(&badge.label)),
            theme.badge_style(&badge.class),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(header)), rows[0]);

    if let Some(gauge) = &panel.gauge {
        let widget = Gauge::default()
            .gauge_style(theme.gauge_style(gauge.band))
            .ratio(gauge.ratio())
            .label(format!("{}%", gauge.percent));
        frame.render_widget(widget, rows[1]);
    }

    let mut metrics = Vec::new();
    for metric in &panel.metrics {
        metrics.push(Span::styled(format!("{}: ", metric.label), theme.key_style()));
        metrics.push(Span::styled(
            format!("{}  ", sanitize_text_for_tui(&metric.value)),
            theme.value_style(ValueStyle::Important),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(metrics)), rows[2]);

    let mut detail: Vec<Line> = Vec::new();
    if panel.show_tags {
        detail.push(Line::styled(panel.tags_title, theme.key_style()));
        let mut tags = Vec::new();
        for tag in &panel.tags {
            tags.push(Span::styled(
                format!(" {} ", sanitize_text_for_tui(tag)),
                theme.tag_style(),
            ));
            tags.push(Span::raw(" "));
        }
        detail.push(Line::from(tags));
    }
    if let Some(explanation) = &panel.explanation {
        detail.push(Line::raw(""));
        detail.push(Line::styled("Explanation", theme.key_style()));
        detail.push(Line::styled(
            explanation.clone(),
            theme.value_style(ValueStyle::Normal),
        ));
    }
    frame.render_widget(
        Paragraph::new(detail).wrap(Wrap { trim: true }),
        rows[3],
    );
}

fn draw_footer(frame: &mut ratatui::Frame, app: &AppState, theme: &Theme, area: Rect) {
    let help = match app.view {
        ViewKind::Scanner => {
            "Tab=focus  Enter=scan  F1-F3=examples  Ctrl+N=scan another  Ctrl+L=clear  F5=dashboard  Ctrl+Q=quit  "
        }
        ViewKind::Dashboard => "Tab=focus  Enter=analyze  F5=scanner  Ctrl+Q=quit  ",
    };
    let mut spans = vec![Span::styled(help, theme.help_style())];
    if app.confirm_quit {
        spans.push(Span::styled(
            "press Ctrl+Q again to quit / Esc to cancel  ",
            theme.warn_style(),
        ));
    }
    let footer = Paragraph::new(Line::from(spans)).block(theme.block("Controls"));
    frame.render_widget(footer, area);
}

/// Toasts share one anchor in the top-right corner; later ones paint over earlier ones.
fn draw_toasts(frame: &mut ratatui::Frame, app: &AppState, theme: &Theme, now: Instant) {
    let screen = frame.area();
    let width = TOAST_WIDTH.min(screen.width.saturating_sub(2));
    if width == 0 || screen.height < 4 {
        return;
    }
    for toast in app.notifier.toasts() {
        let offset = app.notifier.slide_offset(toast, width, now);
        let x = screen.right().saturating_sub(width + 1).saturating_add(offset);
        let area = Rect::new(x, screen.y + 1, width, 3).intersection(screen);
        if area.width == 0 {
            continue;
        }
        let message = truncate_with_ellipsis(
            &sanitize_text_for_tui(&toast.message),
            width.saturating_sub(4) as usize,
        );
        let widget = Paragraph::new(Line::from(format!(" {message}")))
            .style(theme.toast_style(toast.severity))
            .block(ratatui::widgets::Block::bordered().style(theme.toast_style(toast.severity)));
        frame.render_widget(Clear, area);
        frame.render_widget(widget, area);
    }
}

fn draw_alert(frame: &mut ratatui::Frame, theme: &Theme, message: &str) {
    let screen = frame.area();
    let width = ALERT_WIDTH.min(screen.width);
    let text_width = width.saturating_sub(2).max(1) as usize;
    let message = sanitize_text_for_tui(message);
    let text_lines = display_width(&message).div_ceil(text_width).max(1) as u16;
    let height = (text_lines + 4).min(screen.height);
    let area = Rect::new(
        screen.x + screen.width.saturating_sub(width) / 2,
        screen.y + screen.height.saturating_sub(height) / 2,
        width,
        height,
    );
    let body = Text::from(vec![
        Line::styled(message, theme.value_style(ValueStyle::Normal)),
        Line::raw(""),
        Line::styled("Enter/Esc to dismiss", theme.help_style()),
    ]);
    let widget = Paragraph::new(body)
        .block(theme.block("Alert"))
        .wrap(Wrap { trim: true });
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}
