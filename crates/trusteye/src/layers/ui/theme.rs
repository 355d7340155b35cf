use crate::layers::view::report::{GaugeBand, Verdict};
use ratatui::style::{Color, Modifier, Style};

use super::notify::Severity;

#[derive(Clone, Copy)]
pub(crate) enum ValueStyle {
    Normal,
    Important,
    Dim,
}

pub(crate) struct Theme {
    border: Color,
    focus_border: Color,
    title: Color,
    text: Color,
    dim: Color,
    accent: Color,
    track: Color,
    info: Color,
    warn: Color,
    ok: Color,
    error: Color,
}

impl Theme {
    pub(crate) fn dark() -> Self {
        Self {
            border: Color::DarkGray,
            focus_border: Color::Cyan,
            title: Color::Blue,
            text: Color::White,
            dim: Color::Gray,
            accent: Color::Cyan,
            track: Color::Rgb(0xe2, 0xe8, 0xf0),
            info: Color::Rgb(0x25, 0x63, 0xeb),
            warn: Color::Rgb(0xf5, 0x9e, 0x0b),
            ok: Color::Rgb(0x10, 0xb9, 0x81),
            error: Color::Rgb(0xef, 0x44, 0x44),
        }
    }

    pub(crate) fn block<'a>(&self, title: &'a str) -> ratatui::widgets::Block<'a> {
        ratatui::widgets::Block::default()
            .title(ratatui::text::Span::styled(
                title,
                Style::default()
                    .fg(self.title)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(ratatui::widgets::Borders::ALL)
            .border_style(Style::default().fg(self.border))
    }

    pub(crate) fn field_block<'a>(&self, title: &'a str, focused: bool) -> ratatui::widgets::Block<'a> {
        let border = if focused { self.focus_border } else { self.border };
        self.block(title).border_style(Style::default().fg(border))
    }

    pub(crate) fn help_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub(crate) fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn warn_style(&self) -> Style {
        Style::default().fg(self.warn).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn key_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub(crate) fn cursor_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub(crate) fn value_style(&self, level: ValueStyle) -> Style {
        match level {
            ValueStyle::Normal => Style::default().fg(self.text),
            ValueStyle::Important => Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
            ValueStyle::Dim => Style::default().fg(self.dim),
        }
    }

    pub(crate) fn verdict_style(&self, verdict: Verdict) -> Style {
        let color = match verdict {
            Verdict::Threat => self.error,
            Verdict::Suspicious => self.warn,
            Verdict::Safe => self.ok,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn band_color(&self, band: GaugeBand) -> Color {
        match band {
            GaugeBand::Low => self.ok,
            GaugeBand::Medium => self.warn,
            GaugeBand::High => self.error,
        }
    }

    pub(crate) fn gauge_style(&self, band: GaugeBand) -> Style {
        Style::default().fg(self.band_color(band)).bg(self.track)
    }

    /// Badge classes are lowercased risk levels coming from the backend.
    pub(crate) fn badge_style(&self, class: &str) -> Style {
        let color = match class {
            "critical" | "high" => self.error,
            "medium" => self.warn,
            "low" | "very low" => self.ok,
            _ => self.dim,
        };
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn tag_style(&self) -> Style {
        Style::default().fg(Color::Black).bg(self.dim)
    }

    pub(crate) fn toast_style(&self, severity: Severity) -> Style {
        let color = match severity {
            Severity::Info => self.info,
            Severity::Warning => self.warn,
            Severity::Error => self.error,
            Severity::Success => self.ok,
        };
        Style::default()
            .fg(Color::White)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn button_style(&self, enabled: bool, focused: bool) -> Style {
        let style = if enabled {
            Style::default().fg(Color::White).bg(self.info)
        } else {
            Style::default().fg(self.dim).bg(Color::DarkGray)
        };
        if focused {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }
}
