//! ratatui rendering of the application state.

use ninedays_feed::{field_label, format_field, weather_icon, ForecastDay};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, Phase};
use crate::theme::Palette;

const LABEL_WIDTH: usize = 28;

pub fn draw(f: &mut Frame, state: &AppState) {
    let palette = state.theme.palette();

    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_title(f, chunks[0], state, &palette);

    match &state.phase {
        Phase::Loading => render_banner(f, chunks[1], "Loading weather data...", palette.dim),
        Phase::Failed(message) => {
            render_banner(f, chunks[1], &format!("Error: {message}"), palette.error);
        }
        Phase::Ready => render_content(f, chunks[1], state, &palette),
    }

    render_footer(f, chunks[2], &palette);
}

fn render_title(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let title = Line::from(vec![
        Span::styled(
            "Weather Data",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", state.theme.name()),
            Style::default().fg(palette.dim),
        ),
    ]);
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), area);
}

fn render_banner(f: &mut Frame, area: Rect, message: &str, color: ratatui::style::Color) {
    let banner = Paragraph::new(message.to_owned())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(banner, area);
}

fn render_content(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_summary(f, chunks[0], state, palette);

    match state.navigator.current() {
        Some(day) => {
            render_forecast_card(f, chunks[1], day, palette);
            render_pager(f, chunks[2], state, palette);
        }
        None => render_banner(f, chunks[1], "No forecast days available.", palette.dim),
    }
}

fn render_summary(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let text = state.general_situation.as_deref().unwrap_or("—");
    let summary = Paragraph::new(text.to_owned())
        .style(Style::default().fg(palette.text))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim))
                .title(Span::styled(
                    "General Situation",
                    Style::default().fg(palette.accent),
                )),
        );
    f.render_widget(summary, area);
}

fn render_forecast_card(f: &mut Frame, area: Rect, day: &ForecastDay, palette: &Palette) {
    let mut title = vec![Span::styled(
        "Selected Forecast",
        Style::default().fg(palette.accent),
    )];
    if let Some(icon) = day.icon_code().and_then(weather_icon) {
        title.push(Span::styled(
            format!("  {} {}", icon.glyph, icon.label),
            Style::default().fg(palette.text),
        ));
    }

    let card = Paragraph::new(Text::from(field_lines(day, palette)))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim))
                .title(Line::from(title)),
        );
    f.render_widget(card, area);
}

/// One line per field, label column first; multi-line values (pretty-printed
/// records) continue under an indent.
fn field_lines(day: &ForecastDay, palette: &Palette) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(palette.label);
    let value_style = Style::default().fg(palette.text);

    let mut lines = Vec::new();
    for (key, value) in day.display_fields() {
        let label = field_label(key).unwrap_or(key.as_str());
        let rendered = format_field(key, Some(value));

        let mut parts = rendered.split('\n');
        let first = parts.next().unwrap_or_default().to_owned();
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
            Span::styled(first, value_style),
        ]));
        for part in parts {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(LABEL_WIDTH)),
                Span::styled(part.to_owned(), value_style),
            ]));
        }
    }
    lines
}

fn render_pager(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let nav = &state.navigator;
    let marker = |enabled: bool| {
        if enabled {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.dim)
        }
    };

    let pager = Line::from(vec![
        Span::styled("◀ ", marker(nav.can_move_previous())),
        Span::styled(
            format!("Day {} of {}", nav.cursor() + 1, nav.len()),
            Style::default().fg(palette.text),
        ),
        Span::styled(" ▶", marker(nav.can_move_next())),
    ]);
    f.render_widget(Paragraph::new(pager).alignment(Alignment::Center), area);
}

fn render_footer(f: &mut Frame, area: Rect, palette: &Palette) {
    let footer = Paragraph::new("←/→ navigate  t theme  q quit")
        .style(Style::default().fg(palette.dim))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
