//! Dashboard screen rendering
//!
//! Renders the date header, the location pills, and either the loading
//! indicator or the forecast: a hero panel for the current window and a
//! scrollable list of upcoming windows.

use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use twweather::app::App;
use twweather::data::all_locations;
use twweather::period::format_date_header;
use twweather::render::{HeroPanel, UpcomingCard};

/// Color scheme
mod colors {
    use ratatui::style::Color;

    /// Section headers and borders
    pub const HEADER: Color = Color::Cyan;
    /// Active location pill background
    pub const ACTIVE: Color = Color::Yellow;
    /// Secondary/dimmed text
    pub const SECONDARY: Color = Color::Gray;
    /// Rain advice
    pub const RAIN: Color = Color::LightBlue;
    /// Clothing advice
    pub const CLOTH: Color = Color::LightGreen;
}

/// Renders the dashboard with today's local date in the header
pub fn render(frame: &mut Frame, app: &App) {
    render_at(frame, app, Local::now().date_naive());
}

/// Renders the dashboard with an explicit header date
pub fn render_at(frame: &mut Frame, app: &App, today: NaiveDate) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and date
            Constraint::Length(1), // Location pills
            Constraint::Min(5),    // Content
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(frame, chunks[0], today);
    render_location_pills(frame, app, chunks[1]);

    if app.state.loading {
        render_loading(frame, chunks[2]);
    } else if let Some(view) = &app.state.content {
        let content = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(3)])
            .split(chunks[2]);
        render_hero(frame, app, &view.hero, content[0]);
        render_upcoming(frame, &view.upcoming, app.upcoming_scroll, content[1]);
    } else {
        render_empty(frame, chunks[2]);
    }

    render_key_hints(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect, today: NaiveDate) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::HEADER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let title = Paragraph::new(Span::styled(
        "台灣天氣小幫手",
        Style::default()
            .fg(colors::HEADER)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, halves[0]);

    let date = Paragraph::new(format_date_header(today)).alignment(Alignment::Right);
    frame.render_widget(date, halves[1]);
}

fn render_location_pills(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, location) in all_locations().iter().enumerate() {
        let label = format!(" {} {} ", i + 1, location.display_name());
        let style = if *location == app.state.active {
            Style::default()
                .fg(Color::Black)
                .bg(colors::ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::SECONDARY)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders a loading message while a forecast is being fetched
fn render_loading(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("載入中...")
        .style(Style::default().fg(colors::HEADER))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new("尚無天氣資料，按 r 重新整理")
        .style(Style::default().fg(colors::SECONDARY))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, area);
}

fn render_hero(frame: &mut Frame, app: &App, hero: &HeroPanel, area: Rect) {
    let title = app
        .state
        .shown_location
        .map(|location| format!(" {} ", location.display_name()))
        .unwrap_or_default();

    let advice = &hero.advice;
    let lines = vec![
        Line::from(Span::styled(
            hero.period.clone(),
            Style::default().fg(colors::SECONDARY),
        )),
        Line::from(vec![
            Span::raw(format!("{}  ", hero.icon)),
            Span::styled(
                hero.temperature_text(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(hero.description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{} {}", advice.rain_icon(), advice.rain_text()),
                Style::default().fg(colors::RAIN),
            ),
            Span::raw("   "),
            Span::styled(hero.rain_percent_text(), Style::default().fg(colors::SECONDARY)),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} {}", advice.cloth_icon(), advice.cloth_text()),
                Style::default().fg(colors::CLOTH),
            ),
            Span::raw("   "),
            Span::styled(hero.max_temp_text(), Style::default().fg(colors::SECONDARY)),
        ]),
    ];

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::HEADER));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Terminal columns reserved for the period label of an upcoming line
const LABEL_WIDTH: usize = 10;

/// Pads `text` with spaces to `width` terminal columns
///
/// CJK characters take two columns, so padding goes by display width rather
/// than by `char` count.
fn pad_to_width(text: &str, width: usize) -> String {
    let used = Span::raw(text).width();
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

/// One line per upcoming window, in input order
fn upcoming_line(card: &UpcomingCard) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {}", pad_to_width(&card.label, LABEL_WIDTH)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{}  ", card.icon)),
        Span::raw(format!("{:<12}", card.temperature_range())),
        Span::styled(card.rain_text(), Style::default().fg(colors::SECONDARY)),
    ])
}

fn render_upcoming(frame: &mut Frame, cards: &[UpcomingCard], scroll: u16, area: Rect) {
    let lines: Vec<Line> = if cards.is_empty() {
        vec![Line::from(Span::styled(
            " 沒有後續預報",
            Style::default().fg(colors::SECONDARY),
        ))]
    } else {
        cards.iter().map(upcoming_line).collect()
    };

    let max_scroll = lines.len().saturating_sub(1) as u16;
    let block = Block::default()
        .title(" 稍後預報 ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::HEADER));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll.min(max_scroll), 0));
    frame.render_widget(paragraph, area);
}

fn render_key_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(Span::styled(
        " 1-4/←→ location  r refresh  ↑↓ scroll  ? help  q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints, area);
}
