//! TUI rendering with ratatui
//!
//! Board of letter tiles, message log and session statistics.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Placement;
use crate::game::{GameStatus, GuessRecord};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 SUTOM - Find the Word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Tile colors for a placement
fn tile_style(placement: Placement) -> Style {
    let bg = match placement {
        Placement::Correct => Color::Green,
        Placement::Misplaced => Color::Yellow,
        Placement::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// One board row for an evaluated guess
pub fn record_line(record: &GuessRecord) -> Line<'static> {
    let spans: Vec<Span> = record
        .letters()
        .flat_map(|(letter, placement)| {
            [
                Span::styled(format!(" {letter} "), tile_style(placement)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

/// Board row for the guess being typed, padded with blanks
fn input_line(buffer: &str, length: usize) -> Line<'static> {
    let mut letters = buffer.chars();
    let spans: Vec<Span> = (0..length)
        .flat_map(|_| {
            let text = letters
                .next()
                .map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
            [
                Span::styled(
                    text,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn empty_line(length: usize) -> Line<'static> {
    Line::styled(" · ".repeat(length), Style::default().fg(Color::DarkGray))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let length = game.word_length();

    let mut lines: Vec<Line> = Vec::new();
    for record in game.history() {
        lines.push(record_line(record));
        lines.push(Line::default());
    }

    let mut rows_left = game.attempts_left() as usize;
    if game.status() == GameStatus::InProgress && rows_left > 0 {
        lines.push(input_line(&app.input_buffer, length));
        lines.push(Line::default());
        rows_left -= 1;
    }
    if game.status() != GameStatus::Won {
        for _ in 0..rows_left {
            lines.push(empty_line(length));
            lines.push(Line::default());
        }
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {length} Letters "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Attempts gauge
            Constraint::Percentage(50), // Messages
            Constraint::Min(4),         // Stats
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let left = app.game.attempts_left();
    let limit = app.game.attempt_limit();
    let percent = (u64::from(left) * 100 / u64::from(limit.max(1))) as u16;

    let color = match percent {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{left}/{limit} left"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![
        Line::from(format!("Played: {}", stats.total_games)),
        Line::from(format!("Won:    {} ({:.0}%)", stats.games_won, stats.win_rate())),
    ];

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (attempt, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let width = if most == 0 { 0 } else { count * 12 / most };
        lines.push(Line::from(vec![
            Span::raw(format!("{attempt}: ")),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            String::new(),
            if app.game.status() == GameStatus::Won {
                Color::Green
            } else {
                Color::Red
            },
        ),
        InputMode::Guessing => (
            " Type your guess | Enter to submit ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let state_text = match app.game.status() {
        GameStatus::InProgress => "Playing",
        GameStatus::Won => "Won",
        GameStatus::Lost => "Lost",
    };
    let state = Paragraph::new(format!("Game: {state_text}")).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let guesses = Paragraph::new(format!("Guesses: {}", app.game.history().len()))
        .alignment(Alignment::Center);
    f.render_widget(guesses, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit | Enter: Submit | ⌫: Delete",
        InputMode::GameOver => "q: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};
    use crate::wordlists::Dictionary;
    use ratatui::{Terminal, backend::TestBackend};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn record_line_colors_tiles() {
        let guess = Word::new("ABLE").unwrap();
        let feedback = Feedback::calculate(&guess, &Word::new("BEER").unwrap());
        let line = record_line(&GuessRecord::new(guess, feedback));

        assert_eq!(line_text(&line), " A   B   L   E  ");
        assert_eq!(line.spans[0].style.bg, Some(Color::DarkGray));
        assert_eq!(line.spans[2].style.bg, Some(Color::Yellow));
    }

    #[test]
    fn input_line_pads_blanks() {
        assert_eq!(line_text(&input_line("AB", 4)), " A   B   _   _  ");
    }

    #[test]
    fn draws_without_panicking() {
        let dictionary = Dictionary::new(vec![Word::new("BEER").unwrap()]);
        let mut app = App::new(dictionary, 3).unwrap();
        app.input_buffer = "ABLE".to_string();
        app.submit_input();
        app.input_buffer = "BE".to_string();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        app.input_buffer = "BEER".to_string();
        app.submit_input();
        terminal.draw(|f| ui(f, &app)).unwrap();
    }
}
