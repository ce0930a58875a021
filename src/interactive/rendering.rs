//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterScore, WORD_LENGTH};
use crate::game::{GameState, MAX_GUESSES};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Length(MAX_GUESSES as u16 + 4), // Guess grid
            Constraint::Length(5),                   // Keyboard
            Constraint::Min(4),                      // Messages
            Constraint::Length(3),                   // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🟩 WORDLE DAILY — {}", app.puzzle))
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

fn score_style(score: LetterScore) -> Style {
    match score {
        LetterScore::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterScore::WrongLocation => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterScore::Wrong => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_GUESSES);

    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

        if let Some(played) = app.game.rows().get(row) {
            // A scored row
            for (i, score) in played.feedback().iter().enumerate() {
                let letter = (played.guess().letter_at(i) as char).to_ascii_uppercase();
                spans.push(Span::styled(
                    format!(" {letter} "),
                    score_style(score).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
        } else if row == app.game.rows().len() && app.game.state() == GameState::InProgress {
            // The active row being typed
            let buffer = app.game.buffer().as_bytes();
            for i in 0..WORD_LENGTH {
                let span = buffer.get(i).map_or_else(
                    || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    |&b| {
                        Span::styled(
                            format!(" {} ", (b as char).to_ascii_uppercase()),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        )
                    },
                );
                spans.push(span);
                spans.push(Span::raw(" "));
            }
        } else {
            // An untouched row
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let rows = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = Vec::new();
            if i == 2 {
                spans.push(Span::styled("⏎ ", Style::default().fg(Color::DarkGray)));
            }
            for ch in row.chars() {
                let style = app
                    .game
                    .keyboard()
                    .score_for(ch)
                    .map_or_else(|| Style::default().fg(Color::White), score_style);
                spans.push(Span::styled(
                    format!("{} ", ch.to_ascii_uppercase()),
                    style,
                ));
            }
            if i == 2 {
                spans.push(Span::styled("⌫", Style::default().fg(Color::DarkGray)));
            }
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    let state_text = match app.game.state() {
        GameState::InProgress => "In progress",
        GameState::Won => "Won",
        GameState::Lost => "Lost",
    };
    let state = Paragraph::new(format!("State: {state_text}")).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let guesses_text = format!("Guesses: {}/{}", app.game.guesses_used(), MAX_GUESSES);
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[1]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Playing => "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit",
        InputMode::GameOver => "n: Practice Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
