/// Scramble renderer: draws one frame of the game from the app state.
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use super::app::{Feedback, ScrambleApp};

pub fn draw(frame: &mut Frame, app: &ScrambleApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // root word + score
            Constraint::Length(3), // input line
            Constraint::Length(1), // feedback
            Constraint::Min(3),    // used words
            Constraint::Length(1), // key help
        ])
        .split(frame.area());

    let session = app.session();

    let header = Line::from(vec![
        Span::styled(
            session.root_word().to_uppercase(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("Score: {}", session.score()),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(header)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" 🔤 WORDTERM ")),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(app.input())
            .block(Block::default().borders(Borders::ALL).title(" Your word ")),
        chunks[1],
    );
    // Put the cursor after the typed letters, inside the input border
    frame.set_cursor_position((
        chunks[1].x + 1 + app.input().chars().count() as u16,
        chunks[1].y + 1,
    ));

    let (text, color) = match app.feedback() {
        Feedback::Welcome => (
            "Make as many words as you can from the letters above".to_string(),
            Color::Gray,
        ),
        Feedback::Accepted { word, gained } => {
            (format!("✅ '{}' +{}", word, gained), Color::Green)
        }
        Feedback::Rejected(reason) => {
            (format!("📢 {}: {}", reason.title(), reason), Color::Red)
        }
    };
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color)),
        chunks[2],
    );

    let items: Vec<ListItem> = session
        .used_words()
        .iter()
        .map(|word| ListItem::new(format!("{:>2}  {}", word.chars().count(), word)))
        .collect();
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Words ({}) ", session.used_words().len())),
        ),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new("Type letters, Enter to submit, Ctrl+R for a new word, Esc to quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[4],
    );
}
