use crate::models::Choice;
use crate::session::QuizSession;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::{progress_ratio, truncate_string};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn disabled_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM)
}

fn draw_option(
    f: &mut Frame,
    area: Rect,
    hotkey: &str,
    label: &str,
    choice: Choice,
    selected: Option<Choice>,
) {
    let is_selected = selected == Some(choice);
    let (border_style, text_style) = if is_selected {
        (
            Style::default().fg(Color::Green),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default(), Style::default())
    };

    let marker = if is_selected { "[x]" } else { "[ ]" };
    // Borders plus the marker.
    let label = truncate_string(label, area.width.saturating_sub(6) as usize);
    let option = Paragraph::new(Text::from(Line::from(format!("{} {}", marker, label))))
        .style(text_style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(hotkey),
        );
    f.render_widget(option, area);
}

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_quiz_chunks(f.area());

    let Some(question) = session.current_question() else {
        return;
    };
    let total = session.total();
    let index = session.current_index();

    let header = Paragraph::new(format!("Question {} / {}", index + 1, total))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Red).bg(Color::Gray))
        .ratio(progress_ratio(index, total))
        .label(format!("{} answered", index));
    f.render_widget(progress, layout.progress_area);

    let prompt = Paragraph::new(format!("{}) {}", question.id, question.prompt))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(prompt, layout.question_area);

    if let Some([(left, left_label), (right, right_label)]) = session.displayed_options() {
        let selected = session.current_answer();
        draw_option(f, layout.left_option_area, "← / 1", left_label, left, selected);
        draw_option(f, layout.right_option_area, "→ / 2", right_label, right, selected);
    }

    let back_style = if session.can_retreat() {
        key_style()
    } else {
        disabled_style()
    };
    let next_style = if session.can_advance() {
        key_style()
    } else {
        disabled_style()
    };
    let next_label = if index + 1 == total { " Finish  " } else { " Next  " };

    let help_text = vec![
        Line::from(vec![
            Span::styled("←/→", key_style()),
            Span::from(" Choose  "),
            Span::styled("↑", back_style),
            Span::from(" Back  "),
            Span::styled("Enter", next_style),
            Span::from(next_label),
            Span::styled("Esc", key_style()),
            Span::from(" Quit to Start"),
        ]),
        Line::from(vec![Span::styled("Ctrl+C", key_style()), Span::from(" Exit App")]),
    ];

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit to Start")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave this quiz? Your answers will be lost.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Back to Start)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        Span::styled("Ctrl+C", key_style()),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
