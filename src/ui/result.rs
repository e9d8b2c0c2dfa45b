use crate::models::{Choice, QuizResult};
use crate::ui::layout::calculate_result_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

fn meter_color(percent: u8) -> Color {
    match percent {
        0..=33 => Color::Green,
        34..=66 => Color::Yellow,
        _ => Color::Red,
    }
}

fn answers_line(result: &QuizResult) -> String {
    result
        .answers
        .iter()
        .map(|answer| match answer {
            Some(Choice::A) => "A",
            Some(Choice::B) => "B",
            None => "-",
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shows a result read back from the store; it never sees the quiz session.
pub fn draw_result(f: &mut Frame, result: &QuizResult) {
    let layout = calculate_result_chunks(f.area());
    let percent = result.unwise_percent.min(100);

    let title = Paragraph::new("TIKIRI")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let big = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", percent),
            Style::default()
                .fg(meter_color(percent))
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Result"));
    f.render_widget(big, layout.percent_area);

    let meter = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Meter"))
        .gauge_style(Style::default().fg(meter_color(percent)).bg(Color::Gray))
        .percent(u16::from(percent))
        .label("");
    f.render_widget(meter, layout.meter_area);

    let mut detail = Text::default();
    let total = result.unwise_count + result.wise_count;
    if total > 0 {
        detail.push_line(Line::from(format!(
            "Unwise answers: {} of {}",
            result.unwise_count, total
        )));
    }
    if !result.answers.is_empty() {
        detail.push_line(Line::from(format!("Answers: {}", answers_line(result))));
    }
    let details = Paragraph::new(detail)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default());
    f.render_widget(details, layout.detail_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "q/Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
