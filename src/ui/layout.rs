use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub progress_area: Rect,
    pub question_area: Rect,
    pub left_option_area: Rect,
    pub right_option_area: Rect,
    pub help_area: Rect,
}

pub struct ResultLayout {
    pub header_area: Rect,
    pub percent_area: Rect,
    pub meter_area: Rect,
    pub detail_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(5),
            Constraint::Length(4),
        ])
        .split(area);

    let option_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);

    QuizLayout {
        header_area: chunks[0],
        progress_area: chunks[1],
        question_area: chunks[2],
        left_option_area: option_chunks[0],
        right_option_area: option_chunks[1],
        help_area: chunks[4],
    }
}

pub fn calculate_result_chunks(area: Rect) -> ResultLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    ResultLayout {
        header_area: chunks[0],
        percent_area: chunks[1],
        meter_area: chunks[2],
        detail_area: chunks[3],
        footer_area: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_quiz_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.progress_area.height, 3);
        assert_eq!(layout.help_area.height, 4);
        assert_eq!(layout.left_option_area.height, 5);
        // 40 - 2 margin - 3 - 3 - 5 - 4
        assert_eq!(layout.question_area.height, 23);
        assert_eq!(
            layout.left_option_area.width + layout.right_option_area.width,
            98
        );
        assert!(layout.left_option_area.x < layout.right_option_area.x);
    }

    #[test]
    fn test_result_layout() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = calculate_result_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.percent_area.height, 5);
        assert_eq!(layout.meter_area.height, 3);
        assert_eq!(layout.footer_area.height, 3);
        assert_eq!(layout.detail_area.height, 28 - 14);
    }
}
