use ratatui::{
    prelude::Rect,
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

pub fn view(message: Option<&str>, frame: &mut Frame, rect: Rect) {
    if let Some(message) = message {
        let span = Span::styled(message, Style::default().fg(Color::Red));
        frame.render_widget(Paragraph::new(span), rect);
    }
}
