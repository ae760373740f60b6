use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let name = get_name_content(model);
    let position = get_position_content(model);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(name.width() as u16),
            Constraint::Length(position.width() as u16),
        ])
        .split(rect);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        rect,
    );

    frame.render_widget(Paragraph::new(name), layout[0]);
    frame.render_widget(Paragraph::new(position), layout[1]);
}

fn get_name_content(model: &Model) -> Line<'static> {
    let buffer = &model.text.buffer;
    let name = if buffer.name.is_empty() {
        String::from("No name")
    } else {
        buffer.name.clone()
    };

    let mut content = vec![Span::styled(name, Style::default().fg(Color::Gray))];
    if buffer.is_dirty() {
        content.push(Span::styled(" +", Style::default().fg(Color::Yellow)));
    }

    Line::from(content)
}

fn get_position_content(model: &Model) -> Line<'static> {
    let cursor = &model.text.cursor;
    Line::from(Span::styled(
        format!("{},{} ", cursor.y + 1, cursor.x + 1),
        Style::default().fg(Color::Gray),
    ))
}

#[cfg(test)]
mod tests {
    use quill_buffer::model::{Buffer, TextBuffer};

    use crate::{model::Model, settings::Settings};

    use super::{get_name_content, get_position_content};

    #[test]
    fn unnamed_dirty_buffer() {
        let mut model = Model::new(TextBuffer::new(Buffer::default()), &Settings::default());
        model.text.insert(0, "ab\ncd");

        assert_eq!(get_name_content(&model).to_string(), "No name +");
        assert_eq!(get_position_content(&model).to_string(), "2,3 ");
    }
}
