use quill_buffer::view::Cell;
use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    action::RedrawLevel, error::AppError, highlight::SyntaxHighlighter, model::Model,
    terminal::TerminalWrapper,
};

mod messageline;
mod statusline;

/// Keeps the projected cells of the last full redraw, so a cursor only
/// redraw skips highlighting and projection.
#[derive(Default)]
pub struct Renderer {
    highlighter: SyntaxHighlighter,
    rows: Vec<Vec<Cell>>,
}

impl Renderer {
    pub fn render(
        &mut self,
        terminal: &mut TerminalWrapper,
        model: &Model,
        message: Option<&str>,
        level: RedrawLevel,
    ) -> Result<(), AppError> {
        if level == RedrawLevel::None {
            return Ok(());
        }

        if level == RedrawLevel::Full {
            let viewport = &model.viewport;
            let highlights = self
                .highlighter
                .highlight(&model.text.buffer, viewport.last_visible_line());

            self.rows = quill_buffer::view(viewport, &model.text, &highlights, &model.color_scheme);
        }

        let lines = get_lines(&self.rows);
        terminal.draw(|frame| {
            let layout = get_layout(frame.area(), model);

            frame.render_widget(Paragraph::new(lines), layout[0]);
            statusline::view(model, frame, layout[1]);
            messageline::view(message, frame, layout[3]);

            if let Some(position) = model.viewport.cursor_position(&model.text) {
                frame.set_cursor_position(position);
            }
        })
    }
}

fn get_layout(area: Rect, model: &Model) -> Vec<Rect> {
    let viewport = &model.viewport;
    let height = u16::try_from(viewport.height).unwrap_or(u16::MAX);
    let width = u16::try_from(viewport.width).unwrap_or(u16::MAX);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(height),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let mut result = rows.to_vec();
    result[0].width = result[0].width.min(width);
    result
}

/// Joins neighbouring cells of equal style into spans.
fn get_lines(rows: &[Vec<Cell>]) -> Vec<Line<'static>> {
    rows.iter()
        .map(|row| {
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut content = String::new();
            let mut current = None;

            for cell in row {
                if current.is_some_and(|style| style != cell.style) {
                    if let Some(style) = current {
                        spans.push(Span::styled(std::mem::take(&mut content), style));
                    }
                }

                current = Some(cell.style);
                content.push(cell.symbol);
            }

            if let Some(style) = current {
                spans.push(Span::styled(content, style));
            }

            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use quill_buffer::view::Cell;
    use ratatui::style::{Color, Style};

    use super::get_lines;

    #[test]
    fn equal_styles_are_merged() {
        let red = Style::default().fg(Color::Red);
        let row = vec![
            Cell::new('a', Style::default()),
            Cell::new('b', Style::default()),
            Cell::new('c', red),
            Cell::new('d', Style::default()),
        ];

        let lines = get_lines(&[row]);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 3);
        assert_eq!(lines[0].spans[0].content, "ab");
        assert_eq!(lines[0].spans[1].style, red);
    }

    #[test]
    fn empty_row_has_no_spans() {
        let lines = get_lines(&[Vec::new()]);
        assert!(lines[0].spans.is_empty());
    }
}
