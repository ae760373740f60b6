use super::TextBuffer;

#[derive(Clone, Debug)]
pub struct WindowSettings {
    pub height_percent: f32,
    pub tab_size: usize,
    pub width_percent: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            height_percent: 1.0,
            tab_size: 4,
            width_percent: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ViewPort {
    pub height: usize,
    pub height_percent: f32,
    pub left_col: usize,
    pub line_number_width: usize,
    pub tab_size: usize,
    pub topline: usize,
    pub width: usize,
    pub width_percent: f32,
    pub x: u16,
    pub y: u16,
}

impl Default for ViewPort {
    fn default() -> Self {
        Self {
            height: 0,
            height_percent: 1.0,
            left_col: 0,
            line_number_width: 0,
            tab_size: 4,
            topline: 0,
            width: 0,
            width_percent: 1.0,
            x: 0,
            y: 0,
        }
    }
}

impl ViewPort {
    pub fn set(&mut self, settings: &WindowSettings) {
        self.height_percent = settings.height_percent;
        self.tab_size = settings.tab_size.max(1);
        self.width_percent = settings.width_percent;
    }

    /// Recomputes the visible rows and columns from the terminal size. One
    /// row is reserved for the message line and one for the status line.
    pub fn resize(&mut self, width: u16, height: u16) {
        let rows = i64::from(height) - 1;
        let visible = (rows as f32 * self.height_percent) as i64 - 1;

        self.height = usize::try_from(visible).unwrap_or(0);
        self.width = (f32::from(width) * self.width_percent).max(0.0) as usize;

        tracing::debug!(
            "resized viewport to {}x{} for terminal {}x{}",
            self.width,
            self.height,
            width,
            height
        );
    }

    pub fn get_content_width(&self) -> usize {
        self.width.saturating_sub(self.line_number_width)
    }

    pub fn update_line_number_width(&mut self, line_count: usize) {
        self.line_number_width = line_count.max(1).to_string().len() + 1;
    }

    pub fn last_visible_line(&self) -> usize {
        (self.topline + self.height).saturating_sub(1)
    }

    /// Screen cell of the cursor, or `None` if it is scrolled out of sight.
    pub fn cursor_position(&self, text: &TextBuffer) -> Option<(u16, u16)> {
        let cursor = &text.cursor;
        if cursor.y < self.topline || cursor.y >= self.topline + self.height {
            return None;
        }

        let visual = cursor.visual_column(&text.buffer, self.tab_size);
        if visual < self.left_col || visual >= self.left_col + self.get_content_width() {
            return None;
        }

        let column = self.line_number_width + visual - self.left_col;
        let row = cursor.y - self.topline;

        Some((
            self.x.saturating_add(u16::try_from(column).ok()?),
            self.y.saturating_add(u16::try_from(row).ok()?),
        ))
    }
}
