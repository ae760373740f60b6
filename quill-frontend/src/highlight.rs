use quill_buffer::model::{style::HighlightMap, Buffer};
use ratatui::style::{Color, Style};
use syntect::{
    easy::HighlightLines,
    highlighting::{Theme, ThemeSet},
    parsing::{SyntaxReference, SyntaxSet},
};

const THEME: &str = "base16-ocean.dark";

pub struct SyntaxHighlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        let mut themes = ThemeSet::load_defaults();
        let theme = match themes.themes.remove(THEME) {
            Some(it) => it,
            None => {
                tracing::warn!("theme {} not found, highlighting without colors", THEME);
                Theme::default()
            }
        };

        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
        }
    }
}

impl SyntaxHighlighter {
    /// Styles every character offset from the buffer start up to the end of
    /// `last_line`. Highlighting has to start at the top to carry parser
    /// state across lines.
    pub fn highlight(&self, buffer: &Buffer, last_line: usize) -> HighlightMap {
        let mut result = HighlightMap::new();

        let syntax = match self.resolve_syntax(buffer) {
            Some(it) => it,
            None => return result,
        };

        tracing::trace!("highlighting with syntax {}", syntax.name);

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut offset = 0;
        for line in buffer.lines().iter().take(last_line + 1) {
            let line = format!("{}\n", line);
            let ranges = match highlighter.highlight_line(&line, &self.syntaxes) {
                Ok(it) => it,
                Err(error) => {
                    tracing::warn!("highlighting failed: {:?}", error);
                    return result;
                }
            };

            for (style, part) in ranges {
                let foreground = style.foreground;
                let style = Style::default().fg(Color::Rgb(
                    foreground.r,
                    foreground.g,
                    foreground.b,
                ));

                for _ in part.chars() {
                    result.insert(offset, style);
                    offset += 1;
                }
            }
        }

        result
    }

    fn resolve_syntax(&self, buffer: &Buffer) -> Option<&SyntaxReference> {
        let syntax = buffer.path.as_ref().and_then(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default();

            if let Some(syntax) = self.syntaxes.find_syntax_by_extension(&name) {
                return Some(syntax);
            }

            let ext = path
                .extension()
                .map(|e| e.to_string_lossy())
                .unwrap_or_default();

            self.syntaxes.find_syntax_by_extension(&ext)
        });

        let syntax = match syntax {
            Some(it) => Some(it),
            None => buffer
                .line(0)
                .and_then(|line| self.syntaxes.find_syntax_by_first_line(line)),
        };

        syntax.filter(|syntax| syntax.name != self.syntaxes.find_syntax_plain_text().name)
    }
}
