use action::{DispatchResult, RedrawLevel};
use clipboard::SystemClipboard;
use error::AppError;
use messenger::TerminalMessenger;
use model::Model;
use quill_buffer::model::TextBuffer;
use quill_keymap::{conversion, message::InputEvent};
use settings::Settings;
use terminal::TerminalWrapper;
use update::Environment;
use view::Renderer;

pub mod action;
pub mod clipboard;
pub mod error;
mod highlight;
pub mod messenger;
pub mod model;
pub mod open;
pub mod settings;
mod terminal;
pub mod update;
mod view;

/// Runs the editor until the user quits. Events are read and handled one at
/// a time and the screen is painted after each of them as far as required.
pub fn run(settings: Settings) -> Result<(), AppError> {
    let text = match &settings.startup_path {
        Some(path) => open::read_startup_file(path)?,
        None => TextBuffer::default(),
    };

    let mut model = Model::new(text, &settings);
    let mut clipboard = SystemClipboard::new();
    let mut messenger = TerminalMessenger::default();
    let mut renderer = Renderer::default();

    let mut terminal = TerminalWrapper::start()?;

    let (width, height) = crossterm::terminal::size()?;
    update::update(
        &mut model,
        &mut Environment {
            clipboard: &mut clipboard,
            messenger: &mut messenger,
        },
        &InputEvent::Resize(width, height),
    );
    renderer.render(&mut terminal, &model, messenger.message(), RedrawLevel::Full)?;

    tracing::debug!("starting with model state: {:?}", model);

    loop {
        let event = crossterm::event::read()?;
        let event = match conversion::to_input_event(&event) {
            Some(it) => it,
            None => continue,
        };

        let had_message = messenger.message().is_some();
        messenger.clear_message();

        let result = update::update(
            &mut model,
            &mut Environment {
                clipboard: &mut clipboard,
                messenger: &mut messenger,
            },
            &event,
        );

        let mut level = match result {
            DispatchResult::Quit => break,
            DispatchResult::Redraw(level) => level,
        };

        if messenger.take_invalidated() {
            terminal.clear()?;
            level = RedrawLevel::Full;
        } else if had_message || messenger.message().is_some() {
            level = level.max(RedrawLevel::CursorOnly);
        }

        renderer.render(&mut terminal, &model, messenger.message(), level)?;
    }

    terminal.shutdown()
}
