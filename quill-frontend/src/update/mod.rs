use quill_keymap::message::{InputEvent, MouseButton};

use crate::{
    action::{DispatchResult, RedrawLevel},
    clipboard::Clipboard,
    messenger::Messenger,
    model::Model,
};

mod clipboard;
mod file;
mod key;
mod mouse;

/// Collaborators the dispatch may call into while handling one event.
pub struct Environment<'a> {
    pub clipboard: &'a mut dyn Clipboard,
    pub messenger: &'a mut dyn Messenger,
}

/// Applies one input event to the model and reports what has to be painted.
/// Every event except a mouse release ends with the viewport following the
/// cursor.
#[tracing::instrument(skip(model, environment))]
pub fn update(
    model: &mut Model,
    environment: &mut Environment,
    event: &InputEvent,
) -> DispatchResult {
    let result = match event {
        InputEvent::Key(key) => match model.keymap.resolve(key) {
            Some(action) => key::update(model, environment, &action),
            None => {
                tracing::trace!("no binding for {}", key);
                DispatchResult::Redraw(RedrawLevel::None)
            }
        },
        InputEvent::Mouse(mouse) => {
            let level = mouse::update(model, mouse);
            if mouse.button == MouseButton::None {
                return DispatchResult::Redraw(level);
            }
            level.into()
        }
        InputEvent::Resize(width, height) => {
            model.viewport.resize(*width, *height);
            DispatchResult::Redraw(RedrawLevel::Full)
        }
    };

    match result {
        DispatchResult::Quit => DispatchResult::Quit,
        DispatchResult::Redraw(level) => {
            if quill_buffer::update_viewport_by_cursor(&mut model.viewport, &model.text) {
                DispatchResult::Redraw(RedrawLevel::Full)
            } else {
                DispatchResult::Redraw(level)
            }
        }
    }
}
