/// How much of the screen has to be painted after an event. Levels are
/// ordered so two results combine by taking the maximum.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub enum RedrawLevel {
    #[default]
    None = 0,
    CursorOnly = 1,
    Full = 2,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DispatchResult {
    Quit,
    Redraw(RedrawLevel),
}

impl From<RedrawLevel> for DispatchResult {
    fn from(level: RedrawLevel) -> Self {
        DispatchResult::Redraw(level)
    }
}
