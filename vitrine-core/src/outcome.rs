/// What the host should do with the event that produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventOutcome {
    /// Not ours. Let the event continue untouched.
    Ignored,
    /// State changed (or was re-rendered); the default action may proceed.
    Handled,
    /// Handled, and the browser default (scrolling, native submission) must
    /// be suppressed.
    PreventDefault,
}

impl EventOutcome {
    /// Whether the host must call `preventDefault`.
    pub fn should_prevent_default(&self) -> bool {
        matches!(self, EventOutcome::PreventDefault)
    }
}
