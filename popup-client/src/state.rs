#[derive(Debug, Clone, PartialEq)]
pub enum PopupState {
    Idle,
    Loading,
    Ready(Vec<String>),
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum PopupEvent {
    Submitted,
    Succeeded(Vec<String>),
    Failed(String),
    Cleared,
}

impl PopupState {
    pub fn apply(self, event: PopupEvent) -> PopupState {
        match (self, event) {
            (_, PopupEvent::Cleared) => PopupState::Idle,
            (_, PopupEvent::Submitted) => PopupState::Loading,
            (PopupState::Loading, PopupEvent::Succeeded(titles)) => PopupState::Ready(titles),
            (PopupState::Loading, PopupEvent::Failed(message)) => PopupState::Failed(message),
            // Settlement events outside of Loading are stale
            (state, _) => state,
        }
    }
}
