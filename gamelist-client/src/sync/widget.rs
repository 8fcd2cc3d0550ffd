//! Widget state machine for the add, edit and delete interactions

use shared::validation::FieldErrors;

/// Identifies one interactive widget of a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKey {
    /// "Add game" dialog
    Add,
    /// Edit dialog of one game
    Edit(i64),
    /// Delete button of one game
    Delete(i64),
}

impl WidgetKey {
    /// The game this widget belongs to, if any
    pub fn game_id(&self) -> Option<i64> {
        match self {
            Self::Add => None,
            Self::Edit(id) | Self::Delete(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// Client-side validation failed
    Fields(FieldErrors),
    /// The server rejected the submission
    Submit(String),
}

impl WidgetError {
    pub fn message(&self) -> String {
        match self {
            WidgetError::Fields(fields) => fields.joined_message(),
            WidgetError::Submit(msg) => msg.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Idle,
    Editing,
    Submitting,
    Error(WidgetError),
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Open,
    Submit,
    Reject(FieldErrors),
    Resolve(Result<(), String>),
    Close,
}

impl WidgetState {
    /// Next state for `event`; unlisted combinations keep the current state.
    pub fn next(self, event: WidgetEvent) -> WidgetState {
        use WidgetState::*;
        match (self, event) {
            (Idle | Succeeded | Error(_), WidgetEvent::Open) => Editing,
            (_, WidgetEvent::Submit) => Submitting,
            (Submitting, WidgetEvent::Reject(errors)) => {
                tracing::debug!(fields = errors.len(), "Ignoring field errors while submitting");
                Submitting
            }
            (_, WidgetEvent::Reject(errors)) => Error(WidgetError::Fields(errors)),
            (Submitting, WidgetEvent::Resolve(Ok(()))) => Succeeded,
            (Submitting, WidgetEvent::Resolve(Err(msg))) => Error(WidgetError::Submit(msg)),
            (Submitting, WidgetEvent::Close) => Submitting,
            (_, WidgetEvent::Close) => Idle,
            (state, _) => state,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, WidgetState::Submitting)
    }

    /// Whether the dialog is shown
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            WidgetState::Editing | WidgetState::Submitting | WidgetState::Error(_)
        )
    }

    pub fn error(&self) -> Option<&WidgetError> {
        match self {
            WidgetState::Error(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_errors() -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.add("name", "Game name is required");
        errors
    }

    #[test]
    fn test_happy_path() {
        let state = WidgetState::Idle
            .next(WidgetEvent::Open)
            .next(WidgetEvent::Submit);
        assert!(state.is_submitting());
        let state = state.next(WidgetEvent::Resolve(Ok(())));
        assert_eq!(state, WidgetState::Succeeded);
        assert!(!state.is_open());
        assert_eq!(state.next(WidgetEvent::Open), WidgetState::Editing);
    }

    #[test]
    fn test_second_submit_is_ignored() {
        let state = WidgetState::Editing.next(WidgetEvent::Submit);
        let again = state.clone().next(WidgetEvent::Submit);
        assert_eq!(again, WidgetState::Submitting);
        // close and reject cannot interrupt an in-flight request
        assert_eq!(again.clone().next(WidgetEvent::Close), WidgetState::Submitting);
        assert_eq!(
            again.next(WidgetEvent::Reject(field_errors())),
            WidgetState::Submitting
        );
    }

    #[test]
    fn test_reject_and_retry() {
        let state = WidgetState::Editing.next(WidgetEvent::Reject(field_errors()));
        assert_eq!(
            state.error().map(WidgetError::message).as_deref(),
            Some("Game name is required")
        );
        assert!(state.is_open());
        assert!(state.next(WidgetEvent::Submit).is_submitting());
    }

    #[test]
    fn test_submit_failure_keeps_message() {
        let state = WidgetState::Submitting.next(WidgetEvent::Resolve(Err(
            "Game not found or you don't have permission".into(),
        )));
        assert_eq!(
            state,
            WidgetState::Error(WidgetError::Submit(
                "Game not found or you don't have permission".into()
            ))
        );
        assert_eq!(state.next(WidgetEvent::Close), WidgetState::Idle);
    }

    #[test]
    fn test_unlisted_transitions_keep_state() {
        assert_eq!(WidgetState::Idle.next(WidgetEvent::Resolve(Ok(()))), WidgetState::Idle);
        assert_eq!(WidgetState::Editing.next(WidgetEvent::Open), WidgetState::Editing);
        assert_eq!(
            WidgetState::Succeeded.next(WidgetEvent::Resolve(Err("x".into()))),
            WidgetState::Succeeded
        );
        // delete buttons submit straight from idle
        assert!(WidgetState::Idle.next(WidgetEvent::Submit).is_submitting());
    }

    #[test]
    fn test_key_game_id() {
        assert_eq!(WidgetKey::Add.game_id(), None);
        assert_eq!(WidgetKey::Edit(4).game_id(), Some(4));
        assert_eq!(WidgetKey::Delete(9).game_id(), Some(9));
    }
}
