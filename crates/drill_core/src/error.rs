use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// An action (or tracker query) names a player that is not in the document.
    #[error("Unknown player '{id}'{}", action_suffix(.action_index))]
    UnknownPlayer { id: String, action_index: Option<usize> },

    #[error("Unknown cone gate '{id}'{}", action_suffix(.action_index))]
    UnknownGate { id: String, action_index: Option<usize> },

    #[error("Invalid drill document: {0}")]
    InvalidDocument(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

fn action_suffix(action_index: &Option<usize>) -> String {
    match action_index {
        Some(i) => format!(" in action {}", i + 1),
        None => String::new(),
    }
}

impl RenderError {
    pub fn unknown_player(id: impl Into<String>) -> Self {
        RenderError::UnknownPlayer { id: id.into(), action_index: None }
    }

    /// Attach the index of the action being processed when the error surfaced.
    pub fn at_action(self, index: usize) -> Self {
        match self {
            RenderError::UnknownPlayer { id, .. } => {
                RenderError::UnknownPlayer { id, action_index: Some(index) }
            }
            RenderError::UnknownGate { id, .. } => {
                RenderError::UnknownGate { id, action_index: Some(index) }
            }
            other => other,
        }
    }

    /// Contract violations point at a validator gap upstream, not at bad user input.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, RenderError::UnknownPlayer { .. } | RenderError::UnknownGate { .. })
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            RenderError::Deserialization(err.to_string())
        } else {
            RenderError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_player_message_includes_action_number() {
        let err = RenderError::unknown_player("A9").at_action(2);
        assert_eq!(err.to_string(), "Unknown player 'A9' in action 3");
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_unknown_player_without_action() {
        let err = RenderError::unknown_player("ZZ");
        assert_eq!(err.to_string(), "Unknown player 'ZZ'");
    }

    #[test]
    fn test_json_error_maps_to_deserialization() {
        let err: RenderError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, RenderError::Deserialization(_)));
        assert!(!err.is_contract_violation());
    }
}
