// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Disconnected,
    /// Persisted session markers were found and the session is being re-established. The main
    /// UI must not be shown in this state.
    Restoring,
    Connecting,
    Connected,
    /// Connecting failed or the connection was lost. There is no automatic retry.
    Failed { message: String },
}

impl SessionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, SessionStatus::Connected)
    }
}
