use std::fmt;

use thiserror::Error;

use crate::backend::BackendError;
use crate::catalog::ValidationError;

/// An admin mutation, named for notices and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    CreateGame,
    UpdateGame,
    DeleteGame,
    CreateCategory,
    DeleteCategory,
    UpdateSiteConfig,
}

impl AdminAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminAction::CreateGame => "add game",
            AdminAction::UpdateGame => "update game",
            AdminAction::DeleteGame => "delete game",
            AdminAction::CreateCategory => "add category",
            AdminAction::DeleteCategory => "delete category",
            AdminAction::UpdateSiteConfig => "save site configuration",
        }
    }

    /// Confirmation shown after the backend acknowledged the action.
    pub fn success_notice(&self) -> &'static str {
        match self {
            AdminAction::CreateGame => "Game added.",
            AdminAction::UpdateGame => "Game updated.",
            AdminAction::DeleteGame => "Game deleted.",
            AdminAction::CreateCategory => "Category added.",
            AdminAction::DeleteCategory => "Category deleted.",
            AdminAction::UpdateSiteConfig => "Site configuration saved.",
        }
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an admin mutation did not happen. Local state is unchanged in both cases.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Rejected locally; no request was sent.
    #[error("Cannot {action}: {source}")]
    Validation {
        action: AdminAction,
        #[source]
        source: ValidationError,
    },

    /// The backend request failed or returned a non-success status.
    #[error("Failed to {action}: {source}")]
    Operation {
        action: AdminAction,
        #[source]
        source: BackendError,
    },
}

impl PortalError {
    pub fn action(&self) -> AdminAction {
        match self {
            PortalError::Validation { action, .. } | PortalError::Operation { action, .. } => {
                *action
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PortalError::Validation { .. })
    }

    /// The validation failure, if this error is one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            PortalError::Validation { source, .. } => Some(source),
            PortalError::Operation { .. } => None,
        }
    }
}
