//! Framework-agnostic command dispatch.
//!
//! A view layer binds its widgets to [`Command`]s and renders from
//! [`Portal::state`] after each [`Outcome`].

use thiserror::Error;

use super::{AdminAction, Portal, PortalError};
use crate::access::GateError;
use crate::catalog::{CategoryId, GameDraft, GameId, LaunchTarget, SiteConfig};

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    SelectCategory(String),
    Launch(GameId),
    OpenGate,
    CloseGate,
    SubmitPin(String),
    CloseAdmin,
    CreateGame(GameDraft),
    UpdateGame(GameId, GameDraft),
    DeleteGame(GameId),
    CreateCategory(String),
    DeleteCategory(CategoryId),
    UpdateSiteConfig(SiteConfig),
}

impl Command {
    /// Whether the command needs the admin surface to be open.
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Command::CreateGame(_)
                | Command::UpdateGame(..)
                | Command::DeleteGame(_)
                | Command::CreateCategory(_)
                | Command::DeleteCategory(_)
                | Command::UpdateSiteConfig(_)
        )
    }
}

/// What changed after a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A filter input changed.
    Refiltered,
    /// Open the game player.
    Launch(LaunchTarget),
    /// The command targeted something that does not exist; nothing changed.
    Ignored,
    /// The PIN dialog or the admin surface opened or closed.
    GateChanged,
    /// An admin mutation was acknowledged by the backend.
    Done {
        action: AdminAction,
        notice: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("The admin surface is locked")]
    AdminLocked,

    #[error(transparent)]
    Gate(#[from] GateError),

    #[error(transparent)]
    Portal(#[from] PortalError),
}

impl Portal {
    /// Run one command against the portal.
    pub async fn dispatch(&mut self, command: Command) -> Result<Outcome, CommandError> {
        if command.requires_admin() && !self.gate.is_admin_open() {
            return Err(CommandError::AdminLocked);
        }

        let outcome = match command {
            Command::Search(query) => {
                self.set_search_query(query);
                Outcome::Refiltered
            }
            Command::SelectCategory(slug) => {
                self.select_category(slug);
                Outcome::Refiltered
            }
            Command::Launch(id) => match self.state.launch(id) {
                Some(target) => Outcome::Launch(target),
                None => Outcome::Ignored,
            },
            Command::OpenGate => {
                self.gate.open_dialog();
                Outcome::GateChanged
            }
            Command::CloseGate => {
                self.gate.close_dialog();
                Outcome::GateChanged
            }
            Command::SubmitPin(pin) => {
                self.gate.submit_pin(pin)?;
                Outcome::GateChanged
            }
            Command::CloseAdmin => {
                self.gate.close_admin();
                Outcome::GateChanged
            }
            Command::CreateGame(draft) => {
                self.create_game(draft).await?;
                done(AdminAction::CreateGame)
            }
            Command::UpdateGame(id, draft) => {
                self.update_game(id, draft).await?;
                done(AdminAction::UpdateGame)
            }
            Command::DeleteGame(id) => {
                self.delete_game(id).await?;
                done(AdminAction::DeleteGame)
            }
            Command::CreateCategory(name) => {
                self.create_category(&name).await?;
                done(AdminAction::CreateCategory)
            }
            Command::DeleteCategory(id) => {
                self.delete_category(id).await?;
                done(AdminAction::DeleteCategory)
            }
            Command::UpdateSiteConfig(update) => {
                self.update_site_config(update).await?;
                done(AdminAction::UpdateSiteConfig)
            }
        };

        Ok(outcome)
    }
}

fn done(action: AdminAction) -> Outcome {
    Outcome::Done {
        action,
        notice: action.success_notice(),
    }
}
