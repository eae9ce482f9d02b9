pub mod access;
pub mod backend;
pub mod catalog;
pub mod config;
pub mod portal;
pub mod testing;

pub use access::{AccessGate, GateError};
pub use backend::{BackendError, CatalogBackend, HttpBackend};
pub use catalog::{
    CatalogState, Category, CategoryId, CategoryTab, Game, GameCard, GameDraft, GameId,
    GamePayload, GameSize, GridView, LaunchTarget, NewCategory, SiteConfig, ValidationError,
    ALL_CATEGORIES, UNCATEGORIZED,
};
pub use config::{
    load_config, load_config_from_str, validate_config, AdminConfig, BackendConfig, Config,
    ConfigError, SanitizedConfig, SiteDefaultsConfig,
};
pub use portal::{AdminAction, Command, CommandError, Outcome, Portal, PortalError};
