//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, handler signatures)
//!     → AppConfig (validated, immutable)
//!     → loader::build_router (RouterConfig + StaticRegistry)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → http server rebuilds the router
//!     → atomic swap of Arc<Router>
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields except the namespace have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - A rejected reload keeps the router that is already serving

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{build_router, load_config, parse_config, ConfigError};
pub use schema::{AppConfig, HandlerConfig, ObservabilityConfig, ParamConfig, RouterSettings, ServerConfig};
pub use validation::ValidationError;
pub use watcher::{ConfigWatcher, HandlerChanges};
