//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, request target)
//!     → segments.rs (tokenize path into a cursor)
//!     → router.rs (walk segments, one candidate handler per segment)
//!         → translator.rs (method + resource names → handler name)
//!         → registry.rs (does a handler exist there? what does it take?)
//!         → coercion.rs (bind trailing segments as typed arguments)
//!     → Return: Outcome (found / not found / method not allowed)
//!
//! Router Construction (at startup):
//!     RouterConfig (namespace, naming rules, validators)
//!     + StaticRegistry (address → signature)
//!     → Freeze as immutable Router
//!
//! Route Listing (tooling):
//!     listing.rs (handler address → URL shape with placeholders)
//! ```
//!
//! # Design Decisions
//! - No route table: handler names are derived from the path by convention
//! - Plural/singular resource names select collection vs. item handlers
//! - Routers are immutable at runtime; resolution state is per call
//! - Not-found is an outcome, a broken handler hierarchy is an error

pub mod coercion;
pub mod config;
pub mod error;
pub mod inflector;
pub mod listing;
pub mod outcome;
pub mod registry;
pub mod route;
pub mod router;
pub mod segments;
pub mod signature;
pub mod translator;

pub use coercion::{coerce, CoercionError, ParamType, Value};
pub use config::RouterConfig;
pub use error::{InvalidConfig, RouteError, SignatureMismatch};
pub use inflector::{EnglishInflector, Inflector};
pub use listing::{list_routes, RouteListing};
pub use outcome::{Outcome, Resolution};
pub use registry::{HandlerRegistry, StaticRegistry};
pub use route::{HandlerAddress, Route};
pub use router::Router;
pub use segments::Segments;
pub use signature::{InvalidSignature, ParamKind, Parameter, Signature};
pub use translator::Translator;
