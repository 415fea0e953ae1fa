pub mod aggregate;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod types;

pub use dispatch::{DecisionHandler, HandlerTable, RouteKey};
pub use error::{OrchestratorError, OrchestratorErrorKind};
pub use executor::Orchestrator;
pub use types::{DecisionData, DecisionResult, OrchestratorResult};
