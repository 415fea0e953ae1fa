//! In-process decision core for a nutrition/wellness assistant: typed user
//! signals come in once per conversational turn, a rule table turns them
//! into a deduplicated, priority-ordered batch of action requests, a static
//! capability registry validates each against a whitelist, parameter bounds
//! and the premium entitlement, and the orchestrator dispatches them
//! sequentially to injected collaborator ports, folding everything into one
//! aggregated response.

pub mod bridge;
pub mod capability;
pub mod collaborators;
pub mod config;
pub mod context;
pub mod logging;
pub mod orchestrator;
pub mod types;

pub use bridge::{BridgeConfig, DecisionBridge};
pub use capability::CapabilityRegistry;
pub use collaborators::Collaborators;
pub use context::ContextSnapshot;
pub use orchestrator::{Orchestrator, OrchestratorResult};
pub use types::{AgentId, DecisionRequest, Priority, Signal, SignalPayload};
