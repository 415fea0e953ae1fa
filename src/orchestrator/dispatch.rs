use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;

use crate::{
    capability::CapabilityRegistry,
    context::ContextSnapshot,
    orchestrator::{
        error::{OrchestratorError, duplicate_route, missing_handler, unknown_route},
        types::DecisionData,
    },
    types::{AgentId, DecisionRequest},
};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RouteKey {
    pub agent: AgentId,
    pub action: String,
}

impl RouteKey {
    pub fn new(agent: AgentId, action: impl Into<String>) -> Self {
        Self {
            agent,
            action: action.into(),
        }
    }
}

/// Adapter from a validated request to one collaborator call. Handlers read
/// the shared immutable context and may touch only their own collaborator's
/// state; they share no ordering guarantees beyond the batch order.
#[async_trait]
pub trait DecisionHandler: Send + Sync {
    async fn handle(
        &self,
        request: &DecisionRequest,
        context: &ContextSnapshot,
    ) -> Result<DecisionData, OrchestratorError>;
}

/// Explicit `(agent, action)` → handler registration table. Routes are
/// checked against the capability whitelist before the orchestrator accepts
/// the table, so adding an action without a handler fails at startup rather
/// than falling through at dispatch time.
#[derive(Default)]
pub struct HandlerTable {
    by_route: BTreeMap<RouteKey, Arc<dyn DecisionHandler>>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        route: RouteKey,
        handler: Arc<dyn DecisionHandler>,
    ) -> Result<(), OrchestratorError> {
        if self.by_route.contains_key(&route) {
            return Err(duplicate_route(format!(
                "route already registered: {}/{}",
                route.agent, route.action,
            )));
        }
        self.by_route.insert(route, handler);
        Ok(())
    }

    pub fn resolve(&self, agent: AgentId, action: &str) -> Option<Arc<dyn DecisionHandler>> {
        self.by_route
            .get(&RouteKey::new(agent, action))
            .map(Arc::clone)
    }

    /// Startup check: the table and the whitelist must describe the same
    /// route set in both directions.
    pub fn verify_against(&self, registry: &CapabilityRegistry) -> Result<(), OrchestratorError> {
        for (agent, action) in registry.routes() {
            if !self.by_route.contains_key(&RouteKey::new(agent, action)) {
                return Err(missing_handler(format!(
                    "whitelisted route {agent}/{action} has no handler",
                )));
            }
        }

        for route in self.by_route.keys() {
            let whitelisted = registry
                .routes()
                .any(|(agent, action)| agent == route.agent && action == route.action);
            if !whitelisted {
                return Err(unknown_route(format!(
                    "handler registered for non-whitelisted route {}/{}",
                    route.agent, route.action,
                )));
            }
        }

        Ok(())
    }
}
