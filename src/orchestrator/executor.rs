use std::{sync::Arc, time::Duration, time::Instant};

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{
    capability::CapabilityRegistry,
    collaborators::Collaborators,
    config::OrchestratorRuntimeConfig,
    context::ContextSnapshot,
    orchestrator::{
        aggregate,
        dispatch::{HandlerTable, RouteKey},
        error::{OrchestratorError, timeout},
        handlers::{
            AnalyticsHandler, ChallengesHandler, CoachHandler, GamificationHandler,
            MealPlanHandler, NotificationsHandler, WellnessHandler,
        },
        types::{DecisionResult, OrchestratorResult},
    },
    types::{AgentId, DecisionRequest},
};

/// Executes a validated, priority-ordered decision batch against the
/// registered handlers. Strictly sequential: each request is awaited before
/// the next starts, so side effects land in priority order.
pub struct Orchestrator {
    registry: CapabilityRegistry,
    handlers: HandlerTable,
    default_timeout: Duration,
    max_batch_size: usize,
}

impl Orchestrator {
    /// Accepts a table only if it covers the whitelist exactly.
    pub fn new(
        registry: CapabilityRegistry,
        handlers: HandlerTable,
        config: OrchestratorRuntimeConfig,
    ) -> Result<Self, OrchestratorError> {
        handlers.verify_against(&registry)?;
        Ok(Self {
            registry,
            handlers,
            default_timeout: Duration::from_millis(config.default_timeout_ms),
            max_batch_size: config.max_batch_size,
        })
    }

    /// Production wiring: the standard registry plus the seven per-agent
    /// handlers over the injected collaborator set.
    pub fn standard(
        collaborators: Collaborators,
        config: OrchestratorRuntimeConfig,
    ) -> Result<Self, OrchestratorError> {
        let registry = CapabilityRegistry::standard();
        let mut handlers = HandlerTable::new();

        let meal = Arc::new(MealPlanHandler::new(collaborators.meal_generator));
        let coach = Arc::new(CoachHandler::new(collaborators.coach));
        let gamification = Arc::new(GamificationHandler::new(collaborators.gamification));
        let challenges = Arc::new(ChallengesHandler::new(collaborators.challenges));
        let wellness = Arc::new(WellnessHandler::new(collaborators.wellness));
        let analytics = Arc::new(AnalyticsHandler::new(collaborators.analytics));
        let notifications = Arc::new(NotificationsHandler::new(collaborators.notifications));

        for (agent, action) in registry.routes() {
            let handler: Arc<dyn crate::orchestrator::dispatch::DecisionHandler> = match agent {
                AgentId::MealPlanAgent => meal.clone(),
                AgentId::CoachProactive => coach.clone(),
                AgentId::GamificationService => gamification.clone(),
                AgentId::ChallengesService => challenges.clone(),
                AgentId::WellnessProgram => wellness.clone(),
                AgentId::ProgressAnalytics => analytics.clone(),
                AgentId::NotificationsService => notifications.clone(),
            };
            handlers.register(RouteKey::new(agent, action), handler)?;
        }

        Self::new(registry, handlers, config)
    }

    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    /// Contract: one `DecisionResult` per input request, in input order.
    /// Validation rejections, handler failures, and timeouts are all scoped
    /// to their own request; nothing here aborts the batch.
    pub async fn execute_decisions(
        &self,
        requests: &[DecisionRequest],
        context: &ContextSnapshot,
    ) -> OrchestratorResult {
        let batch_id = Uuid::now_v7().to_string();
        tracing::debug!(
            target: "orchestrator",
            batch_id = %batch_id,
            request_count = requests.len(),
            is_premium = context.is_premium,
            "batch_started"
        );

        let mut results = Vec::with_capacity(requests.len());
        for (index, request) in requests.iter().enumerate() {
            let request_id = derive_request_id(&batch_id, index, request);

            // Requests are already priority-sorted, so the cap drops the
            // least urgent tail.
            if index >= self.max_batch_size {
                tracing::warn!(
                    target: "orchestrator",
                    batch_id = %batch_id,
                    request_id = %request_id,
                    agent = %request.agent,
                    action = %request.action,
                    max_batch_size = self.max_batch_size,
                    "batch_limit_exceeded"
                );
                results.push(DecisionResult::failed(
                    request_id,
                    request,
                    format!("batch limit of {} requests exceeded", self.max_batch_size),
                    0,
                ));
                continue;
            }

            if let Err(validation) = self.registry.validate(request, context.is_premium) {
                tracing::warn!(
                    target: "orchestrator",
                    batch_id = %batch_id,
                    request_id = %request_id,
                    agent = %request.agent,
                    action = %request.action,
                    kind = ?validation.kind,
                    reason = %validation.message,
                    "request_rejected"
                );
                results.push(DecisionResult::rejected(request_id, request, &validation));
                continue;
            }

            results.push(self.dispatch_one(&batch_id, request_id, request, context).await);
        }

        let outcome = aggregate::assemble(results);
        tracing::debug!(
            target: "orchestrator",
            batch_id = %batch_id,
            success = outcome.success,
            summary = %outcome.summary,
            "batch_completed"
        );
        outcome
    }

    async fn dispatch_one(
        &self,
        batch_id: &str,
        request_id: String,
        request: &DecisionRequest,
        context: &ContextSnapshot,
    ) -> DecisionResult {
        let Some(handler) = self.handlers.resolve(request.agent, &request.action) else {
            // Unreachable with a verified table; still isolated per request.
            return DecisionResult::failed(
                request_id,
                request,
                format!("no handler for route {}/{}", request.agent, request.action),
                0,
            );
        };

        let budget = request
            .timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(self.default_timeout);
        let started_at = Instant::now();

        let outcome = tokio::time::timeout(budget, handler.handle(request, context)).await;
        let elapsed_ms = started_at.elapsed().as_millis() as u64;

        match outcome {
            Ok(Ok(data)) => {
                tracing::debug!(
                    target: "orchestrator",
                    batch_id = %batch_id,
                    request_id = %request_id,
                    agent = %request.agent,
                    action = %request.action,
                    elapsed_ms,
                    "request_succeeded"
                );
                DecisionResult::succeeded(request_id, request, data, elapsed_ms)
            }
            Ok(Err(err)) => {
                tracing::warn!(
                    target: "orchestrator",
                    batch_id = %batch_id,
                    request_id = %request_id,
                    agent = %request.agent,
                    action = %request.action,
                    kind = ?err.kind,
                    error = %err.message,
                    elapsed_ms,
                    "request_failed"
                );
                DecisionResult::failed(request_id, request, err.message, elapsed_ms)
            }
            Err(_elapsed) => {
                let err = timeout(format!(
                    "handler exceeded its {}ms budget",
                    budget.as_millis(),
                ));
                tracing::warn!(
                    target: "orchestrator",
                    batch_id = %batch_id,
                    request_id = %request_id,
                    agent = %request.agent,
                    action = %request.action,
                    kind = ?err.kind,
                    budget_ms = budget.as_millis() as u64,
                    "request_timed_out"
                );
                DecisionResult::failed(request_id, request, err.message, elapsed_ms)
            }
        }
    }
}

/// Deterministic per-request id: stable for a given batch id, position, and
/// route, so logs from retried turns line up.
pub fn derive_request_id(batch_id: &str, index: usize, request: &DecisionRequest) -> String {
    let mut hasher = Sha256::new();
    hasher.update(batch_id.as_bytes());
    hasher.update(index.to_be_bytes());
    hasher.update(request.agent.as_str().as_bytes());
    hasher.update(request.action.as_bytes());
    let digest = hasher.finalize();
    let hex = format!("{digest:x}");
    format!("req:{}", &hex[..24])
}
