use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    capability::{
        actions,
        error::{
            ValidationError, param_out_of_bounds, premium_required, unknown_action, unknown_agent,
        },
    },
    types::{AgentId, DecisionRequest},
};

/// Inclusive numeric bounds applied to any parameter carrying the bound's
/// name, regardless of which agent or action the request targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ParamBounds {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl ParamBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if let Some(min) = self.min
            && value < min
        {
            return false;
        }
        if let Some(max) = self.max
            && value > max
        {
            return false;
        }
        true
    }
}

/// Static whitelist of agents, per-agent actions, parameter bounds, and
/// premium-gated actions. Pure data plus the `validate` check; holds no
/// mutable state.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRegistry {
    actions: BTreeMap<AgentId, BTreeSet<String>>,
    param_bounds: BTreeMap<String, ParamBounds>,
    premium_actions: BTreeSet<String>,
}

impl CapabilityRegistry {
    /// The production capability surface: all seven agents, their action
    /// whitelists, the shared numeric bounds, and the premium gate set.
    pub fn standard() -> Self {
        let mut registry = Self::default();

        registry.allow(AgentId::MealPlanAgent, actions::GENERATE_SUGGESTION);
        registry.allow(AgentId::CoachProactive, actions::GENERATE_SUPPORT_MESSAGE);
        registry.allow(AgentId::GamificationService, actions::AWARD_POINTS);
        registry.allow(AgentId::GamificationService, actions::GET_PROGRESS);
        registry.allow(AgentId::ChallengesService, actions::SUGGEST_CHALLENGE);
        registry.allow(AgentId::ChallengesService, actions::JOIN_CHALLENGE);
        registry.allow(AgentId::WellnessProgram, actions::SUGGEST_BREATHING);
        registry.allow(AgentId::WellnessProgram, actions::SUGGEST_MEDITATION);
        registry.allow(AgentId::WellnessProgram, actions::SUGGEST_HYDRATION);
        registry.allow(AgentId::ProgressAnalytics, actions::SUMMARIZE);
        registry.allow(AgentId::ProgressAnalytics, actions::PATTERN_INSIGHTS);
        registry.allow(AgentId::NotificationsService, actions::SCHEDULE_REMINDER);

        registry.bound(actions::params::CALORIES_BUDGET, ParamBounds::new(0.0, 5000.0));
        registry.bound(actions::params::DURATION_MINUTES, ParamBounds::new(1.0, 120.0));
        registry.bound(actions::params::POINTS, ParamBounds::new(0.0, 1000.0));
        registry.bound(actions::params::STRESS_LEVEL, ParamBounds::new(0.0, 10.0));
        registry.bound(actions::params::HOUR, ParamBounds::new(0.0, 23.0));
        registry.bound(actions::params::DAYS, ParamBounds::new(1.0, 90.0));

        registry.gate(actions::JOIN_CHALLENGE);
        registry.gate(actions::SCHEDULE_REMINDER);

        registry
    }

    pub fn allow(&mut self, agent: AgentId, action: impl Into<String>) {
        self.actions.entry(agent).or_default().insert(action.into());
    }

    pub fn bound(&mut self, param_name: impl Into<String>, bounds: ParamBounds) {
        self.param_bounds.insert(param_name.into(), bounds);
    }

    pub fn gate(&mut self, action: impl Into<String>) {
        self.premium_actions.insert(action.into());
    }

    pub fn is_premium_action(&self, action: &str) -> bool {
        self.premium_actions.contains(action)
    }

    pub fn param_bounds(&self, param_name: &str) -> Option<ParamBounds> {
        self.param_bounds.get(param_name).copied()
    }

    /// Every whitelisted `(agent, action)` route, in deterministic order.
    /// The orchestrator checks handler coverage against this at startup.
    pub fn routes(&self) -> impl Iterator<Item = (AgentId, &str)> {
        self.actions.iter().flat_map(|(agent, action_set)| {
            action_set.iter().map(|action| (*agent, action.as_str()))
        })
    }

    /// Security boundary check for one request, short-circuiting in order:
    /// agent known, action whitelisted for that agent, every numeric
    /// parameter within its registered bounds, entitlement for gated actions.
    pub fn validate(
        &self,
        request: &DecisionRequest,
        is_premium: bool,
    ) -> Result<(), ValidationError> {
        let Some(allowed) = self.actions.get(&request.agent) else {
            return Err(unknown_agent(format!(
                "agent '{}' is not registered",
                request.agent,
            )));
        };

        if !allowed.contains(request.action.as_str()) {
            return Err(unknown_action(format!(
                "action '{}' is not whitelisted for agent '{}'",
                request.action, request.agent,
            )));
        }

        for (name, value) in &request.params {
            let Some(value) = value.as_numeric() else {
                continue;
            };
            if let Some(bounds) = self.param_bounds.get(name)
                && !bounds.contains(value)
            {
                return Err(param_out_of_bounds(format!(
                    "parameter '{}' = {} is outside [{}, {}]",
                    name,
                    value,
                    bounds.min.map_or("-inf".to_string(), |v| v.to_string()),
                    bounds.max.map_or("+inf".to_string(), |v| v.to_string()),
                )));
            }
        }

        if self.premium_actions.contains(request.action.as_str()) && !is_premium {
            return Err(premium_required(format!(
                "action '{}' requires a premium entitlement",
                request.action,
            )));
        }

        Ok(())
    }
}
