mod rules;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    context::ContextSnapshot,
    types::{AgentId, DecisionRequest, Signal},
};

fn default_stress_breathing_threshold() -> f64 {
    6.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Stress level (0-10) above which an emotional-state signal also emits
    /// a breathing suggestion.
    #[serde(default = "default_stress_breathing_threshold")]
    pub stress_breathing_threshold: f64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            stress_breathing_threshold: default_stress_breathing_threshold(),
        }
    }
}

/// Pure transformation from signals to a deduplicated, priority-sorted list
/// of decision requests. Holds no cross-call state.
#[derive(Debug, Clone, Default)]
pub struct DecisionBridge {
    config: BridgeConfig,
}

impl DecisionBridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    pub fn process_signals(
        &self,
        signals: &[Signal],
        context: &ContextSnapshot,
    ) -> Vec<DecisionRequest> {
        let mut proposals = Vec::new();
        for signal in signals {
            if !signal.actionable {
                tracing::debug!(
                    target: "bridge",
                    kind = signal.payload.kind_name(),
                    "signal_not_actionable"
                );
                continue;
            }
            let emitted = rules::requests_for(signal, context, &self.config);
            tracing::debug!(
                target: "bridge",
                kind = signal.payload.kind_name(),
                priority = ?signal.priority,
                emitted = emitted.len(),
                "signal_processed"
            );
            proposals.extend(emitted);
        }

        let deduplicated = dedup_by_route(proposals);
        sort_by_rank_stable(deduplicated)
    }
}

/// Collapses duplicate `(agent, action)` proposals. The strictly lower rank
/// wins; on equal rank the first-seen proposal is kept. The surviving
/// request keeps the slot of the first occurrence so encounter order stays
/// meaningful for the final stable sort.
fn dedup_by_route(proposals: Vec<DecisionRequest>) -> Vec<DecisionRequest> {
    let mut kept: Vec<DecisionRequest> = Vec::with_capacity(proposals.len());
    let mut slot_by_route: BTreeMap<(AgentId, String), usize> = BTreeMap::new();

    for proposal in proposals {
        let route = (proposal.agent, proposal.action.clone());
        match slot_by_route.get(&route) {
            None => {
                slot_by_route.insert(route, kept.len());
                kept.push(proposal);
            }
            Some(&slot) => {
                if proposal.priority.rank() < kept[slot].priority.rank() {
                    tracing::debug!(
                        target: "bridge",
                        agent = %proposal.agent,
                        action = %proposal.action,
                        winner = ?proposal.priority,
                        loser = ?kept[slot].priority,
                        "duplicate_route_collapsed"
                    );
                    kept[slot] = proposal;
                }
            }
        }
    }

    kept
}

fn sort_by_rank_stable(mut requests: Vec<DecisionRequest>) -> Vec<DecisionRequest> {
    requests.sort_by_key(|request| request.priority.rank());
    requests
}
