use std::collections::BTreeSet;

use nutria::{
    bridge::DecisionBridge,
    capability::actions,
    context::TimeOfDay,
    types::{AgentId, NutritionalReason, Priority, SignalPayload},
};

use crate::{context_at, signal};

#[test]
fn duplicate_meal_requests_collapse_to_higher_priority() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Midday);
    let signals = vec![
        signal(
            Priority::Low,
            SignalPayload::NutritionalNeed {
                reason: NutritionalReason::Hunger,
                hours_since_last_meal: None,
            },
        ),
        signal(
            Priority::High,
            SignalPayload::DecisionPoint {
                decision: "choix du dejeuner".to_string(),
            },
        ),
    ];

    let requests = bridge.process_signals(&signals, &context);
    let meal_requests: Vec<_> = requests
        .iter()
        .filter(|r| r.route() == (AgentId::MealPlanAgent, actions::GENERATE_SUGGESTION))
        .collect();

    assert_eq!(meal_requests.len(), 1, "duplicates must collapse");
    assert_eq!(meal_requests[0].priority, Priority::High);
}

#[test]
fn no_two_requests_share_a_route() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Evening);
    // Three signals all proposing a coach message, plus assorted others.
    let signals = vec![
        signal(
            Priority::Medium,
            SignalPayload::EmotionalState {
                mood: Some("fatigue".to_string()),
                stress_level: Some(8.0),
            },
        ),
        signal(Priority::Low, SignalPayload::MotivationLevel { score: 0.1 }),
        signal(
            Priority::High,
            SignalPayload::SupportNeeded { requested_aid: None },
        ),
        signal(
            Priority::Medium,
            SignalPayload::GoalAlignment { drift: 0.1 },
        ),
    ];

    let requests = bridge.process_signals(&signals, &context);
    let mut seen = BTreeSet::new();
    for request in &requests {
        assert!(
            seen.insert((request.agent, request.action.clone())),
            "duplicate route in output: {}/{}",
            request.agent,
            request.action,
        );
    }
}

#[test]
fn output_is_sorted_by_priority_rank() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Morning);
    let signals = vec![
        signal(Priority::Low, SignalPayload::GoalAlignment { drift: 0.0 }),
        signal(
            Priority::Critical,
            SignalPayload::SupportNeeded { requested_aid: None },
        ),
        signal(
            Priority::Medium,
            SignalPayload::NutritionalNeed {
                reason: NutritionalReason::Hunger,
                hours_since_last_meal: Some(3.0),
            },
        ),
    ];

    let requests = bridge.process_signals(&signals, &context);
    let ranks: Vec<u8> = requests.iter().map(|r| r.priority.rank()).collect();
    let mut sorted = ranks.clone();
    sorted.sort();
    assert_eq!(ranks, sorted, "output must be non-decreasing by rank");
    assert_eq!(requests[0].priority, Priority::Critical);
}

#[test]
fn equal_priority_collision_keeps_first_seen_params() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Midday);
    let signals = vec![
        signal(
            Priority::Medium,
            SignalPayload::NutritionalNeed {
                reason: NutritionalReason::Hunger,
                hours_since_last_meal: None,
            },
        ),
        signal(
            Priority::Medium,
            SignalPayload::DecisionPoint {
                decision: "gouter ou pas".to_string(),
            },
        ),
    ];

    let requests = bridge.process_signals(&signals, &context);
    let meal = requests
        .iter()
        .find(|r| r.route() == (AgentId::MealPlanAgent, actions::GENERATE_SUGGESTION))
        .expect("one meal request should survive");

    // The nutritional-need variant came first; the decision-point params
    // must not have overwritten it.
    assert!(meal.param_text("decision").is_none());
    assert!(meal.param_text("tags").is_some());
}
