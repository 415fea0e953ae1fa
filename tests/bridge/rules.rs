use nutria::{
    bridge::{BridgeConfig, DecisionBridge},
    capability::actions,
    context::TimeOfDay,
    types::{AgentId, NutritionalReason, Priority, SignalPayload, SupportAid},
};

use crate::{context_at, passive_signal, signal};

#[test]
fn non_actionable_signals_emit_nothing() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Midday);
    let signals = vec![
        passive_signal(SignalPayload::NutritionalNeed {
            reason: NutritionalReason::Hunger,
            hours_since_last_meal: Some(6.0),
        }),
        passive_signal(SignalPayload::EmotionalState {
            mood: None,
            stress_level: Some(9.0),
        }),
        passive_signal(SignalPayload::CelebrationMoment {
            milestone: "7 jours de suite".to_string(),
            magnitude: 7,
        }),
    ];

    assert!(bridge.process_signals(&signals, &context).is_empty());
}

#[test]
fn nutritional_need_derives_meal_params_from_context() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Morning);
    let signals = vec![signal(
        Priority::High,
        SignalPayload::NutritionalNeed {
            reason: NutritionalReason::Hunger,
            hours_since_last_meal: Some(6.0),
        },
    )];

    let requests = bridge.process_signals(&signals, &context);
    assert_eq!(requests.len(), 1);

    let meal = &requests[0];
    assert_eq!(meal.agent, AgentId::MealPlanAgent);
    assert_eq!(meal.action, actions::GENERATE_SUGGESTION);
    assert_eq!(meal.param_text("meal_type"), Some("breakfast"));
    assert_eq!(meal.param_integer(actions::params::CALORIES_BUDGET), Some(650));
    assert_eq!(meal.param_boolean("quick_prep"), Some(true));
    let tags = meal.param_text("tags").expect("tags should be derived");
    assert!(tags.contains("rassasiant"), "long gap should add a filling tag: {tags}");
}

#[test]
fn low_hydration_adds_secondary_hydration_suggestion() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Afternoon);
    let signals = vec![signal(
        Priority::Medium,
        SignalPayload::NutritionalNeed {
            reason: NutritionalReason::LowHydration,
            hours_since_last_meal: None,
        },
    )];

    let requests = bridge.process_signals(&signals, &context);
    let routes: Vec<(AgentId, &str)> = requests.iter().map(|r| r.route()).collect();
    assert!(routes.contains(&(AgentId::MealPlanAgent, actions::GENERATE_SUGGESTION)));
    assert!(routes.contains(&(AgentId::WellnessProgram, actions::SUGGEST_HYDRATION)));
}

#[test]
fn high_stress_emits_support_message_and_breathing() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Evening);
    let signals = vec![signal(
        Priority::High,
        SignalPayload::EmotionalState {
            mood: Some("anxieux".to_string()),
            stress_level: Some(8.0),
        },
    )];

    let requests = bridge.process_signals(&signals, &context);
    assert_eq!(requests.len(), 2);

    let routes: Vec<(AgentId, &str)> = requests.iter().map(|r| r.route()).collect();
    assert!(routes.contains(&(AgentId::CoachProactive, actions::GENERATE_SUPPORT_MESSAGE)));
    assert!(routes.contains(&(AgentId::WellnessProgram, actions::SUGGEST_BREATHING)));
}

#[test]
fn stress_at_threshold_emits_support_only() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Evening);
    let signals = vec![signal(
        Priority::Medium,
        SignalPayload::EmotionalState {
            mood: None,
            stress_level: Some(6.0),
        },
    )];

    let requests = bridge.process_signals(&signals, &context);
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].route(),
        (AgentId::CoachProactive, actions::GENERATE_SUPPORT_MESSAGE),
    );
}

#[test]
fn breathing_threshold_is_configurable() {
    let bridge = DecisionBridge::new(BridgeConfig {
        stress_breathing_threshold: 4.0,
    });
    let context = context_at(TimeOfDay::Midday);
    let signals = vec![signal(
        Priority::Medium,
        SignalPayload::EmotionalState {
            mood: None,
            stress_level: Some(5.0),
        },
    )];

    let requests = bridge.process_signals(&signals, &context);
    assert_eq!(requests.len(), 2, "threshold 4 should trigger breathing at 5");
}

#[test]
fn low_motivation_pairs_encouragement_with_easy_challenge() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Midday);
    let signals = vec![signal(
        Priority::Medium,
        SignalPayload::MotivationLevel { score: 0.2 },
    )];

    let requests = bridge.process_signals(&signals, &context);
    assert_eq!(requests.len(), 2);

    let coach = requests
        .iter()
        .find(|r| r.agent == AgentId::CoachProactive)
        .expect("coach request should be emitted");
    assert_eq!(coach.param_text("tone"), Some("encouragement"));

    let challenge = requests
        .iter()
        .find(|r| r.agent == AgentId::ChallengesService)
        .expect("challenge request should be emitted");
    assert_eq!(challenge.action, actions::SUGGEST_CHALLENGE);
    assert_eq!(challenge.param_text("difficulty"), Some("easy"));
}

#[test]
fn celebration_scales_points_and_adds_message() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Evening);
    let signals = vec![signal(
        Priority::High,
        SignalPayload::CelebrationMoment {
            milestone: "14 jours de suivi".to_string(),
            magnitude: 7,
        },
    )];

    let requests = bridge.process_signals(&signals, &context);
    let award = requests
        .iter()
        .find(|r| r.agent == AgentId::GamificationService)
        .expect("award request should be emitted");
    assert_eq!(award.action, actions::AWARD_POINTS);
    assert_eq!(award.param_integer(actions::params::POINTS), Some(70));
    assert_eq!(award.param_text("reason"), Some("14 jours de suivi"));

    let coach = requests
        .iter()
        .find(|r| r.agent == AgentId::CoachProactive)
        .expect("celebration message should be emitted");
    assert_eq!(coach.param_text("tone"), Some("celebration"));
}

#[test]
fn streak_at_risk_adds_reminder_request() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Evening);
    let signals = vec![signal(
        Priority::High,
        SignalPayload::HabitDeviation {
            pattern: "repas du soir saute".to_string(),
            streak_at_risk: true,
        },
    )];

    let requests = bridge.process_signals(&signals, &context);
    let routes: Vec<(AgentId, &str)> = requests.iter().map(|r| r.route()).collect();
    assert!(routes.contains(&(AgentId::ProgressAnalytics, actions::PATTERN_INSIGHTS)));
    assert!(routes.contains(&(AgentId::NotificationsService, actions::SCHEDULE_REMINDER)));

    let reminder = requests
        .iter()
        .find(|r| r.agent == AgentId::NotificationsService)
        .expect("reminder should be emitted");
    assert_eq!(reminder.param_integer(actions::params::HOUR), Some(20));
}

#[test]
fn goal_alignment_requests_weekly_summary() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Midday);
    let signals = vec![signal(
        Priority::Low,
        SignalPayload::GoalAlignment { drift: -0.3 },
    )];

    let requests = bridge.process_signals(&signals, &context);
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].route(),
        (AgentId::ProgressAnalytics, actions::SUMMARIZE),
    );
    assert_eq!(requests[0].param_text("period"), Some("weekly"));
}

#[test]
fn requested_meditation_aid_is_honored() {
    let bridge = DecisionBridge::default();
    let context = context_at(TimeOfDay::Night);
    let signals = vec![signal(
        Priority::Medium,
        SignalPayload::SupportNeeded {
            requested_aid: Some(SupportAid::Meditation),
        },
    )];

    let requests = bridge.process_signals(&signals, &context);
    let routes: Vec<(AgentId, &str)> = requests.iter().map(|r| r.route()).collect();
    assert!(routes.contains(&(AgentId::CoachProactive, actions::GENERATE_SUPPORT_MESSAGE)));
    assert!(routes.contains(&(AgentId::WellnessProgram, actions::SUGGEST_MEDITATION)));
}
