use crate::{
    bridge::BridgeConfig,
    capability::actions,
    context::{ContextSnapshot, TimeOfDay},
    types::{AgentId, DecisionRequest, NutritionalReason, Signal, SignalPayload, SupportAid},
};

/// Fixed rule table keyed by signal kind. Each rule derives zero or more
/// requests from the signal payload and the context snapshot; the bridge
/// owns dedup and ordering.
pub fn requests_for(
    signal: &Signal,
    context: &ContextSnapshot,
    config: &BridgeConfig,
) -> Vec<DecisionRequest> {
    match &signal.payload {
        SignalPayload::NutritionalNeed {
            reason,
            hours_since_last_meal,
        } => nutritional_need(signal, context, *reason, *hours_since_last_meal),
        SignalPayload::EmotionalState { mood, stress_level } => {
            emotional_state(signal, config, mood.as_deref(), *stress_level)
        }
        SignalPayload::MotivationLevel { score } => motivation_level(signal, *score),
        SignalPayload::KnowledgeGap { topic } => knowledge_gap(signal, topic),
        SignalPayload::DecisionPoint { decision } => decision_point(signal, context, decision),
        SignalPayload::HabitDeviation {
            pattern,
            streak_at_risk,
        } => habit_deviation(signal, context, pattern, *streak_at_risk),
        SignalPayload::GoalAlignment { .. } => goal_alignment(signal),
        SignalPayload::CelebrationMoment {
            milestone,
            magnitude,
        } => celebration_moment(signal, milestone, *magnitude),
        SignalPayload::SupportNeeded { requested_aid } => support_needed(signal, *requested_aid),
    }
}

fn nutritional_need(
    signal: &Signal,
    context: &ContextSnapshot,
    reason: NutritionalReason,
    hours_since_last_meal: Option<f64>,
) -> Vec<DecisionRequest> {
    let hours = hours_since_last_meal.or(context.nutrition.hours_since_last_meal);
    let meal = meal_suggestion_base(signal, context)
        .with_param("tags", meal_tags(context.temporal.time_of_day, hours))
        .with_param("quick_prep", hours.is_some_and(|h| h >= 5.0));

    let mut requests = vec![meal];
    if reason == NutritionalReason::LowHydration {
        requests.push(DecisionRequest::new(
            AgentId::WellnessProgram,
            actions::SUGGEST_HYDRATION,
            signal.priority,
        ));
    }
    requests
}

fn emotional_state(
    signal: &Signal,
    config: &BridgeConfig,
    mood: Option<&str>,
    stress_level: Option<f64>,
) -> Vec<DecisionRequest> {
    let mut support = DecisionRequest::new(
        AgentId::CoachProactive,
        actions::GENERATE_SUPPORT_MESSAGE,
        signal.priority,
    )
    .with_param("tone", "supportive");
    if let Some(mood) = mood {
        support = support.with_param("mood", mood);
    }
    if let Some(level) = stress_level {
        support = support.with_param(actions::params::STRESS_LEVEL, level);
    }

    let mut requests = vec![support];
    if stress_level.is_some_and(|level| level > config.stress_breathing_threshold) {
        let breathing = DecisionRequest::new(
            AgentId::WellnessProgram,
            actions::SUGGEST_BREATHING,
            signal.priority,
        )
        .with_param(actions::params::DURATION_MINUTES, 5_i64)
        .with_param(
            actions::params::STRESS_LEVEL,
            stress_level.unwrap_or_default(),
        );
        requests.push(breathing);
    }
    requests
}

fn motivation_level(signal: &Signal, score: f64) -> Vec<DecisionRequest> {
    vec![
        DecisionRequest::new(
            AgentId::CoachProactive,
            actions::GENERATE_SUPPORT_MESSAGE,
            signal.priority,
        )
        .with_param("tone", "encouragement")
        .with_param("motivation_score", score.clamp(0.0, 1.0)),
        DecisionRequest::new(
            AgentId::ChallengesService,
            actions::SUGGEST_CHALLENGE,
            signal.priority,
        )
        .with_param("difficulty", "easy"),
    ]
}

fn knowledge_gap(signal: &Signal, topic: &str) -> Vec<DecisionRequest> {
    vec![
        DecisionRequest::new(
            AgentId::CoachProactive,
            actions::GENERATE_SUPPORT_MESSAGE,
            signal.priority,
        )
        .with_param("tone", "educational")
        .with_param("topic", topic),
    ]
}

fn decision_point(
    signal: &Signal,
    context: &ContextSnapshot,
    decision: &str,
) -> Vec<DecisionRequest> {
    vec![meal_suggestion_base(signal, context).with_param("decision", decision)]
}

fn habit_deviation(
    signal: &Signal,
    context: &ContextSnapshot,
    pattern: &str,
    streak_at_risk: bool,
) -> Vec<DecisionRequest> {
    let mut requests = vec![
        DecisionRequest::new(
            AgentId::ProgressAnalytics,
            actions::PATTERN_INSIGHTS,
            signal.priority,
        )
        .with_param("pattern", pattern),
    ];
    if streak_at_risk {
        requests.push(
            DecisionRequest::new(
                AgentId::NotificationsService,
                actions::SCHEDULE_REMINDER,
                signal.priority,
            )
            .with_param("kind", "streak_protection")
            .with_param(
                actions::params::HOUR,
                i64::from(reminder_hour(context.temporal.time_of_day)),
            ),
        );
    }
    requests
}

fn goal_alignment(signal: &Signal) -> Vec<DecisionRequest> {
    vec![
        DecisionRequest::new(
            AgentId::ProgressAnalytics,
            actions::SUMMARIZE,
            signal.priority,
        )
        .with_param("period", "weekly"),
    ]
}

fn celebration_moment(signal: &Signal, milestone: &str, magnitude: u32) -> Vec<DecisionRequest> {
    let points = i64::from(magnitude.min(100)) * 10;
    vec![
        DecisionRequest::new(
            AgentId::GamificationService,
            actions::AWARD_POINTS,
            signal.priority,
        )
        .with_param(actions::params::POINTS, points.min(1000))
        .with_param("reason", milestone),
        DecisionRequest::new(
            AgentId::CoachProactive,
            actions::GENERATE_SUPPORT_MESSAGE,
            signal.priority,
        )
        .with_param("tone", "celebration")
        .with_param("topic", milestone),
    ]
}

fn support_needed(signal: &Signal, requested_aid: Option<SupportAid>) -> Vec<DecisionRequest> {
    let mut requests = vec![
        DecisionRequest::new(
            AgentId::CoachProactive,
            actions::GENERATE_SUPPORT_MESSAGE,
            signal.priority,
        )
        .with_param("tone", "empathetic"),
    ];
    if let Some(aid) = requested_aid {
        let action = match aid {
            SupportAid::Breathing => actions::SUGGEST_BREATHING,
            SupportAid::Meditation => actions::SUGGEST_MEDITATION,
        };
        requests.push(
            DecisionRequest::new(AgentId::WellnessProgram, action, signal.priority)
                .with_param(actions::params::DURATION_MINUTES, 10_i64),
        );
    }
    requests
}

fn meal_suggestion_base(signal: &Signal, context: &ContextSnapshot) -> DecisionRequest {
    DecisionRequest::new(
        AgentId::MealPlanAgent,
        actions::GENERATE_SUGGESTION,
        signal.priority,
    )
    .with_param("meal_type", meal_type_for(context.temporal.time_of_day))
    .with_param(actions::params::CALORIES_BUDGET, context.calories_budget())
}

fn meal_type_for(time_of_day: TimeOfDay) -> &'static str {
    match time_of_day {
        TimeOfDay::Morning => "breakfast",
        TimeOfDay::Midday => "lunch",
        TimeOfDay::Afternoon => "snack",
        TimeOfDay::Evening => "dinner",
        TimeOfDay::Night => "snack",
    }
}

fn meal_tags(time_of_day: TimeOfDay, hours_since_last_meal: Option<f64>) -> String {
    let mut tags: Vec<&str> = match time_of_day {
        TimeOfDay::Morning => vec!["energisant"],
        TimeOfDay::Midday => vec!["equilibre"],
        TimeOfDay::Afternoon => vec!["leger"],
        TimeOfDay::Evening => vec!["reconfortant"],
        TimeOfDay::Night => vec!["leger", "digestion-facile"],
    };
    if hours_since_last_meal.is_some_and(|hours| hours >= 5.0) {
        tags.push("rassasiant");
    }
    tags.join(",")
}

fn reminder_hour(time_of_day: TimeOfDay) -> u8 {
    match time_of_day {
        TimeOfDay::Morning => 8,
        TimeOfDay::Midday => 12,
        TimeOfDay::Afternoon => 17,
        TimeOfDay::Evening => 20,
        TimeOfDay::Night => 21,
    }
}
