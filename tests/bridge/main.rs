mod dedup;
mod rules;

use nutria::{
    context::{ContextSnapshot, TimeOfDay},
    types::{Priority, Signal, SignalPayload},
};

pub fn signal(priority: Priority, payload: SignalPayload) -> Signal {
    Signal {
        intensity: 0.8,
        priority,
        actionable: true,
        payload,
    }
}

pub fn passive_signal(payload: SignalPayload) -> Signal {
    Signal {
        intensity: 0.8,
        priority: Priority::Medium,
        actionable: false,
        payload,
    }
}

pub fn context_at(time_of_day: TimeOfDay) -> ContextSnapshot {
    let mut context = ContextSnapshot::default();
    context.temporal.time_of_day = time_of_day;
    context.nutrition.calories_remaining = 650;
    context.nutrition.calories_target = 2000;
    context
}
