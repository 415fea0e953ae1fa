use crate::orchestrator::types::{DecisionData, DecisionResult, OrchestratorResult};

/// Folds per-request results into the single response the conversational
/// layer renders. Convenience fields take the first successful result of
/// each kind; `results` is already in batch (priority) order, so a plain
/// forward scan respects priority without re-deriving it.
pub fn assemble(results: Vec<DecisionResult>) -> OrchestratorResult {
    let successes = results.iter().filter(|result| result.success).count();
    let failures = results.len() - successes;

    let mut suggested_meal = None;
    let mut suggested_challenge = None;
    let mut progress_data = None;
    let mut support_message = None;

    for result in results.iter().filter(|result| result.success) {
        match &result.data {
            Some(DecisionData::MealSuggestion { meal: Some(meal) }) => {
                if suggested_meal.is_none() {
                    suggested_meal = Some(meal.clone());
                }
            }
            Some(DecisionData::ChallengeSuggestion {
                challenge: Some(challenge),
            }) => {
                if suggested_challenge.is_none() {
                    suggested_challenge = Some(challenge.clone());
                }
            }
            Some(DecisionData::ProgressSummary(data)) => {
                if progress_data.is_none() {
                    progress_data = Some(data.clone());
                }
            }
            Some(DecisionData::SupportMessage { text, .. }) => {
                if support_message.is_none() {
                    support_message = Some(text.clone());
                }
            }
            _ => {}
        }
    }

    OrchestratorResult {
        success: successes > 0,
        summary: summary_line(successes, failures),
        results,
        suggested_meal,
        suggested_challenge,
        progress_data,
        support_message,
    }
}

/// User-facing one-liner, French with singular/plural agreement.
pub fn summary_line(successes: usize, failures: usize) -> String {
    let ok_part = if successes == 1 {
        "1 action réussie".to_string()
    } else {
        format!("{successes} actions réussies")
    };
    let fail_part = if failures <= 1 {
        format!("{failures} échouée")
    } else {
        format!("{failures} échouées")
    };
    format!("{ok_part}, {fail_part}")
}
