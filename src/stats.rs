// src/stats.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::response::Response;

/// The rating dimensions that feed `criteria_averages`. Criteria outside
/// this set are ignored by the aggregation.
pub const RECOGNIZED_CRITERIA: [&str; 5] = [
    "reasoning",
    "accuracy",
    "domainKnowledge",
    "creativity",
    "difficulty",
];

/// Aggregate annotation statistics over the full response log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    pub total_responses: usize,
    pub domains: HashMap<String, usize>,
    pub criteria_averages: HashMap<String, f64>,
}

/// Single pass over the responses: per-domain counts, plus the mean of each
/// recognized criterion rounded to 2 decimal places. Responses without
/// ratings contribute zero to every sum but still count toward
/// `total_responses` and their domain. All recognized criteria appear in
/// the output, at 0 when there are no responses.
pub fn compute(responses: &[Response]) -> Stats {
    let mut domains: HashMap<String, usize> = HashMap::new();
    let mut sums: HashMap<&str, f64> = RECOGNIZED_CRITERIA.iter().map(|c| (*c, 0.0)).collect();

    for response in responses {
        *domains.entry(response.domain.clone()).or_insert(0) += 1;

        if let Some(ratings) = &response.ratings {
            for (criterion, value) in ratings {
                if let Some(sum) = sums.get_mut(criterion.as_str()) {
                    *sum += value;
                }
            }
        }
    }

    let total_responses = responses.len();
    let criteria_averages = sums
        .into_iter()
        .map(|(criterion, sum)| {
            let average = if total_responses > 0 {
                (sum / total_responses as f64 * 100.0).round() / 100.0
            } else {
                0.0
            };
            (criterion.to_string(), average)
        })
        .collect();

    Stats {
        total_responses,
        domains,
        criteria_averages,
    }
}
