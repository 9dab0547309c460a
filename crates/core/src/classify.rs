use crate::score::SentimentIntensityScorer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

/// Round a compound score to one decimal place, ties to even.
///
/// Ties-to-even matters at the boundary: raw 0.05 and -0.05 both report
/// 0.0, and therefore classify neutral.
pub fn round1(score: f64) -> f64 {
    (score * 10.0).round_ties_even() / 10.0
}

/// Label from the sign of the *rounded* score. Rounding first is part of
/// the output contract: a small non-zero score that rounds to 0.0 is
/// neutral, not positive or negative.
pub fn label_for(rounded: f64) -> SentimentLabel {
    if rounded < 0.0 {
        SentimentLabel::Negative
    } else if rounded > 0.0 {
        SentimentLabel::Positive
    } else {
        SentimentLabel::Neutral
    }
}

/// Full result of one invocation. `scores` and `labels` are parallel and
/// aligned with the filtered (non-blank) unit sequence in source order;
/// `distribution` carries only labels that occur.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub scores: Vec<f64>,
    pub labels: Vec<SentimentLabel>,
    pub distribution: BTreeMap<SentimentLabel, usize>,
}

/// Score and classify every non-blank unit. Blank or whitespace-only units
/// are never scored and never counted.
pub fn aggregate(units: &[String], scorer: &SentimentIntensityScorer) -> AnalysisReport {
    let mut scores = Vec::new();
    let mut labels = Vec::new();
    let mut distribution = BTreeMap::new();

    for unit in units.iter().filter(|u| !u.trim().is_empty()) {
        let rounded = round1(scorer.polarity(unit));
        let label = label_for(rounded);
        scores.push(rounded);
        labels.push(label);
        *distribution.entry(label).or_insert(0) += 1;
    }

    AnalysisReport {
        scores,
        labels,
        distribution,
    }
}
