mod lexicon;

use std::collections::HashMap;

/// Sum-to-compound normalization constant.
const NORMALIZATION_ALPHA: f64 = 15.0;
/// Applied to a valence when a negator appears in the lookback window.
const NEGATION_SCALAR: f64 = -0.74;
/// Raw-scale emphasis added per exclamation mark.
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// How many preceding tokens are inspected for negators and boosters.
const LOOKBACK: usize = 3;

/// Lexicon-and-rule sentiment scorer.
///
/// Pure and deterministic: one text unit in, one compound score in
/// [-1.0, 1.0] out. Polarity words carry raw valences on a [-4, 4] scale;
/// negation, intensity boosters, and exclamation emphasis adjust them
/// before the sum is normalized.
#[derive(Clone, Debug)]
pub struct SentimentIntensityScorer {
    valences: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl SentimentIntensityScorer {
    pub fn new() -> Self {
        Self {
            valences: lexicon::LEXICON.iter().copied().collect(),
            boosters: lexicon::BOOSTERS.iter().copied().collect(),
        }
    }

    /// Compound polarity of one non-blank text unit.
    pub fn polarity(&self, text: &str) -> f64 {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .collect();

        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.valences.get(token.as_str()) else {
                continue;
            };

            let mut valence = base;
            for (dist, prior) in tokens[..i].iter().rev().take(LOOKBACK).enumerate() {
                if let Some(&step) = self.boosters.get(prior.as_str()) {
                    // closer modifiers weigh more
                    let damp = match dist {
                        0 => 1.0,
                        1 => 0.95,
                        _ => 0.9,
                    };
                    valence += step * damp * valence.signum();
                }
                if lexicon::NEGATORS.contains(&prior.as_str()) {
                    valence *= NEGATION_SCALAR;
                }
            }
            sum += valence;
        }

        if sum != 0.0 {
            let emphasis = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64;
            sum += emphasis * EXCLAMATION_BOOST * sum.signum();
        }

        (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

impl Default for SentimentIntensityScorer {
    fn default() -> Self {
        Self::new()
    }
}
