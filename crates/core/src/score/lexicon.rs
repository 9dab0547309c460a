//! Embedded valence table for the compound scorer.
//!
//! Word valences sit on a [-4.0, 4.0] raw scale before normalization,
//! the convention used by lexicon-and-rule sentiment scorers.

pub(super) const LEXICON: &[(&str, f64)] = &[
    // strongly positive
    ("adore", 3.2),
    ("amazing", 3.2),
    ("awesome", 3.1),
    ("best", 3.2),
    ("brilliant", 3.0),
    ("excellent", 3.2),
    ("exceptional", 3.0),
    ("fantastic", 3.3),
    ("flawless", 3.1),
    ("great", 3.1),
    ("incredible", 3.0),
    ("magnificent", 3.1),
    ("outstanding", 3.2),
    ("perfect", 3.3),
    ("phenomenal", 3.2),
    ("superb", 3.3),
    ("wonderful", 3.1),
    // positive
    ("beautiful", 2.7),
    ("delicious", 2.6),
    ("delighted", 2.8),
    ("delightful", 2.8),
    ("enjoy", 2.2),
    ("enjoyable", 2.3),
    ("enjoyed", 2.3),
    ("excited", 2.4),
    ("exciting", 2.4),
    ("glad", 2.1),
    ("happy", 2.7),
    ("impressed", 2.4),
    ("impressive", 2.5),
    ("love", 2.9),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("pleased", 2.3),
    ("recommend", 2.2),
    ("recommended", 2.2),
    ("satisfied", 2.2),
    ("thrilled", 2.8),
    // mildly positive
    ("acceptable", 1.2),
    ("adequate", 1.0),
    ("decent", 1.4),
    ("fine", 1.3),
    ("friendly", 1.8),
    ("good", 1.9),
    ("helpful", 1.8),
    ("improved", 1.5),
    ("nice", 1.8),
    ("okay", 0.9),
    ("pleasant", 1.9),
    ("prompt", 1.2),
    ("reliable", 1.7),
    ("smooth", 1.4),
    ("solid", 1.4),
    ("useful", 1.7),
    ("valuable", 1.8),
    ("works", 1.2),
    // mildly negative
    ("bland", -1.3),
    ("boring", -1.6),
    ("confusing", -1.5),
    ("disappointed", -1.9),
    ("disappointing", -1.9),
    ("dull", -1.4),
    ("expensive", -1.1),
    ("flimsy", -1.5),
    ("lacking", -1.3),
    ("mediocre", -1.4),
    ("noisy", -1.2),
    ("overpriced", -1.6),
    ("slow", -1.2),
    ("tedious", -1.4),
    ("underwhelming", -1.6),
    ("unreliable", -1.8),
    // negative
    ("angry", -2.3),
    ("annoying", -2.0),
    ("bad", -2.5),
    ("broke", -2.1),
    ("broken", -2.3),
    ("damaged", -2.2),
    ("defective", -2.4),
    ("frustrating", -2.2),
    ("hate", -2.7),
    ("hated", -2.7),
    ("misleading", -2.3),
    ("poor", -2.3),
    ("refund", -2.0),
    ("regret", -2.3),
    ("rude", -2.4),
    ("sad", -2.1),
    ("unusable", -2.6),
    ("upset", -2.2),
    ("useless", -2.5),
    ("waste", -2.4),
    // strongly negative
    ("abysmal", -3.2),
    ("appalling", -3.1),
    ("atrocious", -3.2),
    ("awful", -3.1),
    ("disaster", -3.0),
    ("disgusting", -3.2),
    ("dreadful", -3.1),
    ("garbage", -3.0),
    ("horrible", -3.2),
    ("horrendous", -3.2),
    ("pathetic", -3.0),
    ("terrible", -2.9),
    ("unacceptable", -2.8),
    ("worst", -3.3),
    ("worthless", -3.0),
];

/// Tokens that flip the valence of a following lexicon hit.
pub(super) const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "nothing", "cannot", "cant", "dont",
    "doesnt", "didnt", "isnt", "wasnt", "werent", "wont", "wouldnt", "shouldnt", "couldnt",
    "aint", "without",
];

/// Intensity modifiers and their signed step on the raw valence scale.
pub(super) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("extremely", 0.293),
    ("highly", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("remarkably", 0.293),
    ("so", 0.293),
    ("totally", 0.293),
    ("truly", 0.293),
    ("utterly", 0.293),
    ("very", 0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("marginally", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
];
