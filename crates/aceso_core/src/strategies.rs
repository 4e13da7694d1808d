//! crates/aceso_core/src/strategies.rs
//!
//! The static coping-strategy catalog and the recommender that annotates it
//! from a set of free-text emotion labels.

use std::collections::HashSet;

use crate::domain::{CopingStrategy, Difficulty, StrategyCategory};

/// Maps canonical emotion keywords to the catalog ids they recommend.
///
/// A plain ordered table: each input label is matched by case-insensitive
/// substring containment against every keyword, and the matched id sets are
/// unioned.
const EMOTION_STRATEGY_MAP: &[(&str, &[&str])] = &[
    ("anxious", &["1", "4", "7"]),
    ("stressed", &["1", "3", "7"]),
    ("sad", &["2", "5", "6"]),
    ("angry", &["3", "7", "8"]),
    ("overwhelmed", &["1", "4", "6"]),
    ("lonely", &["5", "6"]),
    ("worried", &["1", "2", "4"]),
    ("tired", &["2", "8"]),
];

fn strategy(
    id: &str,
    title: &str,
    category: StrategyCategory,
    description: &str,
    steps: &[&str],
    duration: &str,
    difficulty: Difficulty,
) -> CopingStrategy {
    CopingStrategy {
        id: id.to_string(),
        title: title.to_string(),
        category,
        description: description.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        duration: duration.to_string(),
        difficulty,
        personalized_reason: None,
    }
}

/// The full catalog in definition order, unannotated.
pub fn catalog() -> Vec<CopingStrategy> {
    vec![
        strategy(
            "1",
            "Box Breathing",
            StrategyCategory::Breathing,
            "A simple yet powerful breathing technique used by Navy SEALs to reduce stress and increase focus.",
            &[
                "Breathe in slowly through your nose for 4 counts",
                "Hold your breath for 4 counts",
                "Exhale slowly through your mouth for 4 counts",
                "Hold your breath for 4 counts",
                "Repeat for 4-5 minutes",
            ],
            "5 minutes",
            Difficulty::Beginner,
        ),
        strategy(
            "2",
            "Body Scan Meditation",
            StrategyCategory::Meditation,
            "Progressive relaxation technique that helps you connect with your body and release tension.",
            &[
                "Lie down or sit comfortably",
                "Close your eyes and take 3 deep breaths",
                "Starting from your toes, notice sensations in each body part",
                "Move slowly upward through your legs, torso, arms, and head",
                "Notice tension and consciously relax each area",
                "Take 3 final deep breaths before opening your eyes",
            ],
            "10-15 minutes",
            Difficulty::Beginner,
        ),
        strategy(
            "3",
            "Mindful Walking",
            StrategyCategory::Movement,
            "Gentle physical activity combined with mindfulness to ground yourself in the present moment.",
            &[
                "Find a quiet place to walk, indoors or outdoors",
                "Walk at a slow, comfortable pace",
                "Notice the sensation of your feet touching the ground",
                "Pay attention to your breath and the rhythm of your steps",
                "If your mind wanders, gently bring focus back to walking",
                "Continue for at least 10 minutes",
            ],
            "10-20 minutes",
            Difficulty::Beginner,
        ),
        strategy(
            "4",
            "5-4-3-2-1 Grounding",
            StrategyCategory::Grounding,
            "A sensory awareness technique to help manage anxiety and bring you back to the present.",
            &[
                "Acknowledge 5 things you can see around you",
                "Acknowledge 4 things you can touch",
                "Acknowledge 3 things you can hear",
                "Acknowledge 2 things you can smell",
                "Acknowledge 1 thing you can taste",
                "Take a deep breath and notice how you feel",
            ],
            "5 minutes",
            Difficulty::Beginner,
        ),
        strategy(
            "5",
            "Reach Out to Someone",
            StrategyCategory::Social,
            "Social connection is a powerful tool for emotional wellbeing. Share your feelings with someone you trust.",
            &[
                "Think of someone you trust and feel comfortable with",
                "Reach out via call, text, or in person",
                "Share how you're feeling without judgment",
                "Ask if they have time to listen or meet",
                "Practice vulnerability and accept their support",
                "Express gratitude for their time and presence",
            ],
            "15-30 minutes",
            Difficulty::Intermediate,
        ),
        strategy(
            "6",
            "Expressive Journaling",
            StrategyCategory::Creative,
            "Free-form writing to process emotions and gain clarity on your thoughts.",
            &[
                "Set aside 15-20 minutes of uninterrupted time",
                "Write continuously without editing or judging",
                "Explore your deepest thoughts and feelings",
                "Don't worry about grammar or structure",
                "Write until the timer goes off",
                "Reflect on what you discovered",
            ],
            "15-20 minutes",
            Difficulty::Beginner,
        ),
        strategy(
            "7",
            "Progressive Muscle Relaxation",
            StrategyCategory::Meditation,
            "Systematically tense and relax muscle groups to reduce physical stress and anxiety.",
            &[
                "Sit or lie in a comfortable position",
                "Starting with your feet, tense muscles for 5 seconds",
                "Release tension and notice the relaxation for 10 seconds",
                "Move upward through calves, thighs, abdomen, arms, and face",
                "Pay attention to the difference between tension and relaxation",
                "Finish with 3 deep breaths",
            ],
            "10-15 minutes",
            Difficulty::Intermediate,
        ),
        strategy(
            "8",
            "Yoga Flow",
            StrategyCategory::Movement,
            "Gentle yoga sequence to release tension and improve mood through movement.",
            &[
                "Start in child's pose for 1 minute",
                "Move to cat-cow stretches (10 repetitions)",
                "Transition to downward dog (hold 30 seconds)",
                "Flow through sun salutations (3-5 rounds)",
                "End in seated meditation (2-3 minutes)",
                "Notice how your body and mind feel",
            ],
            "15-20 minutes",
            Difficulty::Intermediate,
        ),
    ]
}

/// Returns the full catalog, annotating strategies matched by the given
/// emotion labels with a personalization reason and moving them to the front.
///
/// The reason always quotes the first supplied label, regardless of which
/// keyword actually matched. With no labels, the catalog is returned
/// unmodified in definition order.
pub fn recommend(labels: &[String]) -> Vec<CopingStrategy> {
    let mut strategies = catalog();
    if labels.is_empty() {
        return strategies;
    }

    let mut recommended: HashSet<&str> = HashSet::new();
    for label in labels {
        let lowered = label.to_lowercase();
        for (keyword, ids) in EMOTION_STRATEGY_MAP {
            if lowered.contains(keyword) {
                recommended.extend(ids.iter().copied());
            }
        }
    }

    let reason = format!(
        "Recommended based on your recent {} feelings",
        labels[0].to_lowercase()
    );
    for s in &mut strategies {
        if recommended.contains(s.id.as_str()) {
            s.personalized_reason = Some(reason.clone());
        }
    }

    // Stable sort on a single boolean key: personalized strategies first,
    // catalog definition order preserved within each partition.
    strategies.sort_by_key(|s| s.personalized_reason.is_none());
    strategies
}
