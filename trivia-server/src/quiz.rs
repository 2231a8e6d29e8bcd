//! Quiz play: constrained random question selection
//!
//! Callers pass the random source in, so a seeded `StdRng` gives
//! reproducible picks.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Deserializer};

use crate::models::{CategoryId, LenientInt, Question, QuestionId, ValidationError};

/// Pick one question uniformly at random.
///
/// Only questions in `category` (when given) and not listed in `excluded`
/// are eligible. Returns `None` when nothing is left.
pub fn pick<'a, R>(
    items: &'a [Question],
    category: Option<CategoryId>,
    excluded: &HashSet<QuestionId>,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let eligible: Vec<&Question> = items
        .iter()
        .filter(|q| category.map_or(true, |c| q.category == c))
        .filter(|q| !excluded.contains(&q.id))
        .collect();

    eligible.choose(rng).copied()
}

/// `quiz_category` as sent by the quiz client: `{"type": "Science", "id": "1"}`.
///
/// The id arrives as a number or a numeric string; `0` or `null` stands for
/// "All". The `id` key itself must be present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "required_nullable")]
    pub id: Option<LenientInt>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl QuizCategory {
    /// Category filter for [`pick`], or `None` for all categories.
    pub fn filter(&self) -> Result<Option<CategoryId>, ValidationError> {
        let id = match &self.id {
            Some(id) => id.to_i32("quiz_category.id")?,
            None => None,
        };
        Ok(id.filter(|&id| id != 0))
    }
}

/// Accept `null` as `None` but reject a missing key.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<LenientInt>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<LenientInt>::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn question(id: QuestionId, category: CategoryId) -> Question {
        Question {
            id,
            question: format!("question {}", id),
            answer: format!("answer {}", id),
            category,
            difficulty: 1,
        }
    }

    fn sample() -> Vec<Question> {
        vec![
            question(1, 1),
            question(2, 1),
            question(3, 2),
            question(4, 2),
            question(5, 3),
        ]
    }

    #[test]
    fn picks_some_element_without_filter() {
        let items = sample();
        let mut rng = StdRng::seed_from_u64(7);
        let picked = pick(&items, None, &HashSet::new(), &mut rng).unwrap();
        assert!(items.contains(picked));
    }

    #[test]
    fn respects_category_filter() {
        let items = sample();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let picked = pick(&items, Some(2), &HashSet::new(), &mut rng).unwrap();
            assert_eq!(picked.category, 2);
        }
    }

    #[test]
    fn unknown_category_yields_none() {
        let items = sample();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick(&items, Some(99), &HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn skips_excluded() {
        let items = sample();
        let excluded: HashSet<QuestionId> = [1, 2, 3, 4].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(pick(&items, None, &excluded, &mut rng).unwrap().id, 5);
        }
    }

    #[test]
    fn all_excluded_yields_none() {
        let items = sample();
        let excluded: HashSet<QuestionId> = items.iter().map(|q| q.id).collect();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(pick(&items, None, &excluded, &mut rng).is_none());
    }

    #[test]
    fn empty_items_yield_none() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(pick(&[], Some(1), &HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn filter_and_exclusion_combine() {
        let items = sample();
        let excluded: HashSet<QuestionId> = [3].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            assert_eq!(pick(&items, Some(2), &excluded, &mut rng).unwrap().id, 4);
        }
    }

    #[test]
    fn same_seed_same_pick() {
        let items = sample();
        let excluded = HashSet::new();
        let a = pick(&items, None, &excluded, &mut StdRng::seed_from_u64(42)).map(|q| q.id);
        let b = pick(&items, None, &excluded, &mut StdRng::seed_from_u64(42)).map(|q| q.id);
        assert_eq!(a, b);
    }

    #[test]
    fn does_not_mutate_inputs() {
        let items = sample();
        let before = items.clone();
        let excluded: HashSet<QuestionId> = [2].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(5);
        let _ = pick(&items, Some(1), &excluded, &mut rng);
        assert_eq!(items, before);
        assert_eq!(excluded.len(), 1);
    }

    #[test]
    fn roughly_uniform() {
        let items = sample();
        let excluded = HashSet::new();
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 50_000;
        let mut counts: HashMap<QuestionId, usize> = HashMap::new();

        for _ in 0..trials {
            let picked = pick(&items, None, &excluded, &mut rng).unwrap();
            *counts.entry(picked.id).or_default() += 1;
        }

        let expected = trials as f64 / items.len() as f64;
        assert_eq!(counts.len(), items.len());
        for (id, count) in counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "question {} picked {} times", id, count);
        }
    }

    #[test]
    fn quiz_category_filter() {
        let parse = |v: serde_json::Value| {
            serde_json::from_value::<QuizCategory>(v).unwrap().filter()
        };

        assert_eq!(parse(serde_json::json!({"type": "click", "id": 0})), Ok(None));
        assert_eq!(parse(serde_json::json!({"type": "click", "id": "0"})), Ok(None));
        assert_eq!(parse(serde_json::json!({"id": null})), Ok(None));
        assert_eq!(parse(serde_json::json!({"id": ""})), Ok(None));
        assert_eq!(parse(serde_json::json!({"type": "Art", "id": 2})), Ok(Some(2)));
        assert_eq!(parse(serde_json::json!({"type": "Art", "id": "2"})), Ok(Some(2)));
        assert!(matches!(
            parse(serde_json::json!({"id": "science"})),
            Err(ValidationError::NotANumber { field: "quiz_category.id", .. })
        ));
    }

    #[test]
    fn quiz_category_requires_id_key() {
        assert!(serde_json::from_value::<QuizCategory>(serde_json::json!({"type": "Science"})).is_err());
        assert!(serde_json::from_value::<QuizCategory>(serde_json::json!({})).is_err());
    }
}
