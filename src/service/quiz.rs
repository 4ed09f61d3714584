use std::collections::HashSet;

use rand::Rng;

use crate::db::Question;
use crate::error::TriviaError;
use crate::types::requests::{IntOrString, QuizCategory};

/// Category `type` the front end sends for its "ALL" button.
pub const ALL_CATEGORIES_TYPE: &str = "click";
/// Category id meaning "every category".
pub const ALL_CATEGORIES_ID: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizSelector {
    All,
    Category(i64),
}

impl QuizSelector {
    pub fn category(self) -> Option<i64> {
        match self {
            QuizSelector::All => None,
            QuizSelector::Category(id) => Some(id),
        }
    }
}

impl TryFrom<&QuizCategory> for QuizSelector {
    type Error = TriviaError;

    fn try_from(value: &QuizCategory) -> Result<Self, Self::Error> {
        let (Some(id), Some(kind)) = (value.id.as_ref(), value.kind.as_deref()) else {
            return Err(TriviaError::unprocessable(
                "quiz_category requires both `id` and `type`",
            ));
        };
        if kind == ALL_CATEGORIES_TYPE {
            return Ok(QuizSelector::All);
        }
        match id.as_i64() {
            Some(ALL_CATEGORIES_ID) => Ok(QuizSelector::All),
            Some(id) => Ok(QuizSelector::Category(id)),
            None => Err(TriviaError::unprocessable(format!(
                "quiz_category id {id:?} is not an integer"
            ))),
        }
    }
}

/// Draw one question uniformly at random from `pool`, skipping anything in `exclude`.
///
/// Returns `None` when no candidate is left.
pub fn draw_question<R: Rng + ?Sized>(
    pool: Vec<Question>,
    exclude: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question> {
    let mut candidates: Vec<Question> = pool
        .into_iter()
        .filter(|q| !exclude.contains(&q.id))
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let index = rng.random_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn pool(ids: &[i64]) -> Vec<Question> {
        ids.iter()
            .map(|&id| Question {
                id,
                question: format!("q{id}"),
                answer: format!("a{id}"),
                category: 1,
                difficulty: 1,
            })
            .collect()
    }

    fn selector(id: Option<IntOrString>, kind: Option<&str>) -> Result<QuizSelector, TriviaError> {
        QuizSelector::try_from(&QuizCategory {
            id,
            kind: kind.map(str::to_string),
        })
    }

    #[test]
    fn never_draws_excluded_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let exclude: HashSet<i64> = [1, 2, 3, 5, 8].into_iter().collect();
        for _ in 0..200 {
            let q = draw_question(pool(&[1, 2, 3, 4, 5, 6, 7, 8]), &exclude, &mut rng)
                .expect("pool is not exhausted");
            assert!(!exclude.contains(&q.id));
        }
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let exclude: HashSet<i64> = [1, 2].into_iter().collect();
        assert!(draw_question(pool(&[1, 2]), &exclude, &mut rng).is_none());
        assert!(draw_question(Vec::new(), &HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn draw_covers_every_candidate() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let q = draw_question(pool(&[10, 11, 12, 13]), &HashSet::new(), &mut rng).unwrap();
            seen.insert(q.id);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn selector_resolution() {
        assert_eq!(
            selector(Some(IntOrString::Int(0)), Some("click")).unwrap(),
            QuizSelector::All
        );
        assert_eq!(
            selector(Some(IntOrString::Int(0)), Some("Science")).unwrap(),
            QuizSelector::All
        );
        assert_eq!(
            selector(Some(IntOrString::Text("3".into())), Some("History")).unwrap(),
            QuizSelector::Category(3)
        );
        assert_eq!(
            selector(Some(IntOrString::Int(4)), Some("click")).unwrap(),
            QuizSelector::All
        );
    }

    #[test]
    fn selector_missing_fields_is_unprocessable() {
        assert!(matches!(
            selector(None, Some("Art")),
            Err(TriviaError::Unprocessable(_))
        ));
        assert!(matches!(
            selector(Some(IntOrString::Int(2)), None),
            Err(TriviaError::Unprocessable(_))
        ));
        assert!(matches!(
            selector(Some(IntOrString::Text("two".into())), Some("Art")),
            Err(TriviaError::Unprocessable(_))
        ));
    }
}
