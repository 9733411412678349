use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::SampledQuestion;

use super::error::QuizError;
use super::pool::QuestionPool;

/// Draw `k` distinct questions from `pool` and fix a random option order
/// for each of them.
///
/// The pool is left untouched. With a seeded `rng` the draw is
/// reproducible.
pub fn sample<R: Rng + ?Sized>(
    pool: &QuestionPool,
    k: usize,
    rng: &mut R,
) -> Result<Vec<SampledQuestion>, QuizError> {
    if pool.len() < k {
        return Err(QuizError::InsufficientPool {
            requested: k,
            available: pool.len(),
        });
    }

    let mut selected: Vec<_> = pool.items().choose_multiple(rng, k).collect();
    selected.shuffle(rng);

    let questions = selected
        .into_iter()
        .map(|item| {
            let mut shuffled_options = item.options.clone();
            shuffled_options.shuffle(rng);
            SampledQuestion {
                item: item.clone(),
                shuffled_options,
            }
        })
        .collect();

    Ok(questions)
}
