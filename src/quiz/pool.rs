use std::collections::HashSet;

use crate::models::QuizItem;

use super::error::PoolError;

/// A validated, immutable set of candidate questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPool {
    items: Vec<QuizItem>,
}

impl QuestionPool {
    /// Build a pool, checking every item once up front.
    ///
    /// Options and answers are compared byte for byte. An answer that only
    /// differs from its option by case or trailing whitespace is rejected
    /// here rather than producing a question nobody can answer.
    pub fn new(items: Vec<QuizItem>) -> Result<Self, PoolError> {
        if items.is_empty() {
            return Err(PoolError::Empty);
        }

        for (index, item) in items.iter().enumerate() {
            validate_item(index, item)?;
        }

        Ok(Self { items })
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate_item(index: usize, item: &QuizItem) -> Result<(), PoolError> {
    if item.options.len() < 2 {
        return Err(PoolError::TooFewOptions {
            index,
            count: item.options.len(),
        });
    }

    let mut seen = HashSet::with_capacity(item.options.len());
    for option in &item.options {
        if !seen.insert(option.as_str()) {
            return Err(PoolError::DuplicateOption {
                index,
                option: option.clone(),
            });
        }
    }

    if !seen.contains(item.correct_answer.as_str()) {
        return Err(PoolError::MissingAnswer {
            index,
            answer: item.correct_answer.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(options: &[&str], answer: &str) -> QuizItem {
        QuizItem::new(
            "prompt",
            "prompt",
            options.iter().map(|o| o.to_string()).collect(),
            answer,
            "hint",
        )
    }

    #[test]
    fn test_accepts_well_formed_items() {
        let pool = QuestionPool::new(vec![item(&["a", "b"], "a"), item(&["x", "y", "z"], "z")]);
        assert_eq!(pool.map(|p| p.len()), Ok(2));
    }

    #[test]
    fn test_rejects_empty_pool() {
        assert_eq!(QuestionPool::new(Vec::new()), Err(PoolError::Empty));
    }

    #[test]
    fn test_rejects_single_option() {
        let err = QuestionPool::new(vec![item(&["a", "b"], "a"), item(&["only"], "only")]).unwrap_err();
        assert_eq!(err, PoolError::TooFewOptions { index: 1, count: 1 });
    }

    #[test]
    fn test_rejects_duplicate_options() {
        let err = QuestionPool::new(vec![item(&["a", "b", "a"], "a")]).unwrap_err();
        assert_eq!(
            err,
            PoolError::DuplicateOption {
                index: 0,
                option: "a".to_string()
            }
        );
    }

    #[test]
    fn test_answer_is_not_normalized() {
        let err = QuestionPool::new(vec![item(&["Minokay", "Romakat"], "minokay ")]).unwrap_err();
        assert!(matches!(err, PoolError::MissingAnswer { index: 0, .. }));
    }
}
