mod loader;
pub mod unit31;

pub use loader::{LoadError, load_pool_from_json};

use crate::quiz::{PoolError, QuestionPool};

/// The pool shipped with the unit, validated like any other pool.
pub fn builtin_pool() -> Result<QuestionPool, PoolError> {
    QuestionPool::new(unit31::quiz_items())
}
