use thiserror::Error;
use uuid::Uuid;

/// Reasons a pool is rejected when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("question pool is empty")]
    Empty,
    #[error("question {index} has {count} options, at least 2 are required")]
    TooFewOptions { index: usize, count: usize },
    #[error("question {index} lists option {option:?} more than once")]
    DuplicateOption { index: usize, option: String },
    #[error("question {index}: correct answer {answer:?} is not one of its options")]
    MissingAnswer { index: usize, answer: String },
}

/// Errors raised by the quiz session state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The pool cannot supply the requested number of questions.
    #[error("pool has {available} questions but {requested} were requested")]
    InsufficientPool { requested: usize, available: usize },
    /// The operation is not allowed in the session's current state.
    #[error("invalid session state: {0}")]
    InvalidState(&'static str),
    /// A submission aimed at a question that is no longer current.
    #[error("stale submission for session {session_id} question {question_index}")]
    StaleSubmission { session_id: Uuid, question_index: usize },
    /// The highest reachable score would not fit the score counter.
    #[error("reward {reward} over {questions} questions overflows the score")]
    RewardOverflow { reward: u32, questions: usize },
    #[error(transparent)]
    InvalidPool(#[from] PoolError),
}
