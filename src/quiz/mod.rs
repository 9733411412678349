//! Quiz session core.
//!
//! Sampling a session from a validated pool, the per-session state machine,
//! and a locked handle for hosts that may deliver input concurrently.

mod error;
mod pool;
mod sampler;
mod session;
mod shared;

pub use error::{PoolError, QuizError};
pub use pool::QuestionPool;
pub use sampler::sample;
pub use session::{DEFAULT_REWARD, DEFAULT_SESSION_SIZE, QuizSession, SessionStatus, SubmitOutcome};
pub use shared::SharedSession;
