use std::sync::{Arc, Mutex, MutexGuard};

use rand::Rng;
use uuid::Uuid;

use super::error::QuizError;
use super::pool::QuestionPool;
use super::session::{QuizSession, SubmitOutcome};

/// A [`QuizSession`] behind a per-session lock.
///
/// Hosts that can deliver the same action twice (a repeated key press, a
/// double click) go through this handle so that only one submission per
/// question can ever land.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<QuizSession>>,
}

impl SharedSession {
    pub fn new(session: QuizSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Lock the session for reading or mutation.
    pub fn lock(&self) -> MutexGuard<'_, QuizSession> {
        // Mutations only write after their fallible work, so a poisoned
        // session is still whole.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Submit `choice` for the question the caller was looking at.
    ///
    /// `session_id` and `question_index` identify what was on screen. If the
    /// session moved on in the meantime the submission is rejected instead
    /// of being applied to a different question.
    pub fn submit(
        &self,
        session_id: Uuid,
        question_index: usize,
        choice: &str,
    ) -> Result<SubmitOutcome, QuizError> {
        let mut session = self.lock();

        if session.session_id() != session_id || session.current_index() != question_index {
            tracing::debug!(
                %session_id,
                question_index,
                current = session.current_index(),
                "dropping stale submission"
            );
            return Err(QuizError::StaleSubmission {
                session_id,
                question_index,
            });
        }

        session.submit_answer(choice)
    }

    pub fn restart<R: Rng + ?Sized>(
        &self,
        pool: &QuestionPool,
        k: usize,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        self.lock().restart(pool, k, rng)
    }
}
