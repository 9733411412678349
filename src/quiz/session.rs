use rand::Rng;
use uuid::Uuid;

use crate::models::SampledQuestion;

use super::error::QuizError;
use super::pool::QuestionPool;
use super::sampler::sample;

/// Number of questions drawn per play-through.
pub const DEFAULT_SESSION_SIZE: usize = 5;

/// Points awarded for each correctly answered question.
pub const DEFAULT_REWARD: u32 = 20;

/// Result of a single answer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub correct: bool,
    /// Hint of the question that was missed; `None` on a correct answer.
    pub hint: Option<String>,
}

/// Coarse state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Complete,
}

/// One play-through of the quiz.
///
/// `current_index` only moves forward, one step per correct answer. The
/// only way back to the first question is [`QuizSession::restart`], which
/// replaces every field at once.
#[derive(Debug, Clone)]
pub struct QuizSession {
    session_id: Uuid,
    questions: Vec<SampledQuestion>,
    current_index: usize,
    score: u32,
    reward: u32,
}

impl QuizSession {
    /// Start a session with `k` freshly sampled questions.
    pub fn new<R: Rng + ?Sized>(
        pool: &QuestionPool,
        k: usize,
        reward: u32,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        check_reward(reward, k)?;
        let questions = sample(pool, k, rng)?;
        let session = Self::from_questions(questions, reward);
        tracing::info!(session_id = %session.session_id, questions = k, "quiz session started");
        Ok(session)
    }

    fn from_questions(questions: Vec<SampledQuestion>, reward: u32) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            questions,
            current_index: 0,
            score: 0,
            reward,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn questions(&self) -> &[SampledQuestion] {
        &self.questions
    }

    /// Total number of questions in this session (K).
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn reward(&self) -> u32 {
        self.reward
    }

    /// Highest score reachable in this session.
    pub fn max_score(&self) -> u32 {
        // Bounded by `check_reward` when the session was drawn.
        max_score(self.reward, self.questions.len()).unwrap_or(u32::MAX)
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_complete() {
            SessionStatus::Complete
        } else {
            SessionStatus::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_index == self.questions.len()
    }

    /// Fraction of questions answered, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            1.0
        } else {
            self.current_index as f64 / self.questions.len() as f64
        }
    }

    pub fn current_question(&self) -> Result<&SampledQuestion, QuizError> {
        self.questions
            .get(self.current_index)
            .ok_or(QuizError::InvalidState("no current question, session is complete"))
    }

    /// Check `choice` against the current question.
    ///
    /// A correct answer scores and moves on; a wrong one leaves the session
    /// untouched and hands back the question's hint.
    pub fn submit_answer(&mut self, choice: &str) -> Result<SubmitOutcome, QuizError> {
        let question = self
            .questions
            .get(self.current_index)
            .ok_or(QuizError::InvalidState("cannot submit, session is complete"))?;

        if !question.item.is_correct(choice) {
            tracing::debug!(
                session_id = %self.session_id,
                index = self.current_index,
                "incorrect answer"
            );
            return Ok(SubmitOutcome {
                correct: false,
                hint: Some(question.item.hint.clone()),
            });
        }

        self.score += self.reward;
        self.current_index += 1;
        tracing::debug!(
            session_id = %self.session_id,
            index = self.current_index,
            score = self.score,
            "correct answer"
        );

        if self.is_complete() {
            tracing::info!(session_id = %self.session_id, score = self.score, "quiz session complete");
        }

        Ok(SubmitOutcome {
            correct: true,
            hint: None,
        })
    }

    /// Throw away this play-through and start over with a new draw.
    ///
    /// Sampling happens before anything is replaced, so a failed restart
    /// leaves the current session as it was.
    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        pool: &QuestionPool,
        k: usize,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        check_reward(self.reward, k)?;
        let questions = sample(pool, k, rng)?;
        let previous = self.session_id;
        *self = Self::from_questions(questions, self.reward);
        tracing::info!(
            previous = %previous,
            session_id = %self.session_id,
            questions = k,
            "quiz session restarted"
        );
        Ok(())
    }
}

fn max_score(reward: u32, k: usize) -> Option<u32> {
    u32::try_from(k).ok().and_then(|k| reward.checked_mul(k))
}

/// Refuse settings whose full score would overflow the counter.
fn check_reward(reward: u32, k: usize) -> Result<(), QuizError> {
    match max_score(reward, k) {
        Some(_) => Ok(()),
        None => Err(QuizError::RewardOverflow {
            reward,
            questions: k,
        }),
    }
}
