use std::sync::MutexGuard;

use rand::rngs::StdRng;
use uuid::Uuid;

use crate::audio::{AudioBoundary, AudioStatus};
use crate::data::unit31::{SENTENCES, VOCABULARY};
use crate::models::{Sentence, Tab, VocabCard};
use crate::quiz::{QuestionPool, QuizError, QuizSession, SharedSession};

/// Message shown under the options after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { hint: String },
}

/// An entry on the study tab: vocabulary cards first, then sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyEntry {
    Vocab(&'static VocabCard),
    Sentence(&'static Sentence),
}

impl StudyEntry {
    pub fn speech_text(&self) -> &'static str {
        match self {
            StudyEntry::Vocab(card) => card.amis,
            StudyEntry::Sentence(sentence) => sentence.amis,
        }
    }
}

pub struct App {
    pub tab: Tab,
    pool: QuestionPool,
    session_size: usize,
    session: SharedSession,
    rng: StdRng,
    selected_option: usize,
    // Question the selection belongs to; a new session or question resets it.
    selection_owner: (Uuid, usize),
    feedback: Option<Feedback>,
    study_cursor: usize,
    audio: AudioBoundary,
}

impl App {
    pub fn new(
        pool: QuestionPool,
        session_size: usize,
        reward: u32,
        mut rng: StdRng,
        audio: AudioBoundary,
    ) -> Result<Self, QuizError> {
        let session = QuizSession::new(&pool, session_size, reward, &mut rng)?;
        let selection_owner = (session.session_id(), session.current_index());

        Ok(Self {
            tab: Tab::default(),
            pool,
            session_size,
            session: SharedSession::new(session),
            rng,
            selected_option: 0,
            selection_owner,
            feedback: None,
            study_cursor: 0,
            audio,
        })
    }

    /// Read access to the live session for rendering.
    pub fn session(&self) -> MutexGuard<'_, QuizSession> {
        self.session.lock()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Pick up results of finished speech requests.
    pub fn poll_audio(&mut self) {
        self.audio.poll_status();
    }

    pub fn audio_status(&self) -> &AudioStatus {
        self.audio.status()
    }

    pub fn toggle_tab(&mut self) {
        self.tab = self.tab.toggle();
    }

    fn option_count(&self) -> usize {
        self.session
            .lock()
            .current_question()
            .map(|q| q.options().len())
            .unwrap_or(0)
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Submit the highlighted option for the question on screen.
    pub fn submit_answer(&mut self) -> Result<(), QuizError> {
        let (session_id, index, choice) = {
            let session = self.session.lock();
            let Ok(question) = session.current_question() else {
                return Ok(());
            };
            let Some(choice) = question.options().get(self.selected_option).cloned() else {
                return Ok(());
            };
            (session.session_id(), session.current_index(), choice)
        };

        match self.session.submit(session_id, index, &choice) {
            Ok(outcome) if outcome.correct => self.feedback = Some(Feedback::Correct),
            Ok(outcome) => {
                self.feedback = Some(Feedback::Incorrect {
                    hint: outcome.hint.unwrap_or_default(),
                });
            }
            Err(QuizError::StaleSubmission { .. }) => {}
            Err(err) => return Err(err),
        }

        self.sync_selection();
        Ok(())
    }

    /// Draw a fresh set of questions and start over.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        self.session
            .restart(&self.pool, self.session_size, &mut self.rng)?;
        self.feedback = None;
        self.sync_selection();
        Ok(())
    }

    pub fn play_question_audio(&mut self) {
        let text = {
            let session = self.session.lock();
            match session.current_question() {
                Ok(question) if question.item.has_audio() => question.item.audio_text.clone(),
                _ => return,
            }
        };
        self.audio.play(&text);
    }

    fn sync_selection(&mut self) {
        let owner = {
            let session = self.session.lock();
            (session.session_id(), session.current_index())
        };

        if owner != self.selection_owner {
            self.selection_owner = owner;
            self.selected_option = 0;
        }
    }

    pub fn study_entry_count(&self) -> usize {
        VOCABULARY.len() + SENTENCES.len()
    }

    pub fn study_cursor(&self) -> usize {
        self.study_cursor
    }

    pub fn study_entry(&self, index: usize) -> Option<StudyEntry> {
        if let Some(card) = VOCABULARY.get(index) {
            return Some(StudyEntry::Vocab(card));
        }
        SENTENCES
            .get(index - VOCABULARY.len())
            .map(StudyEntry::Sentence)
    }

    pub fn study_next(&mut self) {
        if self.study_cursor + 1 < self.study_entry_count() {
            self.study_cursor += 1;
        }
    }

    pub fn study_previous(&mut self) {
        self.study_cursor = self.study_cursor.saturating_sub(1);
    }

    pub fn play_study_entry(&mut self) {
        if let Some(entry) = self.study_entry(self.study_cursor) {
            self.audio.play(entry.speech_text());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::SeedableRng;
    use tokio::runtime::Handle;

    use super::*;
    use crate::audio::SilentSpeaker;
    use crate::data::builtin_pool;

    fn app(seed: u64) -> App {
        let audio = AudioBoundary::new(Arc::new(SilentSpeaker), Handle::current());
        App::new(builtin_pool().unwrap(), 5, 20, StdRng::seed_from_u64(seed), audio).unwrap()
    }

    fn select(app: &mut App, wanted: &str) {
        let position = app
            .session()
            .current_question()
            .unwrap()
            .options()
            .iter()
            .position(|o| o == wanted)
            .unwrap();
        while app.selected_option() != position {
            app.select_next_option();
        }
    }

    fn correct_answer(app: &App) -> String {
        app.session().current_question().unwrap().correct_answer().to_string()
    }

    fn wrong_answer(app: &App) -> String {
        let session = app.session();
        let question = session.current_question().unwrap();
        let wrong = question
            .options()
            .iter()
            .find(|o| o.as_str() != question.correct_answer())
            .unwrap()
            .clone();
        wrong
    }

    #[tokio::test]
    async fn test_wrong_then_right_scores_once() {
        let mut app = app(1);

        let wrong = wrong_answer(&app);
        select(&mut app, &wrong);
        app.submit_answer().unwrap();
        assert!(matches!(app.feedback(), Some(Feedback::Incorrect { .. })));
        assert_eq!(app.session().current_index(), 0);

        let right = correct_answer(&app);
        select(&mut app, &right);
        app.submit_answer().unwrap();
        assert_eq!(app.feedback(), Some(&Feedback::Correct));
        assert_eq!(app.session().current_index(), 1);
        assert_eq!(app.session().score(), 20);
        assert_eq!(app.selected_option(), 0);
    }

    #[tokio::test]
    async fn test_selection_wraps_around() {
        let mut app = app(2);
        app.select_previous_option();
        assert_eq!(app.selected_option(), 2);
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);
    }

    #[tokio::test]
    async fn test_restart_clears_feedback_and_selection() {
        let mut app = app(3);
        let old_id = app.session().session_id();
        app.select_next_option();
        let wrong = wrong_answer(&app);
        select(&mut app, &wrong);
        app.submit_answer().unwrap();

        app.restart().unwrap();

        assert_ne!(app.session().session_id(), old_id);
        assert_eq!(app.feedback(), None);
        assert_eq!(app.selected_option(), 0);
    }

    #[tokio::test]
    async fn test_submit_after_completion_is_a_no_op() {
        let mut app = app(4);
        for _ in 0..5 {
            let right = correct_answer(&app);
            select(&mut app, &right);
            app.submit_answer().unwrap();
        }
        assert!(app.session().is_complete());

        app.submit_answer().unwrap();
        assert_eq!(app.session().score(), 100);
    }

    #[tokio::test]
    async fn test_study_cursor_spans_cards_and_sentences() {
        let mut app = app(5);
        assert_eq!(app.study_entry_count(), 27);
        assert!(matches!(app.study_entry(0), Some(StudyEntry::Vocab(_))));
        assert!(matches!(app.study_entry(18), Some(StudyEntry::Sentence(_))));
        assert_eq!(app.study_entry(27), None);

        app.study_previous();
        assert_eq!(app.study_cursor(), 0);
        for _ in 0..40 {
            app.study_next();
        }
        assert_eq!(app.study_cursor(), 26);
    }
}
