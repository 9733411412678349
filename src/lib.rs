//! # o-rakat
//!
//! A terminal drill for Unit 31 "O Rakat" (movement and direction): study
//! vocabulary cards and example sentences, then take a randomized
//! multiple-choice challenge with spoken prompts.
//!
//! The quiz core lives in [`quiz`] and has no terminal dependencies:
//!
//! ```rust
//! use o_rakat::data::builtin_pool;
//! use o_rakat::quiz::QuizSession;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let pool = builtin_pool().unwrap();
//! let mut rng = StdRng::seed_from_u64(31);
//! let mut session = QuizSession::new(&pool, 5, 20, &mut rng).unwrap();
//!
//! let answer = session.current_question().unwrap().correct_answer().to_string();
//! assert!(session.submit_answer(&answer).unwrap().correct);
//! assert_eq!(session.score(), 20);
//! ```

mod app;
pub mod audio;
mod config;
pub mod data;
pub mod logging;
pub mod models;
pub mod quiz;
pub mod terminal;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tokio::runtime::{Handle, TryCurrentError};

pub use app::{App, Feedback, StudyEntry};
pub use config::DrillConfig;
pub use data::LoadError;
pub use models::Tab;
pub use quiz::{PoolError, QuizError};

use audio::AudioBoundary;

/// How long to wait for a key before redrawing, so audio status updates show up.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Error type for drill operations.
#[derive(Debug, Error)]
pub enum DrillError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("invalid built-in question pool: {0}")]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("audio needs a tokio runtime: {0}")]
    Runtime(#[from] TryCurrentError),
}

/// A drill instance that can be run in the terminal.
pub struct Drill {
    app: App,
}

impl Drill {
    /// Build the drill from `config`.
    ///
    /// Must be called inside a tokio runtime, which runs speech requests.
    /// Fails early if the pool cannot fill a session.
    pub fn new(config: &DrillConfig) -> Result<Self, DrillError> {
        let pool = config.load_pool()?;
        let audio = AudioBoundary::new(config.speaker(), Handle::try_current()?);
        let app = App::new(
            pool,
            config.questions_per_session,
            config.reward,
            config.rng(),
            audio,
        )?;
        Ok(Self { app })
    }

    /// Run the drill in the terminal until the user quits.
    ///
    /// This blocks on terminal input; call it from a blocking context.
    pub fn run(mut self) -> Result<(), DrillError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::DrillTerminal, app: &mut App) -> Result<(), DrillError> {
    loop {
        app.poll_audio();
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
pub fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, QuizError> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_tab();
            return Ok(false);
        }
        _ => {}
    }

    match app.tab {
        Tab::Study => handle_study_input(app, key),
        Tab::Quiz => handle_quiz_input(app, key)?,
    }
    Ok(false)
}

fn handle_study_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.study_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.study_next(),
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char(' ') => app.play_study_entry(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Result<(), QuizError> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer()?,
        KeyCode::Char('a') | KeyCode::Char('A') => app.play_question_audio(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart()?,
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drill() -> Drill {
        let config = DrillConfig {
            seed: Some(7),
            ..DrillConfig::default()
        };
        Drill::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut drill = drill();
        assert!(handle_input(drill.app_mut(), KeyCode::Char('q')).unwrap());
        assert!(handle_input(drill.app_mut(), KeyCode::Esc).unwrap());
    }

    #[tokio::test]
    async fn test_tab_switches_views() {
        let mut drill = drill();
        assert_eq!(drill.app().tab, Tab::Study);
        assert!(!handle_input(drill.app_mut(), KeyCode::Tab).unwrap());
        assert_eq!(drill.app().tab, Tab::Quiz);
    }

    #[tokio::test]
    async fn test_study_keys_do_not_touch_quiz() {
        let mut drill = drill();
        handle_input(drill.app_mut(), KeyCode::Char('j')).unwrap();
        handle_input(drill.app_mut(), KeyCode::Enter).unwrap();

        assert_eq!(drill.app().study_cursor(), 1);
        assert_eq!(drill.app().session().current_index(), 0);
        assert_eq!(drill.app().selected_option(), 0);
    }

    #[tokio::test]
    async fn test_enter_on_quiz_tab_submits() {
        let mut drill = drill();
        handle_input(drill.app_mut(), KeyCode::Tab).unwrap();
        handle_input(drill.app_mut(), KeyCode::Enter).unwrap();
        assert!(drill.app().feedback().is_some());
    }

    #[test]
    fn test_new_outside_runtime_fails() {
        let err = Drill::new(&DrillConfig::default()).err();
        assert!(matches!(err, Some(DrillError::Runtime(_))));
    }
}
