//! Text-to-speech boundary.
//!
//! Speech runs on a blocking worker and reports back over a channel. Any
//! failure ends here: it is logged and surfaces only as
//! [`AudioStatus::Unavailable`], never as an error to the caller.

mod command;
mod error;

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

pub use command::CommandSpeaker;
pub use error::AudioError;

/// Raw audio produced by a [`Speaker`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioClip {
    bytes: Vec<u8>,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A speech service: turns text into a playable clip or fails.
pub trait Speaker: Send + Sync {
    fn speak(&self, text: &str) -> Result<AudioClip, AudioError>;
}

/// Used when no synthesis command is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, _text: &str) -> Result<AudioClip, AudioError> {
        Err(AudioError::Disabled)
    }
}

/// What the audio indicator should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AudioStatus {
    #[default]
    Idle,
    Speaking(String),
    Played(String),
    Unavailable,
}

#[derive(Debug)]
enum AudioEvent {
    Played(String),
    Failed,
}

/// Fire-and-forget front for a [`Speaker`].
pub struct AudioBoundary {
    speaker: Arc<dyn Speaker>,
    runtime: Handle,
    events_tx: mpsc::UnboundedSender<AudioEvent>,
    events_rx: mpsc::UnboundedReceiver<AudioEvent>,
    status: AudioStatus,
}

impl AudioBoundary {
    pub fn new(speaker: Arc<dyn Speaker>, runtime: Handle) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            speaker,
            runtime,
            events_tx,
            events_rx,
            status: AudioStatus::Idle,
        }
    }

    /// Start speaking `text` and return immediately.
    pub fn play(&mut self, text: &str) {
        let text = text.trim().to_string();
        if text.is_empty() {
            return;
        }

        self.status = AudioStatus::Speaking(text.clone());
        let speaker = Arc::clone(&self.speaker);
        let events_tx = self.events_tx.clone();

        self.runtime.spawn_blocking(move || {
            let event = match speaker.speak(&text) {
                Ok(_) => AudioEvent::Played(text),
                Err(err) => {
                    tracing::warn!(error = %err, text = %text, "speech synthesis failed");
                    AudioEvent::Failed
                }
            };
            let _ = events_tx.send(event);
        });
    }

    /// Fold finished playbacks into the status and return it.
    pub fn poll_status(&mut self) -> &AudioStatus {
        while let Ok(event) = self.events_rx.try_recv() {
            self.status = match event {
                AudioEvent::Played(text) => AudioStatus::Played(text),
                AudioEvent::Failed => AudioStatus::Unavailable,
            };
        }
        &self.status
    }

    pub fn status(&self) -> &AudioStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    struct EchoSpeaker;

    impl Speaker for EchoSpeaker {
        fn speak(&self, text: &str) -> Result<AudioClip, AudioError> {
            Ok(AudioClip::new(text.as_bytes().to_vec()))
        }
    }

    async fn settle(boundary: &mut AudioBoundary) -> AudioStatus {
        for _ in 0..100 {
            let status = boundary.poll_status().clone();
            if !matches!(status, AudioStatus::Speaking(_)) {
                return status;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        boundary.status().clone()
    }

    #[tokio::test]
    async fn test_successful_playback() {
        let mut boundary = AudioBoundary::new(Arc::new(EchoSpeaker), Handle::current());
        boundary.play("Romakat");
        assert_eq!(settle(&mut boundary).await, AudioStatus::Played("Romakat".to_string()));
    }

    #[tokio::test]
    async fn test_failure_is_absorbed() {
        let mut boundary = AudioBoundary::new(Arc::new(SilentSpeaker), Handle::current());
        boundary.play("Comikay");
        assert_eq!(settle(&mut boundary).await, AudioStatus::Unavailable);
    }

    #[tokio::test]
    async fn test_blank_text_is_ignored() {
        let mut boundary = AudioBoundary::new(Arc::new(EchoSpeaker), Handle::current());
        boundary.play("   ");
        assert_eq!(boundary.poll_status(), &AudioStatus::Idle);
    }
}
