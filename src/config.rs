use std::path::PathBuf;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::audio::{CommandSpeaker, SilentSpeaker, Speaker};
use crate::data::{builtin_pool, load_pool_from_json};
use crate::quiz::{DEFAULT_REWARD, DEFAULT_SESSION_SIZE, QuestionPool};
use crate::DrillError;

/// Settings for one run of the drill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillConfig {
    /// JSON pool to use instead of the built-in unit questions.
    pub pool_path: Option<PathBuf>,
    pub questions_per_session: usize,
    pub reward: u32,
    /// Fixed seed for reproducible draws.
    pub seed: Option<u64>,
    /// Speech synthesis command line; audio is off when unset.
    pub tts_command: Option<String>,
    pub player_command: Option<String>,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            pool_path: None,
            questions_per_session: DEFAULT_SESSION_SIZE,
            reward: DEFAULT_REWARD,
            seed: None,
            tts_command: None,
            player_command: None,
        }
    }
}

impl DrillConfig {
    pub fn load_pool(&self) -> Result<QuestionPool, DrillError> {
        match &self.pool_path {
            Some(path) => Ok(load_pool_from_json(path)?),
            None => Ok(builtin_pool()?),
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn speaker(&self) -> Arc<dyn Speaker> {
        let speaker = self
            .tts_command
            .as_deref()
            .and_then(|synth| CommandSpeaker::from_command_lines(synth, self.player_command.as_deref()));

        match speaker {
            Some(speaker) => Arc::new(speaker),
            None => {
                tracing::info!("no speech command configured, audio disabled");
                Arc::new(SilentSpeaker)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_default_config_uses_unit_settings() {
        let config = DrillConfig::default();
        assert_eq!(config.questions_per_session, 5);
        assert_eq!(config.reward, 20);
        assert_eq!(config.load_pool().unwrap().len(), 6);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = DrillConfig {
            seed: Some(31),
            ..DrillConfig::default()
        };
        let a: u64 = config.rng().r#gen();
        let b: u64 = config.rng().r#gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_pool_file_is_reported() {
        let config = DrillConfig {
            pool_path: Some(PathBuf::from("/nonexistent/o-rakat/pool.json")),
            ..DrillConfig::default()
        };
        assert!(matches!(config.load_pool(), Err(DrillError::Load(_))));
    }
}
