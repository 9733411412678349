use std::io::{self, Write};
use std::process::{Command, Stdio};

use super::error::AudioError;
use super::{AudioClip, Speaker};

/// Speaks by running external programs.
///
/// The synthesis command gets the text as its last argument and is expected
/// to write audio to stdout, e.g. `espeak-ng -v id --stdout`. When a player
/// command is set (e.g. `aplay -q`) the clip is piped into its stdin.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    synth: Vec<String>,
    player: Option<Vec<String>>,
}

impl CommandSpeaker {
    /// Build from whitespace-separated command lines. Returns `None` when
    /// the synthesis command is blank.
    pub fn from_command_lines(synth: &str, player: Option<&str>) -> Option<Self> {
        let synth = split_command(synth)?;
        let player = player.and_then(split_command);
        Some(Self { synth, player })
    }

    fn synthesize(&self, text: &str) -> Result<Vec<u8>, AudioError> {
        let (program, args) = split_program(&self.synth);
        let output = Command::new(program)
            .args(args)
            .arg(text)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| AudioError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(AudioError::CommandFailed {
                program: program.to_string(),
                status: output.status.to_string(),
            });
        }

        Ok(output.stdout)
    }

    fn play(player: &[String], clip: &AudioClip) -> Result<(), AudioError> {
        let (program, args) = split_program(player);
        let spawn_error = |source: io::Error| AudioError::Spawn {
            program: program.to_string(),
            source,
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_error)?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(source) = stdin.write_all(clip.bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(spawn_error(source));
            }
        }

        let status = child.wait().map_err(spawn_error)?;
        if !status.success() {
            return Err(AudioError::CommandFailed {
                program: program.to_string(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str) -> Result<AudioClip, AudioError> {
        if text.trim().is_empty() {
            return Err(AudioError::EmptyText);
        }

        let clip = AudioClip::new(self.synthesize(text)?);

        if let Some(player) = &self.player {
            if clip.is_empty() {
                return Err(AudioError::EmptyOutput);
            }
            Self::play(player, &clip)?;
        }

        Ok(clip)
    }
}

fn split_command(line: &str) -> Option<Vec<String>> {
    let parts: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if parts.is_empty() { None } else { Some(parts) }
}

fn split_program(parts: &[String]) -> (&str, &[String]) {
    match parts.split_first() {
        Some((program, args)) => (program.as_str(), args),
        None => ("", &[]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_command_is_rejected() {
        assert!(CommandSpeaker::from_command_lines("   ", None).is_none());
    }

    #[test]
    fn test_missing_program_fails() {
        let speaker =
            CommandSpeaker::from_command_lines("o-rakat-no-such-synth --stdout", None).unwrap();
        assert!(matches!(speaker.speak("Romakat"), Err(AudioError::Spawn { .. })));
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let speaker = CommandSpeaker::from_command_lines("echo", None).unwrap();
        assert!(matches!(speaker.speak("  "), Err(AudioError::EmptyText)));
    }

    #[cfg(unix)]
    #[test]
    fn test_stdout_becomes_clip() {
        let speaker = CommandSpeaker::from_command_lines("echo -n", None).unwrap();
        let clip = speaker.speak("Comikay").unwrap();
        assert_eq!(clip.bytes(), b"Comikay");
    }

    #[cfg(unix)]
    #[test]
    fn test_player_that_exits_early_is_reaped() {
        let clip = AudioClip::new(vec![0u8; 4 * 1024 * 1024]);
        let player = vec!["true".to_string()];

        let result = CommandSpeaker::play(&player, &clip);

        // Depending on timing the pipe breaks or the player finishes first;
        // either way the call returns instead of leaving a child behind.
        assert!(matches!(result, Ok(()) | Err(AudioError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_synth_reports_status() {
        let speaker = CommandSpeaker::from_command_lines("false", None).unwrap();
        assert!(matches!(
            speaker.speak("Minokay"),
            Err(AudioError::CommandFailed { .. })
        ));
    }
}
