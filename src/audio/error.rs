use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("speech synthesis is not configured")]
    Disabled,
    #[error("nothing to speak")]
    EmptyText,
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {status}")]
    CommandFailed { program: String, status: String },
    #[error("synthesis produced no audio")]
    EmptyOutput,
}
