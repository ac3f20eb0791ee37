use thiserror::Error;

/// Errors surfaced to the code that builds and drives the engine.
///
/// None of these can occur inside the audio callback: rendering a block is
/// infallible once the graph exists.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("unknown parameter `{0}`")]
    UnknownParam(String),

    #[error("unknown section `{0}`")]
    UnknownSection(String),

    #[error("audio device unavailable: {0}")]
    Device(String),

    #[error("audio stream failed: {0}")]
    Stream(String),
}

impl From<cpal::DefaultStreamConfigError> for EngineError {
    fn from(err: cpal::DefaultStreamConfigError) -> Self {
        EngineError::Device(err.to_string())
    }
}

impl From<cpal::BuildStreamError> for EngineError {
    fn from(err: cpal::BuildStreamError) -> Self {
        EngineError::Stream(err.to_string())
    }
}

impl From<cpal::PlayStreamError> for EngineError {
    fn from(err: cpal::PlayStreamError) -> Self {
        EngineError::Stream(err.to_string())
    }
}
