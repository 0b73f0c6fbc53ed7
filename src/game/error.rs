use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorldError {
  #[error("world has no player; call set_player before update")]
  MissingPlayer,
  #[error("frame delta must be finite and positive, got {0}")]
  InvalidDelta(f32),
  #[error("invalid configuration: {0}")]
  InvalidConfig(&'static str),
}
