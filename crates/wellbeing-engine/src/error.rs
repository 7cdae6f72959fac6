use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid engine parameter '{field}': {message}")]
    InvalidParams { field: &'static str, message: String },
}
