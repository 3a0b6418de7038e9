use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Logger initialization failed: {message}")]
    Logger { message: String },

    #[error("Startup failed: {message}")]
    Startup { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
