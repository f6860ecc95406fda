use thiserror::Error;

/// Errors returned by host-facing game entry points
#[derive(Error, Debug)]
pub enum ArcadeError {
    #[error("Cell index out of range: {0}")]
    CellOutOfRange(usize),

    #[error("Cell {0} is already taken")]
    CellOccupied(usize),

    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("Game is already over")]
    GameOver,

    #[error("No answer selected")]
    NoSelection,

    #[error("Option {index} out of range ({count} options)")]
    OptionOutOfRange { index: usize, count: usize },

    #[error("Quiz is already complete")]
    QuizComplete,

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Settings JSON: {0}")]
    SettingsJson(#[from] serde_json::Error),
}

/// Convenience Result type for arcade operations
pub type Result<T> = std::result::Result<T, ArcadeError>;
