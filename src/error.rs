use miette::Diagnostic;
use thiserror::Error;

/// Main error type for brickify operations
#[derive(Error, Diagnostic, Debug)]
pub enum BrickError {
    #[error("IO error: {0}")]
    #[diagnostic(code(brickify::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(brickify::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid colour: {input}")]
    #[diagnostic(code(brickify::format))]
    Format {
        input: String,
        #[help]
        help: Option<String>,
    },

    #[error("Colour source '{source_name}' unavailable for piece {piece_type}: {reason}")]
    #[diagnostic(
        code(brickify::source_unavailable),
        help("Check the catalog file or pick a piece type the catalog lists")
    )]
    SourceUnavailable {
        piece_type: String,
        source_name: String,
        reason: String,
    },

    #[error(
        "No eligible colour for piece {piece_type} (target {target}, stock > {min_availability}, finishes: {finishes})"
    )]
    #[diagnostic(
        code(brickify::no_eligible_colour),
        help("Lower --min-stock or allow more finishes with --finish")
    )]
    NoEligibleColor {
        piece_type: String,
        target: String,
        min_availability: u32,
        finishes: String,
    },

    #[error("Image has no pixels to sample ({width}x{height})")]
    #[diagnostic(code(brickify::empty_image))]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid grid: {message}")]
    #[diagnostic(code(brickify::grid))]
    InvalidGrid { message: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(brickify::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(brickify::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BrickError>;
