use crate::types::Square;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square '{0}'")]
    InvalidSquare(String),
    #[error("malformed move '{0}'")]
    Malformed(String),
}

pub fn parse_square(label: &str) -> Result<Square, NotationError> {
    Square::parse(label).ok_or_else(|| NotationError::InvalidSquare(label.to_string()))
}

/// Parses `e2e4`, `e2-e4`, `e2 e4` or the history form `e2 → e4`.
pub fn parse_move(input: &str) -> Result<(Square, Square), NotationError> {
    let compact: String = input
        .chars()
        .filter(|ch| !ch.is_whitespace() && !matches!(ch, '-' | '→'))
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(NotationError::Malformed(input.to_string()));
    }
    let (from, to) = compact.split_at(2);
    Ok((parse_square(from)?, parse_square(to)?))
}
