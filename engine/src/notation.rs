//! Move input in "start end" coordinate form, e.g. "e2 e4".

use kingcap_rules::Square;

use crate::error::{MoveError, MoveResult};

/// Split `input` into a source and destination square.
///
/// Only the shape is checked here: exactly two space-separated tokens, each
/// with a file letter followed by a rank digit. The squares may still lie off
/// the board; see [`is_valid_input`].
pub fn parse_move(input: &str) -> Option<(Square, Square)> {
    let mut tokens = input.split(' ');
    let start = parse_token(tokens.next()?)?;
    let end = parse_token(tokens.next()?)?;
    if tokens.next().is_some() {
        return None;
    }
    Some((start, end))
}

// 세 번째 글자부터 무시 ("e2x" → e2)
fn parse_token(token: &str) -> Option<Square> {
    let mut chars = token.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    Square::from_chars(file, rank)
}

/// 두 좌표 모두 보드 안인지
pub fn is_valid_input(input: &str) -> bool {
    parse_move(input).is_some_and(|(start, end)| start.is_valid() && end.is_valid())
}

pub fn parse_valid_move(input: &str) -> MoveResult<(Square, Square)> {
    if !is_valid_input(input) {
        return Err(MoveError::InvalidInput);
    }
    parse_move(input).ok_or(MoveError::InvalidInput)
}
