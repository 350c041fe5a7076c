//! Error types for move submission
//!
//! Every variant is a recoverable, expected rejection. The `Display` text is
//! the message shown to the player.

use kingcap_rules::{Side, Square};
use thiserror::Error;

/// 이동 거부 사유
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// 입력 형식 오류
    #[error("Input is not valid")]
    InvalidInput,

    /// 출발 칸이 비어 있음
    #[error("The selected coordinate didn't have a piece")]
    EmptySource { square: Square },

    /// 현재 차례가 아닌 쪽 기물
    #[error("The piece is not valid to be moved with current player")]
    WrongOwner { square: Square, side: Side },

    /// 행마법상 불가능한 도착 칸
    #[error("The piece is not possible to move to the destination, please choose another destination")]
    IllegalMove { from: Square, to: Square },

    /// 이미 끝난 게임
    #[error("The game is already over")]
    GameOver,
}

/// 이동 결과 타입
pub type MoveResult<T> = Result<T, MoveError>;

/// 알 수 없는 배치 이름
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown layout `{0}`, expected one of: standard, king-rook")]
pub struct LayoutError(pub String);
