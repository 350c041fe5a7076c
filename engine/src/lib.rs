//! Two-player king-capture chess: board, setup, move input and the turn
//! controller. Movement rules live in `kingcap-rules`.

pub mod board;
pub mod error;
pub mod game;
pub mod notation;

pub use board::{Board, Layout, Piece, PieceId};
pub use error::{LayoutError, MoveError, MoveResult};
pub use game::{win_message, GameResult, GameState, MoveOutcome};
pub use notation::{is_valid_input, parse_move, parse_valid_move};

// 행마 규칙 타입 재export
pub use kingcap_rules::{can_move, legal_destinations, Occupancy, PieceKind, Side, Square};
