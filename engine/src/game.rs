use kingcap_rules::{can_move, legal_destinations, PieceKind, Side, Square};
use tracing::{debug, info};

use crate::board::{Board, Layout};
use crate::error::{MoveError, MoveResult};
use crate::notation::{parse_move, parse_valid_move};

/// 게임 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    WhiteWins,
    BlackWins,
}

impl GameResult {
    pub fn winner(self) -> Option<Side> {
        match self {
            GameResult::Ongoing => None,
            GameResult::WhiteWins => Some(Side::White),
            GameResult::BlackWins => Some(Side::Black),
        }
    }

    fn won_by(side: Side) -> Self {
        match side {
            Side::White => GameResult::WhiteWins,
            Side::Black => GameResult::BlackWins,
        }
    }
}

/// 실행된 이동
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// 차례가 상대에게 넘어감
    Moved {
        from: Square,
        to: Square,
        captured: Option<PieceKind>,
    },
    /// 킹이 잡혀 게임 종료
    KingCaptured {
        from: Square,
        to: Square,
        loser: Side,
        winner: Side,
    },
}

/// 승리 메시지
pub fn win_message(loser: Side, winner: Side) -> String {
    format!("{} player's King is Captured {} player wins", loser, winner)
}

/// 게임 상태 (백 선공)
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Side,
    result: GameResult,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Board::standard())
    }
}

impl GameState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            turn: Side::White,
            result: GameResult::Ongoing,
        }
    }

    pub fn with_layout(layout: Layout) -> Self {
        Self::new(Board::with_layout(layout))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Side {
        self.turn
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result != GameResult::Ongoing
    }

    pub fn winner(&self) -> Option<Side> {
        self.result.winner()
    }

    /// 출발 칸에 기물이 있는지
    pub fn has_piece_at_source(&self, from: Square) -> bool {
        self.board.get_piece(from).is_some()
    }

    /// 출발 칸 기물이 현재 플레이어 것인지
    pub fn owner_matches_turn(&self, from: Square) -> bool {
        self.board
            .get_piece(from)
            .is_some_and(|piece| piece.side == self.turn)
    }

    /// 행마법 검사 후 이동 (소유자/차례는 검사 안 함)
    pub fn attempt_move(&mut self, input: &str) -> bool {
        match parse_move(input) {
            Some((from, to)) => self.commit_move(from, to).is_ok(),
            None => false,
        }
    }

    fn commit_move(&mut self, from: Square, to: Square) -> MoveResult<()> {
        let piece = self
            .board
            .get_piece(from)
            .ok_or(MoveError::EmptySource { square: from })?;
        let (id, kind, side) = (piece.id, piece.kind, piece.side);

        if !can_move(kind, side, from, to, &self.board) {
            return Err(MoveError::IllegalMove { from, to });
        }

        let captured = self.board.move_piece(to, id);
        debug!(%side, %kind, %from, %to, captured = captured.is_some(), "move committed");
        Ok(())
    }

    /// 잡힌 기물 중 킹이 있으면 상대 승리
    pub fn check_king_captured(&mut self) -> GameResult {
        let fallen = self
            .board
            .captured_pieces()
            .find(|piece| piece.kind == PieceKind::King)
            .map(|king| king.side);
        if let Some(loser) = fallen {
            self.result = GameResult::won_by(loser.opponent());
        }
        self.result
    }

    pub fn flip_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// 특정 칸 기물의 이동 가능 칸
    pub fn legal_moves_at(&self, square: Square) -> Vec<Square> {
        match self.board.get_piece(square) {
            Some(piece) => legal_destinations(piece.kind, piece.side, square, &self.board),
            None => Vec::new(),
        }
    }

    /// Run one full move attempt from raw input.
    ///
    /// Checks run in order: input shape, source occupied, owner on move,
    /// movement rule. A rejection leaves the board and turn untouched.
    pub fn submit(&mut self, input: &str) -> MoveResult<MoveOutcome> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let (from, to) = parse_valid_move(input)?;

        if !self.has_piece_at_source(from) {
            return Err(MoveError::EmptySource { square: from });
        }
        if !self.owner_matches_turn(from) {
            // 주인이 다르면 상대 기물
            return Err(MoveError::WrongOwner {
                square: from,
                side: self.turn.opponent(),
            });
        }

        let taken_before = self.board.captured_pieces().count();
        if !self.attempt_move(input) {
            return Err(MoveError::IllegalMove { from, to });
        }
        let captured = self.board.captured_pieces().nth(taken_before).map(|p| p.kind);

        if let Some(winner) = self.check_king_captured().winner() {
            let loser = winner.opponent();
            info!(%loser, %winner, "king captured, game over");
            return Ok(MoveOutcome::KingCaptured {
                from,
                to,
                loser,
                winner,
            });
        }

        self.flip_turn();
        Ok(MoveOutcome::Moved { from, to, captured })
    }
}
