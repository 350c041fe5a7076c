//! Movement rules for the six standard chess pieces on an 8x8 board.
//!
//! Every rule is a pure predicate: it reads the board through [`Occupancy`]
//! and never mutates anything. Check, castling, en passant and promotion are
//! not modelled.

use std::fmt;

use tracing::trace;

/// Board edge length.
pub const BOARD_SIZE: i32 = 8;

/// 보드 좌표 (0-indexed: row=0~7, col=0~7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i32, // 0=rank 1 (white's side)
    pub col: i32, // 0=a, 7=h
}

impl Square {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// "e4" 같은 문자열에서 파싱
    pub fn from_notation(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let sq = Self::from_chars(file, rank)?;
        sq.is_valid().then_some(sq)
    }

    /// Map a file letter and a rank digit to a square without range checks.
    /// Returns `None` only when the rank is not a digit.
    pub fn from_chars(file: char, rank: char) -> Option<Self> {
        let rank = rank.to_digit(10)? as i32;
        let col = file as i32 - 'a' as i32;
        Some(Self { row: rank - 1, col })
    }

    /// 보드 밖 좌표는 None
    pub fn to_notation(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + self.row as u8) as char;
        Some(format!("{}{}", file, rank))
    }

    pub fn is_valid(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Iterate all 64 squares, rank 1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_notation() {
            Some(notation) => f.write_str(&notation),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// 플레이어 색상
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// 폰 전진 방향 (백 +1, 흑 -1)
    pub fn forward(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Row a pawn starts on (double step allowed from here).
    pub fn pawn_row(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    /// Row holding the back-rank pieces.
    pub fn home_row(self) -> i32 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 기물 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// 보드 표기 글자
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only view of who stands where. Implemented by the game board.
pub trait Occupancy {
    /// Side of the piece on `square`, `None` if empty or off the board.
    fn side_at(&self, square: Square) -> Option<Side>;

    fn is_empty(&self, square: Square) -> bool {
        self.side_at(square).is_none()
    }

    fn has_enemy(&self, square: Square, side: Side) -> bool {
        self.side_at(square) == Some(side.opponent())
    }

    fn has_friendly(&self, square: Square, side: Side) -> bool {
        self.side_at(square) == Some(side)
    }
}

/// Whether a `kind` piece of `side` standing on `from` may move to `to`.
///
/// Applies the rules shared by every kind first (destination on the board,
/// not the starting square, not held by an ally) and then the kind's own
/// movement pattern.
pub fn can_move<B: Occupancy + ?Sized>(
    kind: PieceKind,
    side: Side,
    from: Square,
    to: Square,
    board: &B,
) -> bool {
    if !to.is_valid() || !from.is_valid() {
        trace!(%kind, %from, %to, "destination off the board");
        return false;
    }
    if from == to {
        trace!(%kind, %from, "zero displacement");
        return false;
    }
    if board.has_friendly(to, side) {
        trace!(%kind, %from, %to, "destination held by ally");
        return false;
    }

    let legal = match kind {
        PieceKind::Pawn => pawn_can_move(side, from, to, board),
        PieceKind::Rook => rook_can_move(from, to, board),
        PieceKind::Knight => knight_can_move(from, to),
        PieceKind::Bishop => bishop_can_move(from, to, board),
        PieceKind::Queen => queen_can_move(from, to, board),
        PieceKind::King => king_can_move(from, to),
    };
    if !legal {
        trace!(%kind, %side, %from, %to, "movement pattern rejected");
    }
    legal
}

/// Every square a piece could legally move to from `from`.
pub fn legal_destinations<B: Occupancy + ?Sized>(
    kind: PieceKind,
    side: Side,
    from: Square,
    board: &B,
) -> Vec<Square> {
    Square::all()
        .filter(|&to| can_move(kind, side, from, to, board))
        .collect()
}

fn pawn_can_move<B: Occupancy + ?Sized>(side: Side, from: Square, to: Square, board: &B) -> bool {
    let dir = side.forward();
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;

    // 폰: 한 칸 전진
    if d_col == 0 && d_row == dir {
        return board.is_empty(to);
    }

    // 시작 줄에서 두 칸 전진
    if d_col == 0 && d_row == 2 * dir {
        let between = Square::new(from.row + dir, from.col);
        return from.row == side.pawn_row() && board.is_empty(between) && board.is_empty(to);
    }

    // 대각선 잡기
    if d_row == dir && d_col.abs() == 1 {
        return board.has_enemy(to, side);
    }

    false
}

fn rook_can_move<B: Occupancy + ?Sized>(from: Square, to: Square, board: &B) -> bool {
    let straight = (from.row == to.row) != (from.col == to.col);
    straight && path_is_clear(from, to, board)
}

fn knight_can_move(from: Square, to: Square) -> bool {
    let d_row = (to.row - from.row).abs();
    let d_col = (to.col - from.col).abs();
    (d_row == 1 && d_col == 2) || (d_row == 2 && d_col == 1)
}

fn bishop_can_move<B: Occupancy + ?Sized>(from: Square, to: Square, board: &B) -> bool {
    let d_row = (to.row - from.row).abs();
    let d_col = (to.col - from.col).abs();
    d_row == d_col && d_row != 0 && path_is_clear(from, to, board)
}

fn queen_can_move<B: Occupancy + ?Sized>(from: Square, to: Square, board: &B) -> bool {
    rook_can_move(from, to, board) || bishop_can_move(from, to, board)
}

fn king_can_move(from: Square, to: Square) -> bool {
    let d_row = (to.row - from.row).abs();
    let d_col = (to.col - from.col).abs();
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}

/// Every square strictly between `from` and `to` is empty.
/// Caller guarantees the two squares share a line or a diagonal.
fn path_is_clear<B: Occupancy + ?Sized>(from: Square, to: Square, board: &B) -> bool {
    let step_row = (to.row - from.row).signum();
    let step_col = (to.col - from.col).signum();
    let mut cur = Square::new(from.row + step_row, from.col + step_col);
    while cur != to {
        if !board.is_empty(cur) {
            return false;
        }
        cur = Square::new(cur.row + step_row, cur.col + step_col);
    }
    true
}
