use std::fmt;
use std::str::FromStr;

use kingcap_rules::{Occupancy, PieceKind, Side, Square, BOARD_SIZE};
use tracing::{debug, warn};

use crate::error::LayoutError;

/// 보드 안에서 기물을 가리키는 id
pub type PieceId = usize;

const SIZE: usize = BOARD_SIZE as usize;

/// 기물
///
/// `square`는 [`Board::move_piece`]만 바꾼다 (잡힌 기물은 잡힌 칸).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub side: Side,
    square: Square,
}

impl Piece {
    pub fn square(&self) -> Square {
        self.square
    }

    /// 보드 표기 (예: "Kw")
    pub fn symbol(&self) -> String {
        format!("{}{}", self.kind.symbol(), self.side.symbol())
    }
}

/// 시작 배치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// 기본 32기물 배치 (퀸 d, 킹 e)
    #[default]
    Standard,
    /// 흑 킹 a1, 백 룩 b1
    KingRook,
}

impl Layout {
    pub fn name(self) -> &'static str {
        match self {
            Layout::Standard => "standard",
            Layout::KingRook => "king-rook",
        }
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Layout::Standard),
            "king-rook" => Ok(Layout::KingRook),
            _ => Err(LayoutError(s.to_string())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const BACK_RANK: [PieceKind; SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 보드. 칸에는 [`PieceId`]만 저장
#[derive(Debug, Clone)]
pub struct Board {
    cells: [[Option<PieceId>; SIZE]; SIZE],
    pieces: Vec<Piece>,
    captured: Vec<PieceId>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// 빈 보드
    pub fn new() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
            pieces: Vec::new(),
            captured: Vec::new(),
        }
    }

    pub fn with_layout(layout: Layout) -> Self {
        let mut board = Self::new();
        match layout {
            Layout::Standard => board.setup_standard(),
            Layout::KingRook => {
                board.set_piece(Square::new(0, 0), PieceKind::King, Side::Black);
                board.set_piece(Square::new(0, 1), PieceKind::Rook, Side::White);
            }
        }
        board
    }

    pub fn standard() -> Self {
        Self::with_layout(Layout::Standard)
    }

    fn setup_standard(&mut self) {
        for side in [Side::White, Side::Black] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as i32;
                self.set_piece(Square::new(side.home_row(), col), *kind, side);
                self.set_piece(Square::new(side.pawn_row(), col), PieceKind::Pawn, side);
            }
        }
    }

    fn index(square: Square) -> Option<(usize, usize)> {
        square
            .is_valid()
            .then(|| (square.row as usize, square.col as usize))
    }

    /// 해당 칸의 기물 (보드 밖은 None)
    pub fn get_piece(&self, square: Square) -> Option<&Piece> {
        let (row, col) = Self::index(square)?;
        self.cells[row][col].and_then(|id| self.pieces.get(id))
    }

    /// id로 기물 조회 (잡힌 기물 포함)
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    /// 배치용. 기존 기물은 잡힌 기록 없이 덮어씀
    pub fn set_piece(&mut self, square: Square, kind: PieceKind, side: Side) -> Option<PieceId> {
        let (row, col) = Self::index(square)?;
        let id = self.pieces.len();
        self.pieces.push(Piece {
            id,
            kind,
            side,
            square,
        });
        self.cells[row][col] = Some(id);
        Some(id)
    }

    /// 기물 이동 (합법성 검사 없음). 잡힌 기물 id 반환
    pub fn move_piece(&mut self, to: Square, id: PieceId) -> Option<PieceId> {
        let Some((to_row, to_col)) = Self::index(to) else {
            warn!(%to, id, "relocation target off the board");
            return None;
        };
        let Some(from) = self.pieces.get(id).map(|p| p.square) else {
            warn!(id, "relocation of unknown piece");
            return None;
        };

        if let Some((row, col)) = Self::index(from) {
            if self.cells[row][col] == Some(id) {
                self.cells[row][col] = None;
            }
        }

        let captured = self.cells[to_row][to_col].replace(id);
        if let Some(victim) = captured {
            self.captured.push(victim);
            debug!(%from, %to, victim, "capture recorded");
        }
        self.pieces[id].square = to;
        captured
    }

    /// 잡힌 기물 목록 (잡힌 순서)
    pub fn captured_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.captured.iter().filter_map(|&id| self.pieces.get(id))
    }

    /// 보드 위 기물 (1랭크부터)
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        Square::all().filter_map(|sq| self.get_piece(sq))
    }

    /// 텍스트 보드 (8랭크가 위)
    pub fn render(&self) -> String {
        let files = "   a  b  c  d  e  f  g  h\n";
        let mut out = String::from(files);
        for row in (0..BOARD_SIZE).rev() {
            let rank = row + 1;
            out.push_str(&format!("{}  ", rank));
            for col in 0..BOARD_SIZE {
                match self.get_piece(Square::new(row, col)) {
                    Some(piece) => out.push_str(&piece.symbol()),
                    None => out.push_str(". "),
                }
                out.push(' ');
            }
            out.push_str(&format!("{}\n", rank));
        }
        out.push_str(files);
        out
    }
}

impl Occupancy for Board {
    fn side_at(&self, square: Square) -> Option<Side> {
        self.get_piece(square).map(|p| p.side)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
