use engine::{win_message, GameResult, GameState, Layout, MoveOutcome, MoveResult, Side, Square};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// JS에 노출되는 게임 래퍼
#[wasm_bindgen]
pub struct Game {
    state: GameState,
    debug: bool,
}

/// JS용 기물 정보
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsPiece {
    pub kind: String,
    pub owner: String,
    pub symbol: String,
    pub square: String,
    pub row: i32,
    pub col: i32,
}

/// JS용 게임 상태
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsGameState {
    pub pieces: Vec<JsPiece>,
    pub current_player: String,
    pub captured: Vec<String>,
    pub is_game_over: bool,
    pub winner: Option<String>,
}

/// JS용 이동 결과
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsMoveReport {
    pub accepted: bool,
    pub message: String,
    pub is_game_over: bool,
    pub winner: Option<String>,
}

#[wasm_bindgen]
impl Game {
    /// 새 게임 ("standard" 또는 "king-rook")
    #[wasm_bindgen(constructor)]
    pub fn new(layout: Option<String>) -> Result<Game, JsValue> {
        let layout = match layout {
            Some(name) => name
                .parse::<Layout>()
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Layout::Standard,
        };
        Ok(Game {
            state: GameState::with_layout(layout),
            debug: false,
        })
    }

    /// 거부된 이동을 콘솔에 출력
    #[wasm_bindgen]
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    /// 이동 입력 (예: "e2 e4")
    #[wasm_bindgen]
    pub fn submit(&mut self, input: &str) -> Result<JsValue, JsValue> {
        let result = self.state.submit(input);
        if self.debug {
            if let Err(e) = &result {
                log(&format!("rejected {:?}: {}", input, e));
            }
        }
        let report = move_report(&self.state, &result);
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    /// 현재 게임 상태
    #[wasm_bindgen]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&build_state(&self.state))?)
    }

    /// 이동 가능 칸 목록 (예: ["a3", "a4"])
    #[wasm_bindgen]
    pub fn legal_moves(&self, square: &str) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&legal_targets(&self.state, square))?)
    }

    /// 텍스트 보드
    #[wasm_bindgen]
    pub fn render(&self) -> String {
        self.state.board().render()
    }

    #[wasm_bindgen]
    pub fn current_player(&self) -> String {
        self.state.current_player().to_string()
    }

    #[wasm_bindgen]
    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }
}

fn side_name(side: Side) -> String {
    side.to_string()
}

fn winner_name(result: GameResult) -> Option<String> {
    result.winner().map(side_name)
}

fn build_state(state: &GameState) -> JsGameState {
    let board = state.board();
    let pieces = board
        .pieces()
        .map(|p| JsPiece {
            kind: p.kind.to_string(),
            owner: side_name(p.side),
            symbol: p.symbol(),
            square: p.square().to_notation().unwrap_or_default(),
            row: p.square().row,
            col: p.square().col,
        })
        .collect();

    JsGameState {
        pieces,
        current_player: side_name(state.current_player()),
        captured: board.captured_pieces().map(|p| p.symbol()).collect(),
        is_game_over: state.is_over(),
        winner: winner_name(state.result()),
    }
}

fn move_report(state: &GameState, result: &MoveResult<MoveOutcome>) -> JsMoveReport {
    let (accepted, message) = match result {
        Ok(MoveOutcome::Moved { .. }) => (true, String::new()),
        Ok(MoveOutcome::KingCaptured { loser, winner, .. }) => {
            (true, win_message(*loser, *winner))
        }
        Err(e) => (false, e.to_string()),
    };
    JsMoveReport {
        accepted,
        message,
        is_game_over: state.is_over(),
        winner: winner_name(state.result()),
    }
}

fn legal_targets(state: &GameState, square: &str) -> Vec<String> {
    Square::from_notation(square)
        .map(|sq| state.legal_moves_at(sq))
        .unwrap_or_default()
        .iter()
        .filter_map(Square::to_notation)
        .collect()
}

/// 콘솔 로그 (디버깅용)
fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

#[wasm_bindgen(start)]
pub fn main() {
    log("kingcap wasm initialized");
}
