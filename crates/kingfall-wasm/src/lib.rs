use wasm_bindgen::prelude::*;

use kingfall_core::{
    ClickOutcome, Color, GameController, GameEvent, Move, MoveOutcome, Piece, Selection,
    Snapshot, Square,
};
use serde::Serialize;

/// Initialize panic hook for readable error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Board coordinate as sent to JS: zero-based storage indices plus the label.
#[derive(Serialize)]
struct JsSquare {
    file: u8,
    rank: u8,
    label: String,
}

impl From<Square> for JsSquare {
    fn from(square: Square) -> Self {
        Self {
            file: square.file,
            rank: square.rank,
            label: square.label(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsMove {
    player: &'static str,
    piece: String,
    from: JsSquare,
    to: JsSquare,
    notation: String,
    captured: Option<String>,
}

impl From<&Move> for JsMove {
    fn from(mv: &Move) -> Self {
        Self {
            player: mv.color.name(),
            piece: piece_code(mv.piece),
            from: mv.from.into(),
            to: mv.to.into(),
            notation: mv.notation(),
            captured: mv.captured.map(piece_code),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCaptured {
    white: Vec<String>,
    black: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSelection {
    square: JsSquare,
    destinations: Vec<JsSquare>,
}

impl From<&Selection> for JsSelection {
    fn from(selection: &Selection) -> Self {
        Self {
            square: selection.square.into(),
            destinations: selection.destinations.iter().copied().map(JsSquare::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSnapshot {
    board: Vec<Vec<Option<String>>>,
    current_player: &'static str,
    status: &'static str,
    status_text: &'static str,
    move_history: Vec<JsMove>,
    captured_pieces: JsCaptured,
    last_move: Option<JsMove>,
    selection: Option<JsSelection>,
}

impl From<&Snapshot> for JsSnapshot {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            board: snapshot
                .board
                .rows()
                .iter()
                .map(|row| row.iter().map(|cell| cell.map(piece_code)).collect())
                .collect(),
            current_player: snapshot.turn.name(),
            status: snapshot.status.as_str(),
            status_text: snapshot.status.banner(),
            move_history: snapshot.history.iter().map(JsMove::from).collect(),
            captured_pieces: JsCaptured {
                white: pieces_to_codes(snapshot.captured(Color::White)),
                black: pieces_to_codes(snapshot.captured(Color::Black)),
            },
            last_move: snapshot.last_move.as_ref().map(JsMove::from),
            selection: snapshot.selection.as_ref().map(JsSelection::from),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsEvent {
    kind: &'static str,
    title: &'static str,
    description: String,
}

impl From<&GameEvent> for JsEvent {
    fn from(event: &GameEvent) -> Self {
        Self {
            kind: match event {
                GameEvent::Capture { .. } => "capture",
                GameEvent::GameOver { .. } => "gameOver",
            },
            title: event.title(),
            description: event.description(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsMoveOutcome {
    applied: Option<JsMove>,
    events: Vec<JsEvent>,
    snapshot: JsSnapshot,
}

impl From<&MoveOutcome> for JsMoveOutcome {
    fn from(outcome: &MoveOutcome) -> Self {
        Self {
            applied: outcome.applied.as_ref().map(JsMove::from),
            events: outcome.events.iter().map(JsEvent::from).collect(),
            snapshot: (&outcome.snapshot).into(),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum JsClick {
    Selected { selection: JsSelection },
    Cleared,
    Moved { outcome: JsMoveOutcome },
}

impl From<&ClickOutcome> for JsClick {
    fn from(click: &ClickOutcome) -> Self {
        match click {
            ClickOutcome::Selected(selection) => Self::Selected {
                selection: selection.into(),
            },
            ClickOutcome::Cleared => Self::Cleared,
            ClickOutcome::Moved(outcome) => Self::Moved {
                outcome: outcome.into(),
            },
        }
    }
}

fn piece_code(piece: Piece) -> String {
    piece.code().to_string()
}

fn pieces_to_codes(pieces: &[Piece]) -> Vec<String> {
    pieces.iter().copied().map(piece_code).collect()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Main WASM-exported game session.
#[wasm_bindgen]
pub struct KingfallEngine {
    controller: GameController,
}

impl Default for KingfallEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl KingfallEngine {
    /// Create a new game from the standard starting position.
    #[wasm_bindgen(constructor)]
    pub fn new() -> KingfallEngine {
        Self {
            controller: GameController::new(),
        }
    }

    /// Start a game from a board notation string, e.g. `"4k3/8/8/8/8/8/8/4K3 w"`.
    #[wasm_bindgen(js_name = "loadFen")]
    pub fn load_fen(fen: &str) -> Result<KingfallEngine, JsError> {
        let controller = GameController::from_fen(fen).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { controller })
    }

    /// Get the current board and side to move as a board notation string.
    pub fn fen(&self) -> String {
        self.controller.state().fen()
    }

    /// Full snapshot: board, currentPlayer, status, moveHistory, capturedPieces,
    /// lastMove and selection.
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(&JsSnapshot::from(&self.controller.snapshot()))
    }

    /// Handle a click on a board square. Returns `{ kind: "selected" | "cleared" | "moved", ... }`.
    /// Off-board coordinates count as an illegal target.
    #[wasm_bindgen(js_name = "squareClicked")]
    pub fn square_clicked(&mut self, file: u8, rank: u8) -> Result<JsValue, JsError> {
        let square = Square::new_unchecked(file, rank);
        let click = self.controller.square_clicked(square);
        to_js(&JsClick::from(&click))
    }

    /// Select a square. Returns the selection, or `undefined` when nothing selectable is there.
    #[wasm_bindgen(js_name = "selectSquare")]
    pub fn select_square(&mut self, file: u8, rank: u8) -> Result<JsValue, JsError> {
        let square = Square::new_unchecked(file, rank);
        let selection = self.controller.select_square(square).map(JsSelection::from);
        to_js(&selection)
    }

    /// Attempt a move by coordinates. Illegal or off-board moves leave the game
    /// unchanged and come back with `applied` unset.
    #[wasm_bindgen(js_name = "attemptMove")]
    pub fn attempt_move(
        &mut self,
        from_file: u8,
        from_rank: u8,
        to_file: u8,
        to_rank: u8,
    ) -> Result<JsValue, JsError> {
        let from = Square::new_unchecked(from_file, from_rank);
        let to = Square::new_unchecked(to_file, to_rank);
        let outcome = self.controller.attempt_move(from, to);
        to_js(&JsMoveOutcome::from(&outcome))
    }

    /// Attempt a move written as `e2e4` or `e2 → e4`.
    #[wasm_bindgen(js_name = "makeMove")]
    pub fn make_move(&mut self, notation: &str) -> Result<JsValue, JsError> {
        let outcome = self
            .controller
            .attempt_notation(notation)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&JsMoveOutcome::from(&outcome))
    }

    /// Move history as a JSON string, for export.
    #[wasm_bindgen(js_name = "historyJson")]
    pub fn history_json(&self) -> Result<String, JsError> {
        let history: Vec<JsMove> = self
            .controller
            .state()
            .history()
            .iter()
            .map(JsMove::from)
            .collect();
        serde_json::to_string(&history).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Start over from the standard starting position.
    pub fn reset(&mut self) {
        self.controller.reset();
    }

    /// Returns "white" or "black" for the side to move.
    pub fn turn(&self) -> String {
        self.controller.state().turn().name().to_string()
    }

    /// Returns "ongoing", "white_wins" or "black_wins".
    pub fn status(&self) -> String {
        self.controller.state().status().as_str().to_string()
    }

    /// Returns true once a king has been captured.
    #[wasm_bindgen(js_name = "isGameOver")]
    pub fn is_game_over(&self) -> bool {
        self.controller.state().status().is_over()
    }
}
