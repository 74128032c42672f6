//! Session controller: the only surface the presentation layer talks to.
//!
//! The controller owns the [`GameState`] and the transient [`Selection`],
//! interprets square clicks as either a selection or a move attempt, and
//! reports captures and game-over as [`GameEvent`] notifications.

use std::fmt;

use crate::board::Board;
use crate::game::Status;
use crate::notation::{parse_move, NotationError};
use crate::position::{GameState, PositionError};
use crate::types::{Color, Move, Piece, Square, SquareList};

/// A selected square and the destinations its piece can reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    pub destinations: SquareList,
}

impl Selection {
    pub fn contains(&self, square: Square) -> bool {
        self.destinations.contains(&square)
    }
}

/// Notification for the presentation layer. Not part of the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Capture { by: Color, piece: Piece },
    GameOver { winner: Color },
}

impl GameEvent {
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Capture { .. } => "Piece Captured!",
            Self::GameOver { .. } => "Game Over!",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::Capture { by, piece } => format!("{} captured {}", by.name(), piece),
            Self::GameOver { winner } => format!("{} wins!", winner.title()),
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.description())
    }
}

/// Read-only projection of the session for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub turn: Color,
    pub status: Status,
    pub history: Vec<Move>,
    pub captured_white: Vec<Piece>,
    pub captured_black: Vec<Piece>,
    pub last_move: Option<Move>,
    pub selection: Option<Selection>,
}

impl Snapshot {
    pub fn captured(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.captured_white,
            Color::Black => &self.captured_black,
        }
    }

    pub fn is_highlighted(&self, square: Square) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|selection| selection.contains(square))
    }

    pub fn is_selected(&self, square: Square) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|selection| selection.square == square)
    }

    pub fn is_last_move_square(&self, square: Square) -> bool {
        self.last_move
            .is_some_and(|mv| mv.from == square || mv.to == square)
    }
}

/// Result of [`GameController::attempt_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move just played, or `None` when the attempt was rejected.
    pub applied: Option<Move>,
    pub events: Vec<GameEvent>,
    pub snapshot: Snapshot,
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        self.applied.is_some()
    }
}

/// Result of [`GameController::square_clicked`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// An own piece was selected; its destinations are highlighted.
    Selected(Selection),
    /// Nothing selectable was clicked, or a pending selection was dropped.
    Cleared,
    /// The pending selection moved to the clicked square.
    Moved(MoveOutcome),
}

#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
    selection: Option<Selection>,
}

impl GameController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        Ok(Self {
            state: GameState::from_fen(fen)?,
            selection: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: *self.state.board(),
            turn: self.state.turn(),
            status: self.state.status(),
            history: self.state.history().to_vec(),
            captured_white: self.state.captured(Color::White).to_vec(),
            captured_black: self.state.captured(Color::Black).to_vec(),
            last_move: self.state.last_move().copied(),
            selection: self.selection.clone(),
        }
    }

    /// Selects `square` when it holds a piece of the side to move, replacing
    /// any earlier selection. Otherwise clears the selection.
    pub fn select_square(&mut self, square: Square) -> Option<&Selection> {
        self.selection = None;
        if self.state.status().is_over() {
            return None;
        }
        let piece = self.state.board().get(square)?;
        if piece.color != self.state.turn() {
            return None;
        }
        self.selection = Some(Selection {
            square,
            destinations: self.state.legal_destinations(square),
        });
        self.selection.as_ref()
    }

    /// Plays `from → to` if legal. The selection is cleared either way.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        self.selection = None;
        if self.state.status().is_over() || !self.state.is_legal(from, to) {
            return MoveOutcome {
                applied: None,
                events: Vec::new(),
                snapshot: self.snapshot(),
            };
        }

        let mv = self.state.apply_move(from, to);
        let mut events = Vec::new();
        if let Some(piece) = mv.captured {
            events.push(GameEvent::Capture {
                by: mv.color,
                piece,
            });
        }
        if let Some(winner) = self.state.status().winner() {
            events.push(GameEvent::GameOver { winner });
        }

        MoveOutcome {
            applied: Some(mv),
            events,
            snapshot: self.snapshot(),
        }
    }

    /// Parses a move string (see [`parse_move`]) and attempts it.
    pub fn attempt_notation(&mut self, input: &str) -> Result<MoveOutcome, NotationError> {
        let (from, to) = parse_move(input)?;
        Ok(self.attempt_move(from, to))
    }

    /// Click handling: with a pending selection the click is a move attempt,
    /// otherwise it tries to select the clicked square.
    pub fn square_clicked(&mut self, square: Square) -> ClickOutcome {
        if let Some(selection) = self.selection.take() {
            let outcome = self.attempt_move(selection.square, square);
            return if outcome.is_applied() {
                ClickOutcome::Moved(outcome)
            } else {
                ClickOutcome::Cleared
            };
        }

        match self.select_square(square) {
            Some(selection) => ClickOutcome::Selected(selection.clone()),
            None => ClickOutcome::Cleared,
        }
    }

    /// Discards the session and starts over from the standard position.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.selection = None;
    }
}
