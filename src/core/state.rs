//! Game state: board, active piece and progression, plus the transition
//! rules that tie them together.
//!
//! One `GameState` is owned by one session and threaded through the tick
//! functions by exclusive reference. Every movement decision goes through
//! `Board::fits`; a failed candidate is a no-op, never an error.

use crate::core::{ActivePiece, Board, Progression, ShapePicker};
use crate::types::Command;

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    progression: Progression,
    picker: ShapePicker,
    over: bool,
}

impl GameState {
    /// Start a session: walled empty board, first piece spawned.
    pub fn new(seed: u32) -> Self {
        let mut picker = ShapePicker::new(seed);
        let mut progression = Progression::new();

        let active = ActivePiece::spawn(picker.pick());
        progression.award_spawn_bonus();

        Self {
            board: Board::new(),
            active,
            progression,
            picker,
            over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    /// Terminal state: the last spawn collided. No further input or
    /// gravity is processed.
    pub fn over(&self) -> bool {
        self.over
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Apply one sampled input command. Returns whether the candidate
    /// placement was committed.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.over {
            return false;
        }
        let candidate = match command {
            Command::MoveLeft => self.active.translated(0, -1),
            Command::MoveRight => self.active.translated(0, 1),
            Command::SoftDrop => self.active.translated(1, 0),
            Command::RotateCw => self.active.rotated_cw(),
        };
        if candidate.fits(&self.board) {
            self.active = candidate;
            true
        } else {
            false
        }
    }

    /// Advance one fixed-duration tick. Returns true when this tick locked
    /// a piece.
    pub fn tick(&mut self) -> bool {
        if self.over {
            return false;
        }
        if !self.progression.advance_tick() {
            return false;
        }

        // Gravity fires: descend one row, or lock where we rest.
        let candidate = self.active.translated(1, 0);
        if candidate.fits(&self.board) {
            self.active = candidate;
            false
        } else {
            self.lock_and_advance();
            true
        }
    }

    /// Fix the resting piece into the board, collapse completed rows in its
    /// span, update progression, and hand play to the next piece.
    fn lock_and_advance(&mut self) {
        let piece = self.active;
        self.board
            .lock(piece.shape, piece.rotation, piece.row, piece.col);

        let cleared = self.board.clear_completed_rows(piece.row);
        self.progression.award_line_clears(cleared.len() as u32);

        self.spawn_piece();
    }

    /// Draw a random shape and place it at the spawn anchor.
    ///
    /// Sets `over` when the fresh piece collides: the stack has reached the
    /// spawn zone. The piece stays in place either way so the final frame
    /// can show it.
    fn spawn_piece(&mut self) {
        self.active = ActivePiece::spawn(self.picker.pick());
        self.progression.award_spawn_bonus();
        if !self.active.fits(&self.board) {
            self.over = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Cell, ShapeId, BOARD_COLS, BOARD_ROWS, LINE_CLEAR_SCORE, SPAWN_BONUS, SPAWN_COL, SPAWN_ROW,
    };

    fn soft_drop_to_rest(state: &mut GameState) {
        while state.apply(Command::SoftDrop) {}
    }

    /// Tick until gravity next fires.
    fn tick_through_gravity(state: &mut GameState) {
        let interval = state.progression().fall_interval_ticks();
        for _ in 0..interval {
            state.tick();
        }
    }

    #[test]
    fn new_session_charges_the_spawn_bonus() {
        let state = GameState::new(42);
        assert_eq!(state.progression().score(), SPAWN_BONUS);
        assert_eq!(state.progression().level(), 1);
        assert!(!state.over());
    }

    #[test]
    fn horizontal_moves_commit_and_stop_at_walls() {
        let mut state = GameState::new(42);
        let start_col = state.active().col;

        assert!(state.apply(Command::MoveLeft));
        assert_eq!(state.active().col, start_col - 1);

        // Slam into the left wall; the piece must stop, not wrap or vanish.
        for _ in 0..BOARD_COLS {
            state.apply(Command::MoveLeft);
        }
        assert!(!state.apply(Command::MoveLeft));
        assert!(state.active().fits(state.board()));
    }

    #[test]
    fn locked_cells_fail_the_fit_test_afterwards() {
        let mut state = GameState::new(7);
        soft_drop_to_rest(&mut state);
        let resting = state.active();

        tick_through_gravity(&mut state);

        // The resting placement is now occupied by its own locked cells.
        assert!(!resting.fits(state.board()));
        for (row, col) in resting.cells() {
            assert_eq!(
                state.board().get(row, col),
                Some(Cell::Filled(resting.shape))
            );
        }
        // Play moved on to a fresh piece at the spawn anchor.
        assert_eq!(state.active().row, 0);
    }

    #[test]
    fn completing_a_row_scores_and_shifts() {
        let mut state = GameState::new(3);
        let piece = state.active();
        let target = BOARD_ROWS - 2;

        // The piece falls straight down, so its deepest cells come to rest
        // on the target row. Pre-fill every other interior column there.
        let mut bottom = [i8::MIN; BOARD_COLS as usize];
        for (row, col) in piece.cells() {
            let b = &mut bottom[col as usize];
            *b = (*b).max(row);
        }
        let deepest = *bottom.iter().max().expect("piece has cells");
        let gap: Vec<i8> = (1..BOARD_COLS - 1)
            .filter(|&col| bottom[col as usize] == deepest)
            .collect();
        let piece_cols: Vec<i8> = piece.cells().map(|(_, col)| col).collect();

        for col in 1..BOARD_COLS - 1 {
            if !gap.contains(&col) {
                state.board_mut().set(target, col, Cell::Filled(ShapeId::L));
            }
        }
        // A marker above the target row, clear of the piece's columns so
        // the descent cannot bump it.
        let marker_col = (1..BOARD_COLS - 1)
            .find(|col| !piece_cols.contains(col))
            .expect("piece spans at most 4 of 10 interior columns");
        state
            .board_mut()
            .set(target - 1, marker_col, Cell::Filled(ShapeId::Z));

        let score_before = state.progression().score();
        soft_drop_to_rest(&mut state);
        tick_through_gravity(&mut state);

        assert_eq!(state.progression().lines(), 1, "shape {:?}", piece.shape);
        assert_eq!(
            state.progression().score(),
            score_before + LINE_CLEAR_SCORE + SPAWN_BONUS
        );
        // The marker shifted down onto the cleared row.
        assert_eq!(
            state.board().get(target, marker_col),
            Some(Cell::Filled(ShapeId::Z))
        );
        assert_eq!(state.board().get(target - 1, marker_col), Some(Cell::Empty));
    }

    #[test]
    fn blocked_spawn_zone_ends_the_game() {
        let mut state = GameState::new(11);
        // Every shape's spawn placement covers local cell (1, 2), so one
        // well-placed block denies any respawn. The current piece either
        // locks in place over it or falls past it to the floor; either way
        // the next spawn collides.
        state
            .board_mut()
            .set(SPAWN_ROW + 1, SPAWN_COL + 2, Cell::Filled(ShapeId::I));

        soft_drop_to_rest(&mut state);
        tick_through_gravity(&mut state);

        assert!(state.over());
        // A terminal state ignores input and further ticks.
        let frozen = state.active();
        assert!(!state.apply(Command::MoveLeft));
        assert!(!state.tick());
        assert_eq!(state.active(), frozen);
    }

    #[test]
    fn gravity_waits_for_the_full_interval() {
        let mut state = GameState::new(5);
        let start_row = state.active().row;
        let interval = state.progression().fall_interval_ticks();

        for _ in 0..interval - 1 {
            state.tick();
        }
        assert_eq!(state.active().row, start_row);

        state.tick();
        assert_eq!(state.active().row, start_row + 1);
    }
}
