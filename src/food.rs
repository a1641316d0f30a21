use rand::Rng;

use crate::actor::{Actor, GridCell};
use crate::config::Board;

/// The single consumable cell on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: GridCell,
}

impl Food {
    /// Creates food at a fixed position, for tests and forced setups.
    #[must_use]
    pub fn new(position: GridCell) -> Self {
        Self { position }
    }

    /// Spawns food on a cell not occupied by the actor.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, board: Board, actor: &Actor) -> Self {
        Self::new(free_cell(rng, board, actor))
    }

    /// Moves the food to a uniformly random cell disjoint from the actor.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, board: Board, actor: &Actor) {
        self.position = free_cell(rng, board, actor);
    }
}

/// Picks a uniformly random cell that the actor does not occupy.
///
/// Enumerating the free cells and choosing one gives the same distribution as
/// re-rolling until disjoint, and always terminates.
#[must_use]
pub fn free_cell<R: Rng + ?Sized>(rng: &mut R, board: Board, actor: &Actor) -> GridCell {
    let mut candidates = Vec::with_capacity(board.total_cells());

    for gy in 0..board.grid_height() {
        for gx in 0..board.grid_width() {
            let cell = GridCell {
                x: gx * board.cell,
                y: gy * board.cell,
            };
            if !actor.occupies(cell) {
                candidates.push(cell);
            }
        }
    }

    assert!(
        !candidates.is_empty(),
        "free_cell: no free cells on the board ({}×{})",
        board.grid_width(),
        board.grid_height(),
    );

    let index = rng.gen_range(0..candidates.len());
    candidates[index]
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::actor::{Actor, GridCell};
    use crate::config::Board;
    use crate::input::Heading;

    use super::{free_cell, Food};

    #[test]
    fn food_never_lands_on_the_actor() {
        let board = Board::default();
        let mut rng = StdRng::seed_from_u64(7);
        let actor = Actor::from_segments(
            vec![
                GridCell { x: 0, y: 0 },
                GridCell { x: 20, y: 0 },
                GridCell { x: 40, y: 0 },
            ],
            Heading::Right,
        );

        for _ in 0..200 {
            let cell = free_cell(&mut rng, board, &actor);
            assert!(!actor.occupies(cell));
        }
    }

    #[test]
    fn food_positions_are_cell_aligned_and_in_bounds() {
        let board = Board::default();
        let mut rng = StdRng::seed_from_u64(11);
        let actor = Actor::new(GridCell { x: 320, y: 240 }, Heading::Right);

        for _ in 0..200 {
            let cell = free_cell(&mut rng, board, &actor);
            assert_eq!(cell.x % board.cell, 0);
            assert_eq!(cell.y % board.cell, 0);
            assert!(cell.x >= 0 && cell.x < board.width);
            assert!(cell.y >= 0 && cell.y < board.height);
        }
    }

    #[test]
    fn relocate_moves_off_the_consumed_cell() {
        let board = Board::default();
        let mut rng = StdRng::seed_from_u64(3);
        // Actor sits on the food cell right after eating it.
        let actor = Actor::from_segments(
            vec![GridCell { x: 100, y: 100 }, GridCell { x: 80, y: 100 }],
            Heading::Right,
        );
        let mut food = Food::new(GridCell { x: 100, y: 100 });

        food.relocate(&mut rng, board, &actor);

        assert_ne!(food.position, GridCell { x: 100, y: 100 });
        assert!(!actor.occupies(food.position));
    }
}
