use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::actor::Actor;
use crate::config::Board;
use crate::food::Food;
use crate::input::GameInput;

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The actor moved onto a free cell.
    Moved,
    /// The actor moved onto the food cell and grew.
    Ate,
    /// The candidate cell was a fatal self-collision; the actor was reset.
    Died,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub actor: Actor,
    pub food: Food,
    /// Number of self-collision resets this session.
    pub deaths: u32,
    pub tick_count: u64,
    board: Board,
    rng: StdRng,
}

impl GameState {
    /// Creates a state with entropy-seeded randomness.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::from_rng(board, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(board: Board, seed: u64) -> Self {
        Self::from_rng(board, StdRng::seed_from_u64(seed))
    }

    fn from_rng(board: Board, mut rng: StdRng) -> Self {
        let actor = Actor::spawn(board, &mut rng);
        let food = Food::spawn(&mut rng, board, &actor);

        Self {
            actor,
            food,
            deaths: 0,
            tick_count: 0,
            board,
            rng,
        }
    }

    /// Returns the board geometry this session runs on.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Applies one external input event. Quit is handled by the loop, not
    /// the simulation.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Heading(heading) => self.actor.queue_heading(heading),
            GameInput::Quit => {}
        }
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick_count += 1;
        self.actor.resolve_heading();

        let candidate = self.actor.next_head(self.board);
        let ate = candidate == self.food.position;

        let outcome = if self.actor.is_fatal_collision(candidate) {
            self.actor.reset(self.board, &mut self.rng);
            self.deaths += 1;
            TickOutcome::Died
        } else {
            self.actor.advance(candidate, ate);
            if ate {
                self.food.relocate(&mut self.rng, self.board, &self.actor);
                TickOutcome::Ate
            } else {
                TickOutcome::Moved
            }
        };

        // A reset can drop the actor onto the food cell.
        if self.actor.occupies(self.food.position) {
            self.food.relocate(&mut self.rng, self.board, &self.actor);
        }

        outcome
    }
}
