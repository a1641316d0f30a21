use wrapsnake::actor::{Actor, GridCell};
use wrapsnake::config::Board;
use wrapsnake::food::Food;
use wrapsnake::game::{GameState, TickOutcome};
use wrapsnake::input::{GameInput, Heading};

#[test]
fn stepwise_food_collection_turning_and_wrap() {
    let board = Board::default();
    let mut state = GameState::new_with_seed(board, 42);
    state.actor = Actor::new(GridCell { x: 320, y: 240 }, Heading::Right);
    state.food = Food::new(GridCell { x: 340, y: 240 });

    assert_eq!(state.tick(), TickOutcome::Ate);
    assert_eq!(state.actor.head(), GridCell { x: 340, y: 240 });
    assert_eq!(state.actor.len(), 2);
    assert_ne!(state.food.position, GridCell { x: 340, y: 240 });

    // Park the food away from the actor's path for the rest of the run.
    state.food = Food::new(GridCell { x: 0, y: 460 });

    state.apply_input(GameInput::Heading(Heading::Up));
    assert_eq!(state.tick(), TickOutcome::Moved);
    assert_eq!(state.actor.head(), GridCell { x: 340, y: 220 });
    assert_eq!(state.actor.len(), 2);

    // A reversal queued mid-run is ignored; the actor keeps heading up and
    // wraps over the top edge.
    state.apply_input(GameInput::Heading(Heading::Down));
    for _ in 0..11 {
        assert_eq!(state.tick(), TickOutcome::Moved);
    }
    assert_eq!(state.actor.head(), GridCell { x: 340, y: 0 });

    assert_eq!(state.tick(), TickOutcome::Moved);
    assert_eq!(state.actor.head(), GridCell { x: 340, y: 460 });
    assert_eq!(state.tick_count, 14);
    assert_eq!(state.deaths, 0);
}

#[test]
fn coiled_actor_dies_and_restarts_from_the_center() {
    let board = Board::default();
    let mut state = GameState::new_with_seed(board, 7);
    state.actor = Actor::from_segments(
        vec![
            GridCell { x: 100, y: 100 },
            GridCell { x: 120, y: 100 },
            GridCell { x: 120, y: 120 },
            GridCell { x: 100, y: 120 },
            GridCell { x: 80, y: 120 },
        ],
        Heading::Down,
    );
    state.food = Food::new(GridCell { x: 500, y: 60 });

    assert_eq!(state.tick(), TickOutcome::Died);
    assert_eq!(state.deaths, 1);
    assert_eq!(state.actor.len(), 1);
    assert_eq!(state.actor.head(), GridCell { x: 320, y: 240 });
    assert!(!state.actor.occupies(state.food.position));

    // Play continues after the reset: the next tick is an ordinary move.
    state.food = Food::new(GridCell { x: 0, y: 0 });
    let outcome = state.tick();
    assert!(matches!(outcome, TickOutcome::Moved | TickOutcome::Ate));
    assert_eq!(state.deaths, 1);
}
