use std::collections::VecDeque;

use rand::Rng;

use crate::config::Board;
use crate::input::Heading;

/// Board position in pixel units, aligned to the cell grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    /// Returns the cell at the center of `board`, snapped to the cell grid.
    #[must_use]
    pub fn board_center(board: Board) -> Self {
        Self {
            x: board.width / 2 / board.cell * board.cell,
            y: board.height / 2 / board.cell * board.cell,
        }
    }

    /// Returns this position wrapped into board bounds on both axes.
    #[must_use]
    pub fn wrapped(self, board: Board) -> Self {
        Self {
            x: self.x.rem_euclid(board.width),
            y: self.y.rem_euclid(board.height),
        }
    }
}

/// The player-controlled actor: body segments, heading, and queued turn.
///
/// The body is ordered head-first. `length` is the target the body is trimmed
/// to after each step; growth raises the target rather than inserting cells.
#[derive(Debug, Clone)]
pub struct Actor {
    segments: VecDeque<GridCell>,
    length: usize,
    heading: Heading,
    pending: Option<Heading>,
}

impl Actor {
    /// Creates a one-cell actor at `start` with the provided heading.
    #[must_use]
    pub fn new(start: GridCell, heading: Heading) -> Self {
        let mut segments = VecDeque::new();
        segments.push_front(start);

        Self {
            segments,
            length: 1,
            heading,
            pending: None,
        }
    }

    /// Creates a one-cell actor at the board center with a random heading.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Self {
        Self::new(GridCell::board_center(board), Heading::random(rng))
    }

    /// Creates an actor from explicit body segments (front is head).
    ///
    /// The target length is set to the segment count, so the body is stable
    /// until the next growth event.
    #[must_use]
    pub fn from_segments(segments: Vec<GridCell>, heading: Heading) -> Self {
        let length = segments.len().max(1);

        Self {
            segments: VecDeque::from(segments),
            length,
            heading,
            pending: None,
        }
    }

    /// Queues `heading` to take effect on the next tick.
    ///
    /// The exact opposite of the current heading is ignored (no reversal into
    /// one's own neck). Queuing twice in one tick overwrites: last input wins.
    pub fn queue_heading(&mut self, heading: Heading) {
        if heading == self.heading.opposite() {
            return;
        }

        self.pending = Some(heading);
    }

    /// Promotes the queued heading, if any. Called once per tick before
    /// movement, so a tick applies at most one direction change.
    pub fn resolve_heading(&mut self) {
        if let Some(next) = self.pending.take() {
            self.heading = next;
        }
    }

    /// Returns the candidate head cell for this tick, wrapped into bounds.
    /// Pure; the body is not touched.
    #[must_use]
    pub fn next_head(&self, board: Board) -> GridCell {
        let head = self.head();
        let (dx, dy) = self.heading.delta();

        GridCell {
            x: head.x + dx * board.cell,
            y: head.y + dy * board.cell,
        }
        .wrapped(board)
    }

    /// Returns true when stepping onto `candidate` is a fatal self-collision.
    ///
    /// The head and the segment directly behind it never count: the trailing
    /// cell is about to be vacated, so only `segments[2..]` are solid. A
    /// consequence is that an actor of length 3 or less can never collide
    /// with itself.
    #[must_use]
    pub fn is_fatal_collision(&self, candidate: GridCell) -> bool {
        self.segments
            .iter()
            .skip(2)
            .any(|segment| *segment == candidate)
    }

    /// Steps onto `candidate`: pushes the new head and trims the tail to the
    /// target length. Eating raises the target first, so the tail survives
    /// the eating tick.
    pub fn advance(&mut self, candidate: GridCell, ate_food: bool) {
        if ate_food {
            self.length += 1;
        }

        self.segments.push_front(candidate);
        if self.segments.len() > self.length {
            let _ = self.segments.pop_back();
        }
    }

    /// Returns the actor to a single cell at the board center with a fresh
    /// random heading and no queued turn.
    pub fn reset<R: Rng + ?Sized>(&mut self, board: Board, rng: &mut R) {
        self.length = 1;
        self.segments.clear();
        self.segments.push_front(GridCell::board_center(board));
        self.heading = Heading::random(rng);
        self.pending = None;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> GridCell {
        *self
            .segments
            .front()
            .expect("actor body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: GridCell) -> bool {
        self.segments.contains(&cell)
    }

    /// Returns the current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the target length the body is trimmed to.
    #[must_use]
    pub fn target_length(&self) -> usize {
        self.length
    }

    /// Returns the current movement heading.
    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Returns the queued heading, if one is pending.
    #[must_use]
    pub fn pending_heading(&self) -> Option<Heading> {
        self.pending
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &GridCell> {
        self.segments.iter()
    }
}
