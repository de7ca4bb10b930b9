use std::collections::VecDeque;

use super::{
    direction::Direction,
    state::{CollisionType, Position},
};

/// Speed a freshly spawned snake starts with, in cells per tick
pub const DEFAULT_SPEED: f32 = 0.1;

/// Fastest a snake may go. The head never crosses more than one cell per tick,
/// so no cell is skipped for collisions or body segments.
pub const MAX_SPEED: f32 = 1.0;

/// Everything the game loop needs from a snake body.
///
/// The [`Game`](super::Game) owns its body outright; input handling and rendering
/// only ever borrow it for the duration of a single tick.
pub trait Body {
    /// Build a fresh body on a `grid_width` x `grid_height` grid
    fn spawn(grid_width: usize, grid_height: usize, speed: f32) -> Self;

    /// Move one tick forward
    fn advance(&mut self);

    /// Add one segment
    fn grow(&mut self);

    /// Remove one segment (never below a lone head)
    fn shrink(&mut self);

    /// Check if a cell is covered by the head or any segment
    fn occupies(&self, pos: Position) -> bool;

    /// Cell currently holding the head
    fn head(&self) -> Position;

    /// Number of cells the snake covers, including pending growth
    fn size(&self) -> usize;

    fn speed(&self) -> f32;

    /// Add `delta` to the speed, capped at the body's top speed
    fn accelerate(&mut self, delta: f32);

    fn is_alive(&self) -> bool;

    /// Change heading; reversing onto the body is refused
    fn steer(&mut self, direction: Direction);

    /// (width, height) of the grid the body lives on
    fn grid_size(&self) -> (usize, usize);
}

/// Snake that glides across the grid at a fractional speed.
///
/// The head keeps a sub-cell position and only drags the body along once it
/// crosses into a new cell. Leaving the grid or entering a body cell kills it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    head_x: f32,
    head_y: f32,
    /// Trailing segments, oldest (tail) first
    body: VecDeque<Position>,
    direction: Direction,
    speed: f32,
    size: usize,
    /// Segments promised by `grow` that have not been laid down yet
    pending_growth: usize,
    alive: bool,
    death_cause: Option<CollisionType>,
    grid_width: usize,
    grid_height: usize,
}

impl Snake {
    /// Create a snake in the middle of the grid, heading up
    pub fn new(grid_width: usize, grid_height: usize) -> Self {
        Self::spawn(grid_width, grid_height, DEFAULT_SPEED)
    }

    /// Create a single-cell snake at `head` moving in `direction`
    pub fn at(
        head: Position,
        direction: Direction,
        speed: f32,
        grid_width: usize,
        grid_height: usize,
    ) -> Self {
        Self {
            head_x: head.x as f32 + 0.5,
            head_y: head.y as f32 + 0.5,
            body: VecDeque::new(),
            direction,
            speed: speed.min(MAX_SPEED),
            size: 1,
            pending_growth: 0,
            alive: true,
            death_cause: None,
            grid_width,
            grid_height,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Body segments behind the head, tail first
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Why the snake died, if it has
    pub fn death_cause(&self) -> Option<CollisionType> {
        self.death_cause
    }

    fn head_in_bounds(&self) -> bool {
        self.head_x >= 0.0
            && self.head_x < self.grid_width as f32
            && self.head_y >= 0.0
            && self.head_y < self.grid_height as f32
    }

    fn die(&mut self, cause: CollisionType) {
        self.alive = false;
        self.death_cause = Some(cause);
    }

    fn enter_cell(&mut self, current: Position, previous: Position) {
        self.body.push_back(previous);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop_front();
        }

        if self.body.contains(&current) {
            self.die(CollisionType::SelfCollision);
        }
    }
}

impl Body for Snake {
    fn spawn(grid_width: usize, grid_height: usize, speed: f32) -> Self {
        let center = Position::new((grid_width / 2) as i32, (grid_height / 2) as i32);
        Self::at(center, Direction::Up, speed, grid_width, grid_height)
    }

    fn advance(&mut self) {
        if !self.alive {
            return;
        }

        let previous = self.head();
        let (dx, dy) = self.direction.delta();
        self.head_x += dx * self.speed;
        self.head_y += dy * self.speed;

        if !self.head_in_bounds() {
            self.die(CollisionType::Wall);
            return;
        }

        let current = self.head();
        if current != previous {
            self.enter_cell(current, previous);
        }
    }

    fn grow(&mut self) {
        self.size += 1;
        self.pending_growth += 1;
    }

    fn shrink(&mut self) {
        if self.size <= 1 {
            return;
        }
        self.size -= 1;
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop_front();
        }
    }

    fn occupies(&self, pos: Position) -> bool {
        self.head() == pos || self.body.contains(&pos)
    }

    fn head(&self) -> Position {
        Position::new(self.head_x.floor() as i32, self.head_y.floor() as i32)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn accelerate(&mut self, delta: f32) {
        self.speed = (self.speed + delta).min(MAX_SPEED);
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn steer(&mut self, direction: Direction) {
        // A lone head has nothing to reverse into
        if self.size == 1 || !self.direction.is_opposite(direction) {
            self.direction = direction;
        }
    }

    fn grid_size(&self) -> (usize, usize) {
        (self.grid_width, self.grid_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_snake(x: i32, y: i32, direction: Direction) -> Snake {
        Snake::at(Position::new(x, y), direction, 1.0, 10, 10)
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(10, 10);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.size(), 1);
        assert_eq!(snake.direction(), Direction::Up);
        assert!((snake.speed() - DEFAULT_SPEED).abs() < 1e-6);
        assert!(snake.is_alive());
        assert_eq!(snake.grid_size(), (10, 10));
    }

    #[test]
    fn test_slow_snake_needs_several_ticks_per_cell() {
        let mut snake = Snake::at(Position::new(5, 5), Direction::Right, 0.1, 10, 10);

        for _ in 0..4 {
            snake.advance();
        }
        assert_eq!(snake.head(), Position::new(5, 5));

        for _ in 0..6 {
            snake.advance();
        }
        assert_eq!(snake.head(), Position::new(6, 5));
    }

    #[test]
    fn test_growth_is_counted_immediately_and_laid_on_next_cell() {
        let mut snake = fast_snake(5, 5, Direction::Right);

        snake.grow();
        assert_eq!(snake.size(), 2);
        assert_eq!(snake.segments().count(), 0);

        snake.advance();
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.size(), 2);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(6, 5)));

        snake.advance();
        assert_eq!(snake.size(), 2);
        assert!(!snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(6, 5)));
    }

    #[test]
    fn test_shrink_drops_tail() {
        let mut snake = fast_snake(2, 5, Direction::Right);
        snake.grow();
        snake.grow();
        snake.advance();
        snake.advance();
        assert_eq!(snake.size(), 3);
        assert!(snake.occupies(Position::new(2, 5)));

        snake.shrink();

        assert_eq!(snake.size(), 2);
        assert!(!snake.occupies(Position::new(2, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(snake.occupies(Position::new(4, 5)));
    }

    #[test]
    fn test_shrink_cancels_pending_growth_first() {
        let mut snake = fast_snake(5, 5, Direction::Right);
        snake.grow();
        snake.shrink();
        assert_eq!(snake.size(), 1);

        snake.advance();
        assert_eq!(snake.segments().count(), 0);
    }

    #[test]
    fn test_shrink_never_removes_head() {
        let mut snake = fast_snake(5, 5, Direction::Right);
        snake.shrink();
        assert_eq!(snake.size(), 1);
        assert!(snake.occupies(Position::new(5, 5)));
    }

    #[test]
    fn test_wall_collision() {
        let mut snake = fast_snake(0, 5, Direction::Left);
        snake.advance();

        assert!(!snake.is_alive());
        assert_eq!(snake.death_cause(), Some(CollisionType::Wall));
    }

    #[test]
    fn test_self_collision() {
        let mut snake = fast_snake(5, 5, Direction::Right);
        for _ in 0..4 {
            snake.grow();
        }
        for _ in 0..4 {
            snake.advance();
        }
        // Head (9,5) with body (5..=8, 5) behind it
        snake.steer(Direction::Down);
        snake.advance();
        snake.steer(Direction::Left);
        snake.advance();
        snake.steer(Direction::Up);
        snake.advance();

        assert!(!snake.is_alive());
        assert_eq!(snake.death_cause(), Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_dead_snake_does_not_move() {
        let mut snake = fast_snake(0, 5, Direction::Left);
        snake.advance();
        let head = snake.head();

        snake.advance();
        assert_eq!(snake.head(), head);
    }

    #[test]
    fn test_reversal_refused_once_body_exists() {
        let mut snake = fast_snake(5, 5, Direction::Right);
        snake.steer(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);

        snake.grow();
        snake.steer(Direction::Right);
        assert_eq!(snake.direction(), Direction::Left);

        snake.steer(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_speed_capped_at_one_cell_per_tick() {
        let mut snake = Snake::at(Position::new(0, 5), Direction::Right, 0.9, 10, 10);
        for _ in 0..20 {
            snake.accelerate(0.02);
        }
        assert_eq!(snake.speed(), MAX_SPEED);

        let fast = Snake::at(Position::new(0, 5), Direction::Right, 3.0, 10, 10);
        assert_eq!(fast.speed(), MAX_SPEED);
    }

    #[test]
    fn test_top_speed_visits_every_cell() {
        let mut snake = Snake::at(Position::new(0, 5), Direction::Right, 0.98, 10, 10);
        snake.accelerate(0.02);
        snake.accelerate(0.02);
        for _ in 0..3 {
            snake.grow();
        }

        for x in 1..10 {
            snake.advance();
            assert_eq!(snake.head(), Position::new(x, 5));
        }
        assert!(snake.is_alive());
        for x in 6..9 {
            assert!(snake.occupies(Position::new(x, 5)));
        }
    }

    #[test]
    fn test_accelerate() {
        let mut snake = Snake::new(10, 10);
        snake.accelerate(0.02);
        assert!((snake.speed() - 0.12).abs() < 1e-6);
    }
}
