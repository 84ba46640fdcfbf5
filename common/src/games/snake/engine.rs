use super::snake::Snake;
use super::types::{Direction, FieldSize, Point, TerminationReason};

/// Result of advancing the snake by one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Moved(Snake),
    /// The head landed on the food; the tail was kept and new food is needed.
    Grew { snake: Snake, score_delta: u32 },
    Terminated(TerminationReason),
}

/// Moves the snake one step in `direction`. The input snake is left untouched.
pub fn advance(snake: &Snake, direction: Direction, food: Point, bounds: &FieldSize) -> Outcome {
    let next_head = match next_head_position(snake, direction, bounds) {
        Ok(next_head) => next_head,
        Err(reason) => return Outcome::Terminated(reason),
    };

    let mut next = snake.clone();
    next.push_head(next_head);

    if next_head == food {
        return Outcome::Grew {
            snake: next,
            score_delta: 1,
        };
    }

    next.drop_tail();
    Outcome::Moved(next)
}

// The whole current body counts, including the tail that would move away this tick.
fn next_head_position(
    snake: &Snake,
    direction: Direction,
    bounds: &FieldSize,
) -> Result<Point, TerminationReason> {
    let next_head = snake.head().step(direction);

    if !bounds.contains(next_head) {
        return Err(TerminationReason::Wall);
    }

    if snake.contains(&next_head) {
        return Err(TerminationReason::SelfCollision);
    }

    Ok(next_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(segments: &[(i32, i32)]) -> Snake {
        Snake::from_segments(segments.iter().map(|&(row, col)| Point::new(row, col)))
            .expect("test snake should not be empty")
    }

    #[test]
    fn test_wall_collision_on_left_border() {
        let outcome = advance(
            &snake(&[(0, 0), (0, 1)]),
            Direction::Left,
            Point::new(4, 4),
            &FieldSize::new(5, 5),
        );
        assert_eq!(outcome, Outcome::Terminated(TerminationReason::Wall));
    }

    #[test]
    fn test_wall_collision_on_far_borders() {
        let bounds = FieldSize::new(5, 5);
        let food = Point::new(0, 0);
        assert_eq!(
            advance(&snake(&[(4, 2)]), Direction::Down, food, &bounds),
            Outcome::Terminated(TerminationReason::Wall)
        );
        assert_eq!(
            advance(&snake(&[(2, 4)]), Direction::Right, food, &bounds),
            Outcome::Terminated(TerminationReason::Wall)
        );
        assert_eq!(
            advance(&snake(&[(0, 3)]), Direction::Up, food, &bounds),
            Outcome::Terminated(TerminationReason::Wall)
        );
    }

    #[test]
    fn test_eating_food_grows_snake() {
        let outcome = advance(
            &snake(&[(2, 2), (2, 1)]),
            Direction::Right,
            Point::new(2, 3),
            &FieldSize::new(10, 10),
        );
        assert_eq!(
            outcome,
            Outcome::Grew {
                snake: snake(&[(2, 3), (2, 2), (2, 1)]),
                score_delta: 1,
            }
        );
    }

    #[test]
    fn test_moving_drops_tail() {
        let outcome = advance(
            &snake(&[(2, 2), (2, 1), (2, 0)]),
            Direction::Down,
            Point::new(7, 7),
            &FieldSize::new(10, 10),
        );
        assert_eq!(outcome, Outcome::Moved(snake(&[(3, 2), (2, 2), (2, 1)])));
    }

    #[test]
    fn test_self_collision() {
        // Head at (2,2) heading up into its own body at (1,2).
        let body = snake(&[(2, 2), (2, 3), (1, 3), (1, 2), (1, 1)]);
        let outcome = advance(&body, Direction::Up, Point::new(8, 8), &FieldSize::new(10, 10));
        assert_eq!(outcome, Outcome::Terminated(TerminationReason::SelfCollision));
    }

    #[test]
    fn test_moving_into_current_tail_is_fatal() {
        // A 2x2 loop: the tail cell would be vacated this tick but still counts.
        let body = snake(&[(1, 1), (1, 2), (2, 2), (2, 1)]);
        let outcome = advance(&body, Direction::Down, Point::new(8, 8), &FieldSize::new(10, 10));
        assert_eq!(outcome, Outcome::Terminated(TerminationReason::SelfCollision));
    }

    #[test]
    fn test_length_changes_by_at_most_one() {
        let bounds = FieldSize::new(10, 10);
        let body = snake(&[(5, 5), (5, 4), (5, 3)]);
        for direction in [Direction::Up, Direction::Down, Direction::Right] {
            for food in [Point::new(0, 0), body.head().step(direction)] {
                match advance(&body, direction, food, &bounds) {
                    Outcome::Moved(next) => assert_eq!(next.len(), body.len()),
                    Outcome::Grew { snake: next, score_delta } => {
                        assert_eq!(next.len(), body.len() + 1);
                        assert_eq!(score_delta, 1);
                    }
                    Outcome::Terminated(reason) => panic!("unexpected termination: {reason}"),
                }
            }
        }
    }

    #[test]
    fn test_advance_is_deterministic_and_pure() {
        let bounds = FieldSize::new(10, 10);
        let body = snake(&[(4, 4), (4, 3)]);
        let first = advance(&body, Direction::Up, Point::new(3, 4), &bounds);
        let second = advance(&body, Direction::Up, Point::new(3, 4), &bounds);
        assert_eq!(first, second);
        assert_eq!(body, snake(&[(4, 4), (4, 3)]));
    }
}
