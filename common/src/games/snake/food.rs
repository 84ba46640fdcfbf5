use crate::games::SessionRng;

use super::snake::Snake;
use super::types::{FieldSize, FoodPlacement, Point};

const RANDOM_ATTEMPTS: usize = 100;

/// Uniform pick over the whole field. The snake's body is not consulted.
pub fn place_food(bounds: &FieldSize, rng: &mut SessionRng) -> Point {
    let row = rng.random_range(0..bounds.rows);
    let col = rng.random_range(0..bounds.cols);
    Point::new(row as i32, col as i32)
}

/// Picks a cell not occupied by `snake`, or `None` when the snake fills the field.
pub fn place_food_avoiding(bounds: &FieldSize, snake: &Snake, rng: &mut SessionRng) -> Option<Point> {
    if snake.len() >= bounds.cell_count() {
        return None;
    }

    for _ in 0..RANDOM_ATTEMPTS {
        let pos = place_food(bounds, rng);
        if !snake.contains(&pos) {
            return Some(pos);
        }
    }

    // Crowded field: fall back to an exact draw over the free cells.
    let free: Vec<Point> = (0..bounds.rows)
        .flat_map(|row| (0..bounds.cols).map(move |col| Point::new(row as i32, col as i32)))
        .filter(|pos| !snake.contains(pos))
        .collect();

    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}

pub fn place_food_with(
    placement: FoodPlacement,
    bounds: &FieldSize,
    snake: &Snake,
    rng: &mut SessionRng,
) -> Option<Point> {
    match placement {
        FoodPlacement::Uniform => Some(place_food(bounds, rng)),
        FoodPlacement::AvoidSnake => place_food_avoiding(bounds, snake, rng),
    }
}
