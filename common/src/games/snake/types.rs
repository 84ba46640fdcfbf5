use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Grid cell addressed as (row, column). Signed so that a candidate head one
/// step past the border is still representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn step(&self, direction: Direction) -> Point {
        let (d_row, d_col) = direction.delta();
        Point::new(self.row + d_row, self.col + d_col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit vector as (row, column) offsets.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when the two directions lie on different axes.
    pub fn is_perpendicular(&self, other: &Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    Wall,
    SelfCollision,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::Wall => write!(f, "hit the wall"),
            TerminationReason::SelfCollision => write!(f, "bit itself"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldSize {
    pub rows: usize,
    pub cols: usize,
}

impl FieldSize {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row >= 0
            && point.col >= 0
            && (point.row as usize) < self.rows
            && (point.col as usize) < self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn center(&self) -> Point {
        Point::new((self.rows / 2) as i32, (self.cols / 2) as i32)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn tick_interval(&self) -> Duration {
        let millis = match self {
            Difficulty::Easy => 200,
            Difficulty::Medium => 150,
            Difficulty::Hard => 100,
        };
        Duration::from_millis(millis)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// How a fresh food cell is chosen after the previous one was eaten.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPlacement {
    /// Any cell, the snake's body included.
    Uniform,
    #[default]
    AvoidSnake,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas_are_unit_vectors() {
        for direction in Direction::ALL {
            let (d_row, d_col) = direction.delta();
            assert_eq!(d_row.abs() + d_col.abs(), 1);
        }
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn test_perpendicular_excludes_same_axis() {
        assert!(Direction::Up.is_perpendicular(&Direction::Left));
        assert!(Direction::Right.is_perpendicular(&Direction::Down));
        assert!(!Direction::Right.is_perpendicular(&Direction::Left));
        assert!(!Direction::Right.is_perpendicular(&Direction::Right));
    }

    #[test]
    fn test_field_contains_checks_both_axes() {
        let field = FieldSize::new(5, 5);
        assert!(field.contains(Point::new(0, 0)));
        assert!(field.contains(Point::new(4, 4)));
        assert!(!field.contains(Point::new(0, -1)));
        assert!(!field.contains(Point::new(-1, 0)));
        assert!(!field.contains(Point::new(5, 0)));
        assert!(!field.contains(Point::new(0, 5)));
    }

    #[test]
    fn test_difficulty_speeds() {
        assert_eq!(Difficulty::Easy.tick_interval(), Duration::from_millis(200));
        assert_eq!(Difficulty::Medium.tick_interval(), Duration::from_millis(150));
        assert_eq!(Difficulty::Hard.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let yaml = serde_yaml_ng::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(yaml.trim(), "medium");
        let parsed: FoodPlacement = serde_yaml_ng::from_str("avoid_snake").unwrap();
        assert_eq!(parsed, FoodPlacement::AvoidSnake);
    }
}
