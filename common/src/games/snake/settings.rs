use crate::config::Validate;
use crate::defaults::{MAX_FIELD_DIMENSION, MIN_FIELD_DIMENSION};

use super::types::{Direction, FieldSize, FoodPlacement};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSessionSettings {
    pub field_size: FieldSize,
    pub food_placement: FoodPlacement,
    pub start_direction: Direction,
}

impl SnakeSessionSettings {
    pub fn new(field_size: FieldSize) -> Self {
        Self {
            field_size,
            food_placement: FoodPlacement::default(),
            start_direction: Direction::Right,
        }
    }

    pub fn with_food_placement(mut self, food_placement: FoodPlacement) -> Self {
        self.food_placement = food_placement;
        self
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        let FieldSize { rows, cols } = self.field_size;
        if rows < MIN_FIELD_DIMENSION || cols < MIN_FIELD_DIMENSION {
            return Err(format!(
                "field dimensions must be at least {0}x{0}",
                MIN_FIELD_DIMENSION
            ));
        }
        if rows > MAX_FIELD_DIMENSION || cols > MAX_FIELD_DIMENSION {
            return Err(format!(
                "field dimensions must not exceed {0}x{0}",
                MAX_FIELD_DIMENSION
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_field_limits() {
        assert!(SnakeSessionSettings::new(FieldSize::new(10, 10)).validate().is_ok());
        assert!(SnakeSessionSettings::new(FieldSize::new(4, 10)).validate().is_err());
        assert!(SnakeSessionSettings::new(FieldSize::new(10, 101)).validate().is_err());
    }
}
