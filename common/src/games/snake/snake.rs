use std::collections::VecDeque;

use super::types::Point;

/// Snake body, head first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    pub fn new(start_pos: Point) -> Self {
        Self {
            body: VecDeque::from([start_pos]),
        }
    }

    /// Builds a snake from head-first segments. Returns `None` for an empty list.
    pub fn from_segments<I>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let body: VecDeque<Point> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body.contains(point)
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.body.iter().copied().collect()
    }

    pub(super) fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
    }

    pub(super) fn drop_tail(&mut self) -> Option<Point> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }
}
