use std::collections::VecDeque;

use super::types::Point;

/// Snake body, head first. Movement pushes at the front and drops from the back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    pub fn new(head: Point) -> Self {
        Self { body: VecDeque::from([head]) }
    }

    pub fn from_segments(segments: impl IntoIterator<Item = Point>) -> Self {
        Self { body: segments.into_iter().collect() }
    }

    pub fn head(&self) -> Option<Point> {
        self.body.front().copied()
    }

    pub fn tail(&self) -> Option<Point> {
        self.body.back().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, pos: Point) -> bool {
        self.body.contains(&pos)
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Point> {
        self.body.iter()
    }

    pub(super) fn push_head(&mut self, pos: Point) {
        self.body.push_front(pos);
    }

    pub(super) fn drop_tail(&mut self) -> Option<Point> {
        self.body.pop_back()
    }
}

impl<'a> IntoIterator for &'a Snake {
    type Item = &'a Point;
    type IntoIter = std::collections::vec_deque::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.body.iter()
    }
}
