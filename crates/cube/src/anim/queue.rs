use std::collections::VecDeque;

use super::Move;

/// Bounded FIFO of moves waiting for the in-flight move to finish.
#[derive(Debug, Clone)]
pub struct MoveQueue {
    moves: VecDeque<Move>,
    max_size: usize,
}

impl MoveQueue {
    pub fn new(max_size: usize) -> Self {
        Self {
            moves: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Returns the oldest move if it had to be dropped to make room.
    pub fn push(&mut self, mv: Move) -> Option<Move> {
        let dropped = if self.moves.len() >= self.max_size {
            self.moves.pop_front()
        } else {
            None
        };
        self.moves.push_back(mv);
        dropped
    }

    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop_front()
    }

    pub fn peek(&self) -> Option<Move> {
        self.moves.front().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_ordering() {
        let mut queue = MoveQueue::new(4);
        queue.push(Move::RightColumn);
        queue.push(Move::FrontClockwise);

        assert_eq!(queue.peek(), Some(Move::RightColumn));
        assert_eq!(queue.pop(), Some(Move::RightColumn));
        assert_eq!(queue.pop(), Some(Move::FrontClockwise));
        assert!(queue.is_empty());
    }

    #[test]
    fn full_queue_drops_oldest() {
        let mut queue = MoveQueue::new(2);
        assert_eq!(queue.push(Move::FrontClockwise), None);
        assert_eq!(queue.push(Move::RightColumn), None);
        assert_eq!(queue.push(Move::RightColumn), Some(Move::FrontClockwise));

        assert_eq!(queue.len(), 2);
        assert!(queue.iter().all(|m| m == Move::RightColumn));
    }
}
