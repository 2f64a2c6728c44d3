//! This module defines the `Tape` struct: a mutable symbol buffer with a head
//! cursor and blank-padding semantics. Every nondeterministic branch owns an
//! independent `Tape`; cloning one is the dominant cost of the search.

use crate::types::Direction;

/// A single Turing Machine tape.
///
/// The buffer only stores cells that have been part of the input or written
/// to; reading past the extent yields the blank symbol without growing the
/// buffer. Moving left at index 0 prepends a blank cell and leaves the head
/// at 0, so the head index never goes negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    blank: char,
    cells: Vec<char>,
    head: usize,
}

impl Tape {
    /// Creates a tape holding `contents` with the head at position 0.
    pub fn new(blank: char, contents: &str) -> Self {
        Self {
            blank,
            cells: contents.chars().collect(),
            head: 0,
        }
    }

    /// Returns the symbol under the head, or the blank symbol if the head is
    /// beyond the current extent. Never grows the buffer.
    pub fn read(&self) -> char {
        if self.head < self.cells.len() {
            self.cells[self.head]
        } else {
            self.blank
        }
    }

    /// Writes `symbol` under the head; `None` keeps the current cell.
    ///
    /// If the head has run past the extent, the buffer is blank-padded up to
    /// the head before the cell is appended, so the written symbol always
    /// lands under the head.
    pub fn write(&mut self, symbol: Option<char>) {
        let Some(symbol) = symbol else {
            return;
        };

        if self.head < self.cells.len() {
            self.cells[self.head] = symbol;
        } else {
            self.cells.resize(self.head, self.blank);
            self.cells.push(symbol);
        }
    }

    /// Moves the head one cell in `direction`.
    ///
    /// A left move at index 0 extends the tape to the left: a blank cell is
    /// prepended and the head stays at 0.
    pub fn move_head(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                if self.head == 0 {
                    self.cells.insert(0, self.blank);
                } else {
                    self.head -= 1;
                }
            }
            Direction::Right => self.head += 1,
            Direction::Stay => {}
        }
    }

    /// Splits the contents into (left-of-head, head-and-rightward) strings
    /// for trace display.
    pub fn project(&self) -> (String, String) {
        let split = self.head.min(self.cells.len());
        let left = self.cells[..split].iter().collect();
        let right = self.cells[split..].iter().collect();
        (left, right)
    }

    /// Returns the current head position.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Returns the written extent of the tape.
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Returns the blank symbol of this tape.
    pub fn blank(&self) -> char {
        self.blank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_within_extent() {
        let tape = Tape::new('_', "abc");
        assert_eq!(tape.read(), 'a');
    }

    #[test]
    fn test_read_beyond_extent_is_blank() {
        let mut tape = Tape::new('_', "ab");

        // Walk the head well past the written extent; every read past the
        // end must yield the blank without mutating the buffer.
        for _ in 0..5 {
            tape.move_head(Direction::Right);
            if tape.head() >= 2 {
                assert_eq!(tape.read(), '_');
            }
        }
        assert_eq!(tape.cells(), &['a', 'b']);
    }

    #[test]
    fn test_write_overwrites_in_place() {
        let mut tape = Tape::new('_', "abc");
        tape.move_head(Direction::Right);
        tape.write(Some('X'));

        assert_eq!(tape.cells(), &['a', 'X', 'c']);
        assert_eq!(tape.head(), 1);
    }

    #[test]
    fn test_write_appends_at_extent() {
        let mut tape = Tape::new('_', "a");
        tape.move_head(Direction::Right);
        tape.write(Some('b'));

        assert_eq!(tape.cells(), &['a', 'b']);
    }

    #[test]
    fn test_write_pads_past_extent() {
        let mut tape = Tape::new('_', "a");
        tape.move_head(Direction::Right);
        tape.move_head(Direction::Right);
        tape.move_head(Direction::Right);
        tape.write(Some('b'));

        // Head ran three cells past the input; the write lands under it.
        assert_eq!(tape.cells(), &['a', '_', '_', 'b']);
        assert_eq!(tape.read(), 'b');
    }

    #[test]
    fn test_write_keep_leaves_cell_unchanged() {
        let mut tape = Tape::new('_', "abc");
        tape.write(None);

        assert_eq!(tape.read(), 'a');
        assert_eq!(tape.cells(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_move_left_at_zero_grows_left() {
        let mut tape = Tape::new('_', "ab");
        tape.move_head(Direction::Left);

        assert_eq!(tape.head(), 0);
        assert_eq!(tape.read(), '_');
        assert_eq!(tape.cells(), &['_', 'a', 'b']);
    }

    #[test]
    fn test_stay_is_a_no_op() {
        let mut tape = Tape::new('_', "ab");
        tape.move_head(Direction::Stay);

        assert_eq!(tape.head(), 0);
        assert_eq!(tape.cells(), &['a', 'b']);
    }

    #[test]
    fn test_clone_isolation() {
        let parent = Tape::new('_', "abc");
        let mut child = parent.clone();

        child.write(Some('Z'));
        child.move_head(Direction::Right);
        child.write(Some('Z'));

        assert_eq!(parent.cells(), &['a', 'b', 'c']);
        assert_eq!(parent.head(), 0);
        assert_eq!(child.cells(), &['Z', 'Z', 'c']);
    }

    #[test]
    fn test_project_splits_at_head() {
        let mut tape = Tape::new('_', "abcd");
        tape.move_head(Direction::Right);
        tape.move_head(Direction::Right);

        let (left, right) = tape.project();
        assert_eq!(left, "ab");
        assert_eq!(right, "cd");
    }

    #[test]
    fn test_project_with_head_past_extent() {
        let mut tape = Tape::new('_', "a");
        tape.move_head(Direction::Right);
        tape.move_head(Direction::Right);

        let (left, right) = tape.project();
        assert_eq!(left, "a");
        assert_eq!(right, "");
    }
}
