//! Small data structures and puzzles: a LIFO `Stack`, a `MaxHeap`, and a
//! sudoku solver and generator.

mod debug;
mod error;
mod heap;
mod stack;

pub mod sudoku;
pub mod terminal_io;

pub use error::{GridError, HeapError, ParseLevelError, StackError, UNDERFLOW};
pub use heap::MaxHeap;
pub use stack::Stack;
