pub mod stack;

pub use stack::{Iter, Stack, StackError};
