use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("Stack is empty")]
    Empty,
    #[error("Index {index} out of bounds for stack of size {len}")]
    OutOfBounds { index: usize, len: usize },
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A last-in-first-out container backed by a singly linked chain of owned nodes.
///
/// Every node is owned by its predecessor, the first one by the stack itself.
/// Values only ever leave the chain by being moved out.
pub struct Stack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn push(&mut self, value: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        let node = self.top.take().ok_or(StackError::Empty)?;
        let Node { value, next } = *node;
        self.top = next;
        self.len -= 1;
        Ok(value)
    }

    pub fn peek(&self) -> Result<&T, StackError> {
        self.top
            .as_deref()
            .map(|node| &node.value)
            .ok_or(StackError::Empty)
    }

    /// Returns the value `index` positions below the top, `at(0)` being the top.
    pub fn at(&self, index: usize) -> Result<&T, StackError> {
        if self.is_empty() {
            return Err(StackError::Empty);
        }
        self.iter().nth(index).ok_or(StackError::OutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Removes the oldest value. Walks the whole chain, there is no tail link.
    pub fn remove_bottom(&mut self) -> Result<T, StackError> {
        if self.len <= 1 {
            return self.pop();
        }

        // Stop on the node just above the bottom one.
        let mut node = self.top.as_deref_mut().ok_or(StackError::Empty)?;
        for _ in 0..self.len - 2 {
            node = node.next.as_deref_mut().ok_or(StackError::Empty)?;
        }
        let bottom = node.next.take().ok_or(StackError::Empty)?;
        self.len -= 1;
        Ok(bottom.value)
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn clear(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Iterates from the top down to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // Unlink node by node so long chains don't recurse through Box drops.
        self.clear();
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let mut top: Link<T> = None;
        let mut tail = &mut top;
        for value in self.iter() {
            let node = tail.insert(Box::new(Node {
                value: value.clone(),
                next: None,
            }));
            tail = &mut node.next;
        }
        Self { top, len: self.len }
    }

    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Stack is empty");
        }
        for (i, value) in self.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, value)?;
        }
        Ok(())
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
