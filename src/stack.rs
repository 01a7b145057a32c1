use std::fmt::{self, Display};

use tracing::trace;

use crate::error::{StackError, UNDERFLOW};

/// A last-in-first-out container. The end of `values` is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    values: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.values.pop().ok_or_else(|| {
            trace!("pop on empty stack");
            StackError::Underflow
        })
    }

    /// Returns `None` on an empty stack, unlike `pop`, which reports underflow.
    pub fn peek(&self) -> Option<&T> {
        self.values.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.values.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: Display> Stack<T> {
    /// Pop, rendering the element as a string, or return the `"Underflow"`
    /// sentinel when the stack is empty.
    pub fn pop_or_underflow(&mut self) -> String {
        match self.pop() {
            Ok(value) => value.to_string(),
            Err(_) => UNDERFLOW.to_string(),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bottom to top, each element followed by a single space.
impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.values {
            write!(f, "{value} ")?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_peek_pop() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());

        stack.push(10);
        stack.push(20);
        stack.push(30);

        assert_eq!(stack.to_string(), "10 20 30 ");
        assert_eq!(stack.peek(), Some(&30));
        assert_eq!(stack.pop(), Ok(30));
        assert_eq!(stack.to_string(), "10 20 ");
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn empty_stack_renders_as_empty_string() {
        let stack: Stack<i32> = Stack::new();
        assert_eq!(stack.to_string(), "");
    }

    #[test]
    fn underflow_leaves_stack_unchanged() {
        let mut stack: Stack<u8> = Stack::default();
        assert_eq!(stack.pop(), Err(StackError::Underflow));
        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn legacy_underflow_sentinel() {
        let mut stack = Stack::new();
        stack.push("a");
        assert_eq!(stack.pop_or_underflow(), "a");
        assert_eq!(stack.pop_or_underflow(), "Underflow");
        assert_eq!(stack.pop_or_underflow(), UNDERFLOW);
        assert_eq!(stack.size(), 0);
    }

    #[test]
    fn underflow_error_displays_as_sentinel() {
        assert_eq!(StackError::Underflow.to_string(), UNDERFLOW);
    }

    #[test]
    fn peek_on_empty_is_none() {
        let stack: Stack<String> = Stack::new();
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn peek_does_not_mutate() {
        let mut stack: Stack<_> = [1, 2, 3].into_iter().collect();
        let before = stack.clone();
        for _ in 0..5 {
            assert_eq!(stack.peek(), Some(&3));
        }
        assert_eq!(stack, before);

        *stack.peek_mut().unwrap() = 4;
        assert_eq!(stack.as_slice(), &[1, 2, 4]);
    }

    #[test]
    fn lifo_order_for_many_lengths() {
        for n in 0..50 {
            let mut stack = Stack::new();
            for i in 0..n {
                stack.push(i);
                assert_eq!(stack.is_empty(), stack.len() == 0);
            }
            assert_eq!(stack.len(), n);

            for i in (0..n).rev() {
                assert_eq!(stack.pop(), Ok(i));
                assert_eq!(stack.is_empty(), stack.len() == 0);
            }
            assert!(stack.is_empty());
            assert_eq!(stack.len(), 0);
        }
    }

    #[test]
    fn extend_pushes_in_order() {
        let mut stack = Stack::new();
        stack.push('a');
        stack.extend(['b', 'c']);
        assert_eq!(stack.iter().collect::<String>(), "abc");
        assert_eq!(stack.clone().into_vec(), vec!['a', 'b', 'c']);

        stack.clear();
        assert!(stack.is_empty());
    }
}
