use alloc::vec::Vec;

use crate::ElementKind;

/// Per-kind stacks of detached elements awaiting reuse.
///
/// Reuse is LIFO: the most recently recycled element of a kind is handed out first. The pool
/// is unbounded and never evicts.
#[derive(Clone, Debug)]
pub struct ElementPool<T> {
    stacks: [Vec<T>; 3],
}

impl<T> Default for ElementPool<T> {
    fn default() -> Self {
        Self {
            stacks: [Vec::new(), Vec::new(), Vec::new()],
        }
    }
}

impl<T> ElementPool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recycle(&mut self, element: T, kind: ElementKind) {
        self.stacks[kind.slot()].push(element);
    }

    /// Pops the most recently recycled element of `kind`.
    ///
    /// `None` is the normal "create a new one" signal, not an error.
    pub fn acquire(&mut self, kind: ElementKind) -> Option<T> {
        self.stacks[kind.slot()].pop()
    }

    pub fn len(&self, kind: ElementKind) -> usize {
        self.stacks[kind.slot()].len()
    }

    pub fn total_len(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.iter().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.stacks.iter().flat_map(|stack| stack.iter())
    }

    pub fn clear(&mut self) {
        for stack in &mut self.stacks {
            stack.clear();
        }
    }
}
