use std::fmt;

use crate::error::EmptyQueueError;
use crate::queues::Queue;

struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// Singly-linked strategy: nodes live in a slot pool addressed by index,
/// with the tail handle tracked separately for O(1) append. A slot is
/// recycled the moment its node is dequeued.
pub struct SLListQueue<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> SLListQueue<T> {
    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }
}

impl<T> Queue<T> for SLListQueue<T> {
    fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn for_each<V>(&self, mut visit: V)
        where V: FnMut(&T)
    {
        for elem in self {
            visit(elem);
        }
    }

    fn front(&self) -> Result<&T, EmptyQueueError> {
        self.head
            .and_then(|idx| self.slots[idx].as_ref())
            .map(|node| &node.value)
            .ok_or_else(EmptyQueueError::new)
    }

    fn front_mut(&mut self) -> Result<&mut T, EmptyQueueError> {
        let slots = &mut self.slots;
        self.head
            .and_then(move |idx| slots[idx].as_mut())
            .map(|node| &mut node.value)
            .ok_or_else(EmptyQueueError::new)
    }

    fn enqueue(&mut self, elem: T) {
        let idx = self.alloc(Node {
            value: elem,
            next: None,
        });
        match self.tail {
            Some(tail_idx) => {
                if let Some(tail_node) = self.slots[tail_idx].as_mut() {
                    tail_node.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    fn dequeue(&mut self) -> Result<T, EmptyQueueError> {
        let empty = || EmptyQueueError::with_message("dequeue from empty queue");
        let head_idx = self.head.ok_or_else(empty)?;
        let node = self.slots[head_idx].take().ok_or_else(empty)?;
        self.free.push(head_idx);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.value)
    }
}

impl<T> Default for SLListQueue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T: Clone> Clone for SLListQueue<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::default();
        self.for_each(|elem| copy.enqueue(elem.clone()));
        copy
    }
}

pub struct Iter<'a, T> {
    slots: &'a [Option<Node<T>>],
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.slots[self.cursor?].as_ref()?;
        self.cursor = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a SLListQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            slots: &self.slots,
            cursor: self.head,
        }
    }
}

impl<T: fmt::Display> fmt::Display for SLListQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_string_with("", " "))
    }
}
