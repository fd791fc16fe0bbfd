use std::fmt;

use crate::error::EmptyQueueError;
use crate::queues::Queue;

pub const DEFAULT_CAPACITY: usize = 4096;

/// Circular-array strategy: a ring of slots that doubles when full and
/// halves when occupancy drops below a quarter.
pub struct CircArrayQueue<T> {
    elems: Vec<Option<T>>,
    start: usize,
    len: usize,
}

impl<T> CircArrayQueue<T> {
    pub fn with_capacity(init_cap: usize) -> Self {
        // A zero-slot ring has no well-defined doubling rule.
        let cap = init_cap.max(1);
        Self {
            elems: new_buffer(cap),
            start: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.elems.len()
    }

    fn end_idx(&self) -> usize {
        (self.start + self.len) % self.capacity()
    }

    fn resize_to(&mut self, new_cap: usize) {
        let cap = self.capacity();
        let mut fresh = new_buffer(new_cap);
        for i in 0..self.len {
            fresh[i] = self.elems[(self.start + i) % cap].take();
        }
        self.elems = fresh;
        self.start = 0;
    }

    fn grow_if_full(&mut self) {
        if self.len == self.capacity() {
            self.resize_to(self.capacity() * 2);
        }
    }

    fn shrink_if_sparse(&mut self) {
        let cap = self.capacity();
        // Quarter-occupancy trigger; a half trigger would thrash at the
        // boundary. Capacity 1 never shrinks.
        if cap >= 2 && self.len * 4 < cap {
            self.resize_to(cap / 2);
        }
    }
}

fn new_buffer<T>(cap: usize) -> Vec<Option<T>> {
    let mut buf = Vec::with_capacity(cap);
    buf.resize_with(cap, || None);
    buf
}

impl<T> Queue<T> for CircArrayQueue<T> {
    fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
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
        self.elems[self.start].as_ref().ok_or_else(EmptyQueueError::new)
    }

    fn front_mut(&mut self) -> Result<&mut T, EmptyQueueError> {
        self.elems[self.start].as_mut().ok_or_else(EmptyQueueError::new)
    }

    fn enqueue(&mut self, elem: T) {
        self.grow_if_full();
        let idx = self.end_idx();
        self.elems[idx] = Some(elem);
        self.len += 1;
    }

    fn dequeue(&mut self) -> Result<T, EmptyQueueError> {
        let elem = self.elems[self.start]
            .take()
            .ok_or_else(|| EmptyQueueError::with_message("dequeue from empty queue"))?;
        self.start = (self.start + 1) % self.capacity();
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(elem)
    }
}

impl<T> Default for CircArrayQueue<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T: Clone> Clone for CircArrayQueue<T> {
    fn clone(&self) -> Self {
        let cap = self.capacity();
        let mut elems = new_buffer(cap);
        for i in 0..self.len {
            elems[i] = self.elems[(self.start + i) % cap].clone();
        }
        Self {
            elems,
            start: 0,
            len: self.len,
        }
    }
}

pub struct Iter<'a, T> {
    elems: &'a [Option<T>],
    start: usize,
    len: usize,
    pos: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.pos == self.len {
            return None;
        }
        let idx = (self.start + self.pos) % self.elems.len();
        self.pos += 1;
        self.elems[idx].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.pos;
        (left, Some(left))
    }
}

impl<'a, T> IntoIterator for &'a CircArrayQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            elems: &self.elems,
            start: self.start,
            len: self.len,
            pos: 0,
        }
    }
}

impl<T: fmt::Display> fmt::Display for CircArrayQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_string_with("", " "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_queue_is_empty_with_default_capacity() {
        let q: CircArrayQueue<u32> = Queue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn front_on_empty_fails() {
        let q: CircArrayQueue<u32> = CircArrayQueue::with_capacity(4);
        assert_eq!(q.front(), Err(EmptyQueueError::new()));
    }

    #[test]
    fn dequeue_on_empty_fails_with_context() {
        let mut q: CircArrayQueue<u32> = CircArrayQueue::with_capacity(4);
        let err = q.dequeue().unwrap_err();
        assert_eq!(err.message(), "dequeue from empty queue");
    }

    #[test]
    fn front_tracks_oldest_element() {
        let mut q = CircArrayQueue::with_capacity(8);
        for n in &[3u32, 1, 4, 1] {
            q.enqueue(*n);
            assert_eq!(q.front(), Ok(&3));
        }
        assert_eq!(q.dequeue(), Ok(3));
        assert_eq!(q.front(), Ok(&1));
    }

    #[test]
    fn fifo_round_trip() {
        let mut q = CircArrayQueue::with_capacity(8);
        for n in &[3u32, 1, 4, 1] {
            q.enqueue(*n);
        }
        let mut drained = Vec::new();
        while !q.is_empty() {
            drained.push(q.dequeue().unwrap());
        }
        assert_eq!(drained, vec![3, 1, 4, 1]);
    }

    #[test]
    fn enqueue_doubles_capacity_exactly_when_full() {
        let mut q = CircArrayQueue::with_capacity(2);
        q.enqueue(1u32);
        assert_eq!(q.capacity(), 2);
        q.enqueue(2);
        assert_eq!(q.capacity(), 2);
        q.enqueue(3);
        assert_eq!(q.capacity(), 4);
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn growth_from_single_slot() {
        let mut q = CircArrayQueue::with_capacity(1);
        q.enqueue(7u32);
        assert_eq!(q.capacity(), 1);
        q.enqueue(8);
        assert_eq!(q.capacity(), 2);
        q.enqueue(9);
        assert_eq!(q.capacity(), 4);
        assert_eq!(q.dequeue(), Ok(7));
        assert_eq!(q.dequeue(), Ok(8));
        assert_eq!(q.dequeue(), Ok(9));
    }

    #[test]
    fn dequeue_at_quarter_occupancy_halves_capacity() {
        let mut q = CircArrayQueue::with_capacity(8);
        q.enqueue(3u32);
        q.enqueue(1);
        assert_eq!(q.capacity(), 8);
        q.dequeue().unwrap();
        assert_eq!(q.len(), 1);
        assert_eq!(q.capacity(), 4);
    }

    #[test]
    fn capacity_two_never_shrinks() {
        let mut q = CircArrayQueue::with_capacity(2);
        q.enqueue(3u32);
        q.enqueue(1);
        q.dequeue().unwrap();
        assert_eq!(q.len(), 1);
        assert_eq!(q.capacity(), 2);
    }

    #[test]
    fn capacity_one_never_shrinks() {
        let mut q = CircArrayQueue::with_capacity(1);
        q.enqueue(3u32);
        q.dequeue().unwrap();
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), 1);
    }

    #[test]
    fn wraparound_preserves_order() {
        let mut q = CircArrayQueue::with_capacity(3);
        q.enqueue(1u32);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.dequeue(), Ok(1));
        q.enqueue(4);
        let seen: Vec<u32> = q.into_iter().cloned().collect();
        assert_eq!(seen, vec![2, 3, 4]);
        assert_eq!(q.dequeue(), Ok(2));
        assert_eq!(q.dequeue(), Ok(3));
        assert_eq!(q.dequeue(), Ok(4));
    }

    #[test]
    fn front_mut_changes_are_observable() {
        let mut q = CircArrayQueue::with_capacity(4);
        q.enqueue(10u32);
        q.enqueue(20);
        *q.front_mut().unwrap() = 99;
        assert_eq!(q.front(), Ok(&99));
        let seen: Vec<u32> = q.into_iter().cloned().collect();
        assert_eq!(seen, vec![99, 20]);
    }

    #[test]
    fn for_each_is_restartable() {
        let mut q = CircArrayQueue::with_capacity(4);
        q.enqueue(1u32);
        q.enqueue(2);
        let mut first = Vec::new();
        q.for_each(|n| first.push(*n));
        let mut second = Vec::new();
        q.for_each(|n| second.push(*n));
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 2]);
    }

    #[test]
    fn clone_relinearizes_and_is_independent() {
        let mut q = CircArrayQueue::with_capacity(4);
        q.enqueue(1u32);
        q.enqueue(2);
        q.enqueue(3);
        q.dequeue().unwrap();
        q.enqueue(4); // wrapped: live elements no longer start at slot 0

        let mut copy = q.clone();
        assert_eq!(copy.capacity(), q.capacity());
        let seen: Vec<u32> = (&copy).into_iter().cloned().collect();
        assert_eq!(seen, vec![2, 3, 4]);

        copy.dequeue().unwrap();
        assert_eq!(q.len(), 3);
        assert_eq!(q.front(), Ok(&2));
    }

    #[test]
    fn emplace_constructs_in_place() {
        let mut q: CircArrayQueue<String> = CircArrayQueue::with_capacity(2);
        q.emplace("hello");
        q.emplace("world");
        assert_eq!(q.front().unwrap(), "hello");
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn to_string_with_renders_in_queue_order() {
        let mut q = CircArrayQueue::with_capacity(4);
        q.enqueue(1u32);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.to_string_with("q", ", "), "q[1, 2, 3]");
        assert_eq!(q.to_string_with("", " "), "[1 2 3]");
        assert_eq!(format!("{}", q), "[1 2 3]");
    }

    #[test]
    fn to_string_with_on_empty() {
        let q: CircArrayQueue<u32> = CircArrayQueue::with_capacity(2);
        assert_eq!(q.to_string_with("q", " "), "q[]");
    }
}
