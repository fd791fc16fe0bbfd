//! Generic FIFO queues behind one trait, with two interchangeable storage
//! strategies and a stable merge built only on that trait.

pub mod algos;
pub mod error;
pub mod queues;

pub use crate::algos::merge;
pub use crate::error::EmptyQueueError;
pub use crate::queues::{CircArrayQueue, Queue, SLListQueue, DEFAULT_CAPACITY};

#[cfg(test)]
fn pump<Q: Queue<u64>>(mut queue: Q) -> Vec<u64> {
    for n in 0..100u64 {
        queue.enqueue(n);
    }
    for _ in 0..50 {
        queue.dequeue().unwrap();
    }
    for n in 100..150u64 {
        queue.enqueue(n);
    }
    let mut out = Vec::new();
    while let Ok(n) = queue.dequeue() {
        out.push(n);
    }
    out
}

#[test]
fn strategies_agree_through_the_trait() {
    let expected: Vec<u64> = (50..150).collect();
    assert_eq!(pump(CircArrayQueue::with_capacity(2)), expected);
    assert_eq!(pump(SLListQueue::new()), expected);
    assert_eq!(pump(CircArrayQueue::new()), expected);
}
