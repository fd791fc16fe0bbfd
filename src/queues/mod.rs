mod circ_array_queue;
mod sllist_queue;

pub use self::circ_array_queue::{CircArrayQueue, DEFAULT_CAPACITY};
pub use self::sllist_queue::SLListQueue;

use std::fmt::{self, Write};

use crate::error::EmptyQueueError;

/// FIFO queue contract shared by every storage strategy.
///
/// `emplace` and `to_string_with` are conveniences with default
/// implementations built purely from the required operations.
pub trait Queue<T> {
    fn new() -> Self
        where Self: Sized;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn for_each<V>(&self, visit: V)
        where V: FnMut(&T);

    fn front(&self) -> Result<&T, EmptyQueueError>;

    fn front_mut(&mut self) -> Result<&mut T, EmptyQueueError>;

    fn enqueue(&mut self, elem: T);

    fn dequeue(&mut self) -> Result<T, EmptyQueueError>;

    fn emplace<A>(&mut self, args: A)
        where T: From<A>
    {
        self.enqueue(T::from(args));
    }

    fn to_string_with(&self, prefix: &str, sep: &str) -> String
        where T: fmt::Display
    {
        let mut out = String::from(prefix);
        out.push('[');
        let mut first = true;
        self.for_each(|elem| {
            if !first {
                out.push_str(sep);
            }
            let _ = write!(out, "{}", elem);
            first = false;
        });
        out.push(']');
        out
    }
}
