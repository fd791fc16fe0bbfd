use crate::queues::Queue;

/// Stable two-queue merge. `compare(a, b) == true` means `a` must precede
/// `b`; on a false comparison (ties included) `queue2`'s front wins, so
/// equal elements come out with `queue2`'s first. Both inputs are consumed.
/// If one input is empty the other is returned as-is, not copied.
/// O(n1 + n2) time and space.
pub fn merge<T, Q, F>(mut queue1: Q, mut queue2: Q, mut compare: F) -> Q
    where Q: Queue<T>,
          F: FnMut(&T, &T) -> bool
{
    if queue1.is_empty() {
        return queue2;
    }
    if queue2.is_empty() {
        return queue1;
    }

    let mut merged = Q::new();
    loop {
        let first_wins = match (queue1.front(), queue2.front()) {
            (Ok(a), Ok(b)) => compare(a, b),
            (Ok(_), Err(_)) => true,
            (Err(_), Ok(_)) => false,
            (Err(_), Err(_)) => break,
        };
        let source = if first_wins { &mut queue1 } else { &mut queue2 };
        if let Ok(elem) = source.dequeue() {
            merged.enqueue(elem);
        }
    }
    merged
}
