use std::fmt;

use fifo_queues::{merge, CircArrayQueue, Queue};

#[derive(Clone)]
struct Job {
    time_id: u32,
    priority: u32,
    name: &'static str,
}

impl From<(u32, u32, &'static str)> for Job {
    fn from((time_id, priority, name): (u32, u32, &'static str)) -> Self {
        Self {
            time_id,
            priority,
            name,
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Job(name={}, time_id={}, priority={})",
            self.name, self.time_id, self.priority
        )
    }
}

// Earlier time first; same time, higher priority first.
fn compare_jobs(j1: &Job, j2: &Job) -> bool {
    if j1.time_id == j2.time_id {
        return j1.priority > j2.priority;
    }
    j1.time_id < j2.time_id
}

fn main() {
    let mut q1: CircArrayQueue<Job> = Queue::new();
    let jobs1: [(u32, u32, &'static str); 4] =
        [(2, 1, "M"), (3, 0, "E"), (5, 2, "Q"), (9, 1, "A")];
    for job in &jobs1 {
        q1.emplace(*job);
    }
    println!("{}\n", q1.to_string_with("q1", "\n"));

    let mut q2: CircArrayQueue<Job> = Queue::new();
    let jobs2: [(u32, u32, &'static str); 6] = [
        (1, 0, "D"),
        (4, 0, "T"),
        (5, 1, "V"),
        (7, 0, "B"),
        (8, 1, "H"),
        (10, 1, "R"),
    ];
    for job in &jobs2 {
        q2.emplace(*job);
    }
    println!("{}\n", q2.to_string_with("q2", "\n"));

    println!("Merging...");
    let q = merge(q1, q2, compare_jobs);
    println!("{}", q.to_string_with("q", "\n"));
}
