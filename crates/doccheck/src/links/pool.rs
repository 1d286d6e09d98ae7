//! Fan-out of link probes across a worker pool.
//!
//! Workers pull URLs from a shared cursor and send verdicts back over a
//! channel; only the coordinating thread emits output, so every report line
//! stays whole. With a single worker the probes run in extraction order and
//! the output preserves it; with more workers the output reflects completion
//! order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use super::probe::Verdict;

/// Probe every URL and hand each `(url, verdict)` pair to `emit` on the
/// calling thread. `workers` is clamped to one worker per URL.
pub fn probe_all<P, E>(urls: &[String], workers: usize, probe: P, mut emit: E)
where
    P: Fn(&str) -> Verdict + Sync,
    E: FnMut(&str, Verdict),
{
    if urls.is_empty() {
        return;
    }

    if workers <= 1 {
        for url in urls {
            emit(url, probe(url));
        }
        return;
    }

    let worker_count = workers.min(urls.len());
    let cursor = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<(usize, Verdict)>();

    thread::scope(|s| {
        for _ in 0..worker_count {
            let tx = tx.clone();
            let cursor = &cursor;
            let probe = &probe;
            s.spawn(move || loop {
                let index = cursor.fetch_add(1, Ordering::SeqCst);
                if index >= urls.len() {
                    break;
                }
                let verdict = probe(&urls[index]);
                if tx.send((index, verdict)).is_err() {
                    break;
                }
            });
        }
        drop(tx);

        for (index, verdict) in rx {
            emit(&urls[index], verdict);
        }
    });
}
