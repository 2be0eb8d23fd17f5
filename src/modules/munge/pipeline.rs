/// Concurrent munge pipeline
///
/// Seed source -> task channel -> worker pool -> result channel -> sink.
/// The task channel has one writer (the producer) and N readers (the
/// workers); the result channel has N writers and one reader (the drain
/// loop). The only other shared state is the active-worker counter.
///
/// Termination: every worker decrements the counter with a single atomic
/// read-modify-write when the task channel is closed and drained. The one
/// worker that observes the 1 -> 0 transition sends `Signal::EndOfStream`.
/// A get-then-compare sequence would race and either double-fire or skip
/// the marker; `fetch_sub` cannot.
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use crate::error::{MungeError, Result};

use super::engine::{MungeLevel, Mutator};
use super::sink::ResultSink;
use super::source::SeedSource;

/// Tagged result-channel message. Replaces the fragile reserved-string
/// sentinel: no variant value can ever be mistaken for the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Variant(String),
    EndOfStream,
}

/// Counters reported after a run completes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    /// Seeds pulled from the source.
    pub seeds: usize,
    /// Variants delivered to the sink.
    pub variants: usize,
}

/// Spawn `count` workers that mutate seeds from `tasks` and push every
/// non-empty variant onto `results`. The worker that performs the final
/// decrement of the active counter emits the end-of-stream marker.
pub fn spawn_workers(
    level: MungeLevel,
    count: usize,
    tasks: Receiver<String>,
    results: Sender<Signal>,
) -> Vec<thread::JoinHandle<()>> {
    let active = Arc::new(AtomicUsize::new(count));
    let mut handles = Vec::with_capacity(count);

    for worker_id in 0..count {
        let tasks = tasks.clone();
        let results = results.clone();
        let active = Arc::clone(&active);

        handles.push(thread::spawn(move || {
            'work: while let Ok(seed) = tasks.recv() {
                for variant in Mutator::mutate(&seed, level) {
                    if variant.is_empty() {
                        continue;
                    }
                    if results.send(Signal::Variant(variant)).is_err() {
                        // Consumer is gone; stop mutating but fall through
                        // so the termination bookkeeping still runs.
                        break 'work;
                    }
                }
            }

            crate::debug!("worker {} drained the task queue", worker_id);

            if active.fetch_sub(1, Ordering::AcqRel) == 1 {
                let _ = results.send(Signal::EndOfStream);
            }
        }));
    }

    handles
}

/// Munge a single literal word: a degenerate pool of one producer that
/// mutates directly and then emits the marker itself.
pub fn run_word(word: &str, level: MungeLevel, sink: &mut ResultSink) -> Result<RunStats> {
    let (results_tx, results_rx) = unbounded();
    let word = word.to_string();

    let producer = thread::spawn(move || {
        for variant in Mutator::mutate(&word, level) {
            if variant.is_empty() {
                continue;
            }
            if results_tx.send(Signal::Variant(variant)).is_err() {
                return;
            }
        }
        let _ = results_tx.send(Signal::EndOfStream);
    });

    // Join before propagating a drain error so the producer handle is
    // never abandoned.
    let drained = drain(results_rx, sink);

    producer
        .join()
        .map_err(|_| MungeError::Other("word producer panicked".to_string()))?;

    let mut stats = drained?;
    stats.seeds = 1;

    Ok(stats)
}

/// Run the full pipeline: producer thread feeding the task channel, a
/// worker pool of `workers` threads, and the drain loop on the calling
/// thread.
pub fn run_stream(
    source: SeedSource,
    level: MungeLevel,
    workers: usize,
    sink: &mut ResultSink,
) -> Result<RunStats> {
    let workers = workers.max(1);
    let (tasks_tx, tasks_rx) = unbounded::<String>();
    let (results_tx, results_rx) = unbounded::<Signal>();

    // The sender moves into the producer thread, so the task channel
    // closes when feed() returns - the workers' sole shutdown signal.
    let producer = thread::spawn(move || source.feed(tasks_tx));

    let handles = spawn_workers(level, workers, tasks_rx, results_tx);

    crate::debug!("pipeline started with {} workers at level {}", workers, level);

    let drained = drain(results_rx, sink);

    let seeds = producer
        .join()
        .map_err(|_| MungeError::Other("seed producer panicked".to_string()))?;

    for handle in handles {
        handle
            .join()
            .map_err(|_| MungeError::Other("munge worker panicked".to_string()))?;
    }

    let mut stats = drained?;
    stats.seeds = seeds;

    Ok(stats)
}

/// Drain the result channel into the sink until the end-of-stream marker
/// (or channel disconnect) arrives.
///
/// On a mid-stream write error the loop keeps receiving but discards -
/// stopping outright would leave workers blocked on a send forever. The
/// error is reported once the pipeline has wound down.
fn drain(results: Receiver<Signal>, sink: &mut ResultSink) -> Result<RunStats> {
    let mut stats = RunStats::default();
    let mut write_error: Option<std::io::Error> = None;

    loop {
        match results.recv() {
            Ok(Signal::Variant(variant)) => {
                if write_error.is_some() {
                    continue;
                }
                match sink.write_variant(&variant) {
                    Ok(()) => stats.variants += 1,
                    Err(e) => {
                        crate::warn!("Error writing output, discarding remaining results: {}", e);
                        write_error = Some(e);
                    }
                }
            }
            Ok(Signal::EndOfStream) | Err(_) => break,
        }
    }

    if let Some(e) = write_error {
        return Err(MungeError::Io(format!("Failed writing output: {}", e)));
    }

    sink.finish()
        .map_err(|e| MungeError::Io(format!("Failed to flush output: {}", e)))?;

    Ok(stats)
}
