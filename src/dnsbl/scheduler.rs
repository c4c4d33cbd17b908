use rayon::prelude::*;
use tracing::{debug, warn};

use super::{RetryPolicy, Sleeper, Verdict};

/// What the rounds produced, by item index.
#[derive(Debug, Default)]
pub(crate) struct RoundsOutcome {
    pub(crate) verdicts: Vec<(usize, Verdict)>,
    /// Items still timing out after the last round.
    pub(crate) timed_out: Vec<usize>,
    pub(crate) attempts: usize,
    pub(crate) rounds: usize,
}

/// Drives `items` through `execute` in rounds.
///
/// Round 0 holds every item. Items that time out move to the next round,
/// which starts after `policy.delay_for_round(round)`; everything else is
/// final. No item runs more than `policy.rounds()` times.
pub(crate) fn run_rounds<T, F, S>(
    items: &[T],
    policy: &RetryPolicy,
    sleeper: &S,
    execute: F,
) -> RoundsOutcome
where
    T: Sync,
    F: Fn(&T) -> Verdict + Sync,
    S: Sleeper + ?Sized,
{
    let pool = worker_pool(policy.jobs());
    let mut outcome = RoundsOutcome::default();
    let mut current: Vec<usize> = (0..items.len()).collect();
    let mut round = 0;

    while !current.is_empty() {
        let results: Vec<(usize, Verdict)> = match &pool {
            Some(pool) => pool.install(|| {
                current
                    .par_iter()
                    .map(|&idx| (idx, execute(&items[idx])))
                    .collect()
            }),
            None => current
                .iter()
                .map(|&idx| (idx, execute(&items[idx])))
                .collect(),
        };
        outcome.attempts += current.len();
        outcome.rounds = round + 1;

        let mut next = Vec::new();
        for (idx, verdict) in results {
            if verdict == Verdict::TimedOut {
                next.push(idx);
            } else {
                outcome.verdicts.push((idx, verdict));
            }
        }

        if next.is_empty() {
            break;
        }
        if round + 1 >= policy.rounds() {
            debug!(round, count = next.len(), "no retries left for timed-out entries");
            outcome.timed_out = next;
            break;
        }

        let delay = policy.delay_for_round(round);
        debug!(round, count = next.len(), ?delay, "retrying timed-out entries");
        sleeper.sleep(delay);
        current = next;
        round += 1;
    }
    outcome
}

fn worker_pool(jobs: usize) -> Option<rayon::ThreadPool> {
    if jobs <= 1 {
        return None;
    }
    match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => Some(pool),
        Err(err) => {
            warn!(jobs, error = %err, "cannot start worker pool, running rounds inline");
            None
        }
    }
}
