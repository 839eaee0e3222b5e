//! Concurrent probe fan-out and result aggregation.
//!
//! Probing is I/O bound (one external process per candidate), so candidates
//! are distributed over a fixed-size worker pool rather than probed
//! serially or fanned out without bound. The union is commutative and
//! idempotent; completion order never changes the result. The pool waits
//! for the whole batch: validation has either a complete answer or none.

use super::ldcache::DynamicLoadCheck;
use super::prober::DependencyProber;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Upper bound on concurrently running probe processes.
const MAX_WORKERS: usize = 8;

fn worker_count(candidates: usize) -> usize {
    let cores = std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(2);
    (cores * 2).clamp(1, MAX_WORKERS).min(candidates)
}

/// Probe every candidate and union the unresolved names into one
/// deduplicated set.
pub fn collect_missing(
    candidates: &[PathBuf],
    prober: &dyn DependencyProber,
) -> BTreeSet<String> {
    let mut missing = BTreeSet::new();
    if candidates.is_empty() {
        return missing;
    }

    let next = AtomicUsize::new(0);
    let workers = worker_count(candidates.len());
    tracing::debug!(candidates = candidates.len(), workers, "probing binaries");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                scope.spawn(|| {
                    let mut local = BTreeSet::new();
                    loop {
                        let index = next.fetch_add(1, Ordering::Relaxed);
                        let Some(path) = candidates.get(index) else {
                            break;
                        };
                        local.extend(prober.missing_dependencies(path));
                    }
                    local
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(local) => missing.extend(local),
                // a lost worker would mean a silently incomplete answer
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
    });

    missing
}

/// Merge the dynamic-load check into the aggregated set.
///
/// A name the cache proved present is explicitly removed, even if a probe
/// reported it unresolved; a name absent from the cache is inserted.
pub fn merge_dynamic_load(missing: &mut BTreeSet<String>, check: &DynamicLoadCheck) {
    for library in &check.present {
        missing.remove(library);
    }
    for library in &check.missing {
        missing.insert(library.clone());
    }
}
