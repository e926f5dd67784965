//! Wall-clock timing of one sort per container.

use std::time::{Duration, Instant};

use pmerge_core::{MergeInsert, SortStats};
use serde::{Deserialize, Serialize, Serializer};
use tracing::info;

/// Unit used when printing elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Seconds
    #[default]
    S,
    /// Milliseconds
    Ms,
    /// Microseconds
    Us,
}

impl TimeUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::S => "s",
            TimeUnit::Ms => "ms",
            TimeUnit::Us => "us",
        }
    }

    pub fn scale(self, elapsed: Duration) -> f64 {
        let secs = elapsed.as_secs_f64();
        match self {
            TimeUnit::S => secs,
            TimeUnit::Ms => secs * 1e3,
            TimeUnit::Us => secs * 1e6,
        }
    }

    /// `elapsed` in this unit with `precision` decimals, e.g. `0.000012 s`.
    pub fn format(self, elapsed: Duration, precision: usize) -> String {
        format!("{:.*} {}", precision, self.scale(elapsed), self.suffix())
    }
}

/// One timed sort.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub container: &'static str,
    pub elements: usize,
    #[serde(rename = "seconds", serialize_with = "as_secs_f64")]
    pub elapsed: Duration,
    pub stats: SortStats,
}

fn as_secs_f64<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Sort `container` in place and record how long it took.
///
/// Only the sort itself is inside the timed region; filling the container is
/// the caller's job.
pub fn measure<C: MergeInsert>(container: &mut C, elements: usize) -> Measurement {
    let start = Instant::now();
    let stats = container.merge_insert_sort();
    let elapsed = start.elapsed();

    info!(
        container = C::CONTAINER,
        elements,
        elapsed_us = elapsed.as_micros() as u64,
        comparisons = stats.comparisons,
        "sorted"
    );

    Measurement {
        container: C::CONTAINER,
        elements,
        elapsed,
        stats,
    }
}
