use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of samples retained: five minutes at one sample per second.
pub const MAX_HISTORY_LENGTH: usize = 300;

/// One polling tick's interface byte counters.
///
/// The counter tool reports per-interval deltas in `-w` mode, so these
/// are already bytes-per-tick, not cumulative totals. Field names keep
/// the camelCase spelling of the persisted state file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sample {
    /// Bytes received during the tick.
    #[serde(rename = "inputBytes")]
    pub input_bytes: u64,
    /// Bytes sent during the tick.
    #[serde(rename = "outputBytes")]
    pub output_bytes: u64,
}

impl Sample {
    pub fn new(input_bytes: u64, output_bytes: u64) -> Self {
        Self {
            input_bytes,
            output_bytes,
        }
    }
}

/// Rolling history of samples, oldest first, capacity-bounded.
///
/// Owned by the monitoring session; there is a single logical writer
/// (the ingestion path), so no locking is involved.
#[derive(Debug, Clone)]
pub struct History {
    samples: VecDeque<Sample>,
}

impl History {
    /// A capacity-filled all-zero history, used on cold start when no
    /// usable state file exists.
    pub fn zeroed() -> Self {
        Self {
            samples: std::iter::repeat(Sample::default())
                .take(MAX_HISTORY_LENGTH)
                .collect(),
        }
    }

    /// Build a history from restored samples, evicting from the front
    /// if the snapshot exceeds capacity.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        let mut history = Self {
            samples: samples.into(),
        };
        history.evict();
        history
    }

    /// Append a sample, evicting the oldest once over capacity.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push_back(sample);
        self.evict();
    }

    fn evict(&mut self) {
        while self.samples.len() > MAX_HISTORY_LENGTH {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Snapshot as a plain vector, oldest first (the persisted shape).
    pub fn to_vec(&self) -> Vec<Sample> {
        self.samples.iter().copied().collect()
    }

    /// The last `n` samples, oldest first. Shorter if the history holds
    /// fewer than `n`.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = Sample> + '_ {
        self.samples
            .iter()
            .skip(self.samples.len().saturating_sub(n))
            .copied()
    }

    /// Largest input byte count within the last `n` samples.
    pub fn max_input(&self, n: usize) -> u64 {
        self.tail(n).map(|s| s.input_bytes).max().unwrap_or(0)
    }

    /// Largest output byte count within the last `n` samples.
    pub fn max_output(&self, n: usize) -> u64 {
        self.tail(n).map(|s| s.output_bytes).max().unwrap_or(0)
    }

    /// Mean input byte count over the last `n` samples.
    pub fn avg_input(&self, n: usize) -> u64 {
        Self::mean(self.tail(n).map(|s| s.input_bytes))
    }

    /// Mean output byte count over the last `n` samples.
    pub fn avg_output(&self, n: usize) -> u64 {
        Self::mean(self.tail(n).map(|s| s.output_bytes))
    }

    fn mean(values: impl Iterator<Item = u64>) -> u64 {
        let (sum, count) = values.fold((0u64, 0u64), |(sum, count), v| (sum + v, count + 1));
        if count == 0 {
            0
        } else {
            sum / count
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::zeroed()
    }
}
