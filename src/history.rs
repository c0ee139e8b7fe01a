use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one round.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Record {
    pub t: usize,
    pub arm: usize,
    pub reward: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArmStats {
    pub pulls: u64,
    pub mean_reward: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub rounds: usize,
    pub total_reward: f64,
    pub arms: BTreeMap<usize, ArmStats>,
}

/// Append-only ledger of the rounds played during a run. Records are handed
/// out by shared reference only, so nothing can rewrite them once appended.
#[derive(Clone, Debug, Default)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    // the round index is the position in the ledger
    pub(crate) fn append(&mut self, arm: usize, reward: f64) -> &Record {
        let t = self.records.len();
        self.records.push(Record { t, arm, reward });
        &self.records[t]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn total_reward(&self) -> f64 {
        self.records.iter().map(|record| record.reward).sum()
    }

    pub fn arm_counts(&self) -> BTreeMap<usize, u64> {
        self.records.iter().fold(BTreeMap::new(), |mut counts, record| {
            *counts.entry(record.arm).or_insert(0) += 1;
            counts
        })
    }

    /// Mean reward of every arm played at least once. Arms never played are absent.
    pub fn mean_rewards(&self) -> BTreeMap<usize, f64> {
        self.stats()
            .into_iter()
            .map(|(arm, stats)| (arm, stats.mean_reward))
            .collect()
    }

    pub fn stats(&self) -> BTreeMap<usize, ArmStats> {
        let mut sums: BTreeMap<usize, (u64, f64)> = BTreeMap::new();
        for record in &self.records {
            let (pulls, rewards) = sums.entry(record.arm).or_insert((0, 0.0));
            *pulls += 1;
            *rewards += record.reward;
        }

        sums.into_iter()
            .map(|(arm, (pulls, rewards))| {
                (
                    arm,
                    ArmStats {
                        pulls,
                        mean_reward: rewards / pulls as f64,
                    },
                )
            })
            .collect()
    }

    pub fn report(&self) -> Report {
        Report {
            rounds: self.len(),
            total_reward: self.total_reward(),
            arms: self.stats(),
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
