use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::id::Id;

/// One multiple-choice question as stored in the question banks.
///
/// Only `options` and `correct` are ever rewritten by the balancer;
/// `text`, `section` and `passage` pass through untouched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuestionRecord {
    pub id: Id,
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage: Option<String>,
}

/// Output of balancing one question set.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BalancedQuiz {
    pub questions: Vec<QuestionRecord>,
    pub distribution: Distribution,
}

/// Counts of correct-answer positions across a question set, keyed by
/// 1-based slot so the keys line up with the A/B/C/D labels on reports.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Distribution {
    counts: BTreeMap<usize, usize>,
}

impl Distribution {
    /// An all-zero distribution over slots `1..=slots`.
    pub fn new(slots: usize) -> Self {
        let counts = (1..=slots).map(|slot| (slot, 0)).collect();
        Self { counts }
    }

    /// Tallies the correct positions of an existing set.
    pub fn tally(questions: &[QuestionRecord], slots: usize) -> Self {
        let mut distribution = Self::new(slots);
        for record in questions {
            distribution.record(record.correct);
        }
        distribution
    }

    /// Registers one question by its 0-based correct index.
    pub fn record(&mut self, correct: usize) {
        *self.counts.entry(correct + 1).or_insert(0) += 1;
    }

    /// Count for a 1-based slot; slots never seen report zero.
    pub fn count(&self, slot: usize) -> usize {
        self.counts.get(&slot).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Gap between the most- and least-used positions.
    pub fn spread(&self) -> usize {
        let max = self.counts.values().max().copied().unwrap_or(0);
        let min = self.counts.values().min().copied().unwrap_or(0);
        max - min
    }

    pub fn is_balanced(&self) -> bool {
        self.spread() <= 1
    }

    /// Validity-check rule: a set is flagged when the gap between the
    /// most- and least-used positions exceeds 20% of its size.
    pub fn is_skewed(&self, total: usize) -> bool {
        self.spread() as f64 > total as f64 * 0.2
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(slot, count)| (*slot, *count))
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total();
        let mut first = true;
        for (slot, count) in &self.counts {
            if !first {
                writeln!(f)?;
            }
            first = false;
            let percentage = if total == 0 {
                0.0
            } else {
                *count as f64 * 100.0 / total as f64
            };
            write!(
                f,
                "   Position {} ({}): {} ({:.1}%)",
                slot,
                slot_label(*slot),
                count,
                percentage
            )?;
        }
        Ok(())
    }
}

/// 1-based slot to its display letter (1 -> A). Slots past Z keep the number.
fn slot_label(slot: usize) -> String {
    if (1..=26).contains(&slot) {
        char::from(b'A' + slot as u8 - 1).to_string()
    } else {
        slot.to_string()
    }
}
