use crate::models::{PlayerRecord, StatBin, StatKind};

/// Mean and standard deviation of one stat across the catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatSummary {
    pub mean: f64,
    /// Never zero; a degenerate spread is stored as 1
    pub std: f64,
}

impl StatSummary {
    /// Bins a value at half a standard deviation either side of the mean.
    /// Missing values land in `Mid`.
    pub fn classify(&self, value: Option<f64>) -> StatBin {
        let Some(value) = value else {
            return StatBin::Mid;
        };

        let high = self.mean + 0.5 * self.std;
        let low = self.mean - 0.5 * self.std;

        if value >= high {
            StatBin::High
        } else if value <= low {
            StatBin::Low
        } else {
            StatBin::Mid
        }
    }
}

#[derive(Default)]
struct Accumulator {
    sum: f64,
    sum_sq: f64,
    count: usize,
}

impl Accumulator {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.sum_sq += value * value;
        self.count += 1;
    }

    fn finish(&self) -> StatSummary {
        if self.count == 0 {
            return StatSummary { mean: 0.0, std: 1.0 };
        }

        let n = self.count as f64;
        let mean = self.sum / n;
        let variance = (self.sum_sq / n - mean * mean).max(0.0);
        let std = variance.sqrt();

        StatSummary {
            mean,
            std: if std == 0.0 || !std.is_finite() { 1.0 } else { std },
        }
    }
}

/// Population mean/std for every binned stat over a catalog snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    summaries: [StatSummary; 3],
}

impl Statistics {
    pub fn estimate(catalog: &[PlayerRecord]) -> Self {
        let mut accumulators: [Accumulator; 3] = Default::default();

        for player in catalog {
            for kind in StatKind::ALL {
                if let Some(value) = player.stat(kind) {
                    accumulators[kind.index()].push(value);
                }
            }
        }

        Self {
            summaries: accumulators.map(|acc| acc.finish()),
        }
    }

    pub fn summary(&self, kind: StatKind) -> StatSummary {
        self.summaries[kind.index()]
    }

    /// Bins for every stat of a player, in `StatKind::ALL` order
    pub fn bins(&self, player: &PlayerRecord) -> [StatBin; 3] {
        StatKind::ALL.map(|kind| self.summary(kind).classify(player.stat(kind)))
    }
}
