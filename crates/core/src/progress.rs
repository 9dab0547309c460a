use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// The three-phase status protocol: begin read, scoring, done.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Read,
    Score,
    Finalize,
}

impl Phase {
    pub fn number(self) -> u8 {
        match self {
            Phase::Read => 1,
            Phase::Score => 2,
            Phase::Finalize => 3,
        }
    }

    /// `step / 3 * 100`; Finalize is exactly 100.
    pub fn percent(self) -> f32 {
        f32::from(self.number()) / 3.0 * 100.0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressUpdate {
    pub phase: Phase,
    pub percent: f32,
    pub status: String,
}

/// Write side of the progress surface.
///
/// A pure sink: delivery has no effect on pipeline correctness, and a
/// departed observer is not an error.
#[derive(Clone, Debug)]
pub struct ProgressSender {
    tx: mpsc::Sender<ProgressUpdate>,
}

impl ProgressSender {
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<ProgressUpdate>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    pub async fn send(&self, phase: Phase, status: impl Into<String>) {
        let update = ProgressUpdate {
            phase,
            percent: phase.percent(),
            status: status.into(),
        };
        if self.tx.send(update).await.is_err() {
            tracing::debug!(phase = phase.number(), "progress observer gone");
        }
    }
}
