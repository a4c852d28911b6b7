use crate::history::Sample;

/// All messages that flow through the monitoring session loop.
///
/// Sources:
/// - Sampler task        → `Sample`
/// - Persistence timer   → `PersistTick`
/// - ctrl-c handler      → `Shutdown`
#[derive(Debug, Clone)]
pub enum Message {
    /// A parsed counter sample arrived from the sampler task.
    Sample(Sample),
    /// The persistence timer fired; snapshot the history to disk.
    PersistTick,
    /// Graceful shutdown requested.
    Shutdown,
}
