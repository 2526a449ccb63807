use async_trait::async_trait;

/// Receives per-segment completion updates during a segmented run, enabling
/// incremental feedback while the run is still in flight.
#[async_trait]
pub trait ProgressSink: Send + Sync {
    async fn on_segment_transcribed(&self, completed: usize, total: usize);
}

/// Discards progress updates.
pub struct NoProgress;

#[async_trait]
impl ProgressSink for NoProgress {
    async fn on_segment_transcribed(&self, _completed: usize, _total: usize) {}
}
