/// Receives advisory progress checkpoints while a report is built.
///
/// Progress has no effect on report content; failing to report it is not
/// an error, and sinks must never fail.
pub trait ProgressSink {
    fn show_progress(&mut self, current: u64, max: u64);
}

/// Sink that discards every update.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn show_progress(&mut self, _current: u64, _max: u64) {}
}
