use crate::core::ProgressReporter;

/// 以日誌輸出處理進度
#[derive(Debug, Default)]
pub struct LogProgress {
    label: String,
}

impl LogProgress {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl ProgressReporter for LogProgress {
    fn report(&mut self, current: usize, total: usize) {
        let percent = if total > 0 { current * 100 / total } else { 100 };
        tracing::info!("📄 {}: {}/{} ({}%)", self.label, current, total, percent);
    }
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&mut self, _current: usize, _total: usize) {}
}
