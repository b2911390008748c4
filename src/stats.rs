use crate::report::Report;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub skipped: usize,
}

impl IngestStats {
    /// Lines that parsed into an event.
    pub fn events(&self) -> usize {
        self.lines_read - self.blank_lines - self.skipped
    }
}

#[derive(Debug)]
pub struct AnalysisResult {
    pub report: Report,
    pub stats: IngestStats,
}
