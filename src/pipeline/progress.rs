// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for pipeline execution
// reference: uses indicatif for progress bars and tracks record counts

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    pub pipelines_succeeded: usize,
    pub pipelines_failed: usize,
    pub records_read: usize,
    pub records_dropped: usize,
    pub records_written: usize,
    pub files_written: usize,
    pub duration_ms: u64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.pipelines_succeeded + self.pipelines_failed;
        if total == 0 {
            return 0.0;
        }
        (self.pipelines_succeeded as f64 / total as f64) * 100.0
    }

    pub fn drop_rate(&self) -> f64 {
        if self.records_read == 0 {
            return 0.0;
        }
        (self.records_dropped as f64 / self.records_read as f64) * 100.0
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    pipelines_succeeded: AtomicUsize,
    pipelines_failed: AtomicUsize,
    records_read: AtomicUsize,
    records_dropped: AtomicUsize,
    records_written: AtomicUsize,
    files_written: AtomicUsize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_pipelines: usize) -> Self {
        Self::with_color(total_pipelines, true)
    }

    pub fn with_color(total_pipelines: usize, colored: bool) -> Self {
        let multi_progress = MultiProgress::new();
        Self::build(multi_progress, total_pipelines, colored)
    }

    /// Tracks counts without drawing anything.
    pub fn hidden(total_pipelines: usize) -> Self {
        let multi_progress = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        Self::build(multi_progress, total_pipelines, false)
    }

    fn build(multi_progress: MultiProgress, total_pipelines: usize, colored: bool) -> Self {
        let main_bar = create_progress_bar(&multi_progress, total_pipelines as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            pipelines_succeeded: AtomicUsize::new(0),
            pipelines_failed: AtomicUsize::new(0),
            records_read: AtomicUsize::new(0),
            records_dropped: AtomicUsize::new(0),
            records_written: AtomicUsize::new(0),
            files_written: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn start_pipeline(&self, name: &str) {
        self.main_bar.set_message(format!("Processing {}", name));
    }

    pub fn inc_pipelines_succeeded(&self) {
        self.pipelines_succeeded.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_pipelines_failed(&self) {
        self.pipelines_failed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn add_records(&self, read: usize, dropped: usize, written: usize) {
        self.records_read.fetch_add(read, Ordering::SeqCst);
        self.records_dropped.fetch_add(dropped, Ordering::SeqCst);
        self.records_written.fetch_add(written, Ordering::SeqCst);
    }

    pub fn add_files_written(&self, files: usize) {
        self.files_written.fetch_add(files, Ordering::SeqCst);
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Processing complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> PipelineStats {
        PipelineStats {
            pipelines_succeeded: self.pipelines_succeeded.load(Ordering::SeqCst),
            pipelines_failed: self.pipelines_failed.load(Ordering::SeqCst),
            records_read: self.records_read.load(Ordering::SeqCst),
            records_dropped: self.records_dropped.load(Ordering::SeqCst),
            records_written: self.records_written.load(Ordering::SeqCst),
            files_written: self.files_written.load(Ordering::SeqCst),
            duration_ms: self.start_time.elapsed().as_millis() as u64,
        }
    }

    fn update_detail_bar(&self) {
        let written = self.records_written.load(Ordering::SeqCst);
        let dropped = self.records_dropped.load(Ordering::SeqCst);
        let failed = self.pipelines_failed.load(Ordering::SeqCst);

        let message = format!(
            "Records: {} | Dropped: {} | Failed pipelines: {}",
            written, dropped, failed
        );

        self.detail_bar.set_message(message);
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    if colored {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );
    } else {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("=>-"),
        );
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    let style = ProgressStyle::default_bar()
        .template("{msg}")
        .expect("Failed to create detail bar template");
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_stats_calculations() {
        let mut stats = PipelineStats::new();
        stats.pipelines_succeeded = 3;
        stats.pipelines_failed = 1;
        stats.records_read = 200;
        stats.records_dropped = 50;

        assert_eq!(stats.success_rate(), 75.0);
        assert_eq!(stats.drop_rate(), 25.0);
    }

    #[test]
    fn test_pipeline_stats_empty() {
        let stats = PipelineStats::new();
        assert_eq!(stats.success_rate(), 0.0);
        assert_eq!(stats.drop_rate(), 0.0);
    }

    #[test]
    fn test_progress_tracker_counts() {
        let tracker = ProgressTracker::hidden(4);

        tracker.start_pipeline("items");
        tracker.add_records(10, 2, 8);
        tracker.add_files_written(1);
        tracker.inc_pipelines_succeeded();

        let stats = tracker.get_stats();
        assert_eq!(stats.pipelines_succeeded, 1);
        assert_eq!(stats.records_read, 10);
        assert_eq!(stats.records_dropped, 2);
        assert_eq!(stats.records_written, 8);
        assert_eq!(stats.files_written, 1);
    }

    #[test]
    fn test_progress_tracker_failures() {
        let tracker = ProgressTracker::hidden(4);

        tracker.inc_pipelines_failed();
        tracker.inc_pipelines_failed();

        let stats = tracker.get_stats();
        assert_eq!(stats.pipelines_failed, 2);
        assert_eq!(stats.pipelines_succeeded, 0);
    }
}
