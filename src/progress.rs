//! Progress bar display for batch installs

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for a batch of modules
pub struct ProgressDisplay {
    module_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total module count
    pub fn new(total_modules: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let module_pb = ProgressBar::new(total_modules);
        module_pb.set_style(style);

        Self { module_pb }
    }

    /// Update to show the module currently being processed
    pub fn update_module(&self, module_name: &str, current: usize, total: usize) {
        let msg = format!("({}/{}) {}", current, total, module_name);
        self.module_pb.set_message(msg);
    }

    /// Increment module progress
    pub fn inc(&self) {
        self.module_pb.inc(1);
    }

    /// Finish the batch
    pub fn finish(&self) {
        self.module_pb.finish_and_clear();
    }

    /// Abandon on error
    #[allow(dead_code)]
    pub fn abandon(&self) {
        self.module_pb.abandon();
    }
}
