use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bar counting finished translation tasks.
///
/// Draws to stderr and stays hidden when stderr is not a terminal.
/// Clears itself when dropped.
pub struct TaskProgress {
    progress_bar: ProgressBar,
}

impl TaskProgress {
    /// Creates a bar with no tasks; length grows as tasks are queued.
    pub fn new(message: &str) -> Self {
        let progress_bar = ProgressBar::new(0);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} {msg} [{bar:30}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "])
                .progress_chars("=> "),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// A bar that never draws, for tests and non-interactive callers.
    pub fn hidden() -> Self {
        Self {
            progress_bar: ProgressBar::hidden(),
        }
    }

    pub fn add_task(&self) {
        self.progress_bar.inc_length(1);
    }

    pub fn finish_task(&self) {
        self.progress_bar.inc(1);
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    #[cfg(test)]
    fn length(&self) -> u64 {
        self.progress_bar.length().unwrap_or(0)
    }

    /// Stops the bar and clears it from the terminal.
    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for TaskProgress {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
