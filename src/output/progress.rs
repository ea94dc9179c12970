use std::io::IsTerminal;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} Analyzing [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}";

/// Per-file analysis progress on stderr, showing the last finished file.
///
/// Hidden in quiet mode or when stderr is not a TTY. Clones share one bar, so
/// rayon workers can report into it directly.
#[derive(Clone)]
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    /// # Panics
    /// Never in practice: the template is a constant.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let visible = !quiet && std::io::stderr().is_terminal();
        Self::with_visibility(total, visible)
    }

    fn with_visibility(total: u64, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(total).with_style(
                ProgressStyle::default_bar()
                    .template(TEMPLATE)
                    .expect("valid template")
                    .progress_chars("█▓░"),
            )
        } else {
            let bar = ProgressBar::hidden();
            bar.set_length(total);
            bar
        };
        Self { bar }
    }

    /// Record that `path` has been analyzed.
    pub fn file_done(&self, path: &Path) {
        if let Some(name) = path.file_name() {
            self.bar.set_message(name.to_string_lossy().into_owned());
        }
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
