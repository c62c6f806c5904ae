use indicatif::{ProgressBar, ProgressStyle};
use sysreport_domain::ProgressSink;

/// indicatif-backed progress sink. The bar is created lazily on the
/// first checkpoint, once the total is known, and draws to stderr.
#[derive(Default)]
pub struct BarProgress {
    bar: Option<ProgressBar>,
}

impl BarProgress {
    pub fn finish(&mut self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl ProgressSink for BarProgress {
    fn show_progress(&mut self, current: u64, max: u64) {
        let bar = self.bar.get_or_insert_with(|| {
            let bar = ProgressBar::new(max);
            let style = ProgressStyle::with_template("{bar:30} {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            bar.set_style(style);
            bar
        });
        bar.set_position(current);
    }
}
