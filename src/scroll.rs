//! Scroll-linked state: the reading-progress fraction and the reveal latch.

/// How far down the document the reader is, in `[0, 1]`.
///
/// A document no taller than the viewport has nothing to scroll and reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if !range.is_finite() || range <= 0.0 {
        return 0.0;
    }

    let progress = scroll_top / range;
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// CSS for the progress bar; scaling keeps the bar off the layout path.
pub fn progress_style(progress: f64) -> String {
    format!("transform: scaleX({:.4});", progress.clamp(0.0, 1.0))
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
        }
    }
}

/// One-way hidden → visible switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    #[cfg(test)]
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Feeds one intersection report. Returns `true` only for the report
    /// that flips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}
