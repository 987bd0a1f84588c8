/// Offset past which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 10.0;
/// Offset past which scrolling down hides the navbar.
pub const HIDE_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavScrollState {
    pub scrolled: bool,
    pub hidden: bool,
    last_offset: f64,
}

impl NavScrollState {
    /// Recomputes both flags for a new vertical offset.
    pub fn observe(&mut self, offset: f64) {
        self.scrolled = offset > SCROLLED_THRESHOLD;
        self.hidden = offset > self.last_offset && offset > HIDE_THRESHOLD;
        self.last_offset = offset;
    }
}
