pub const ZOOM_MIN: u32 = 25;
pub const ZOOM_MAX: u32 = 400;
pub const ZOOM_STEP: u32 = 25;
pub const ZOOM_DEFAULT: u32 = 100;

/// Page zoom in percent, kept on the 25% grid between 25% and 400%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    percent: u32,
}

impl Default for Zoom {
    fn default() -> Self {
        Self {
            percent: ZOOM_DEFAULT,
        }
    }
}

impl Zoom {
    pub fn new(percent: u32) -> Self {
        let mut zoom = Self::default();
        zoom.set(percent);
        zoom
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    pub fn factor(&self) -> f64 {
        f64::from(self.percent) / 100.0
    }

    /// Clamps and snaps to the nearest step. Returns whether the value changed.
    pub fn set(&mut self, percent: u32) -> bool {
        let clamped = percent.clamp(ZOOM_MIN, ZOOM_MAX);
        let snapped = ((clamped + ZOOM_STEP / 2) / ZOOM_STEP) * ZOOM_STEP;
        let next = snapped.clamp(ZOOM_MIN, ZOOM_MAX);
        let changed = next != self.percent;
        self.percent = next;
        changed
    }

    pub fn zoom_in(&mut self) -> bool {
        if !self.can_zoom_in() {
            return false;
        }
        self.percent = ((self.percent + ZOOM_STEP) / ZOOM_STEP * ZOOM_STEP).min(ZOOM_MAX);
        true
    }

    pub fn zoom_out(&mut self) -> bool {
        if !self.can_zoom_out() {
            return false;
        }
        let lowered = self.percent - ZOOM_STEP;
        self.percent = lowered.div_ceil(ZOOM_STEP) * ZOOM_STEP;
        self.percent = self.percent.max(ZOOM_MIN);
        true
    }

    pub fn can_zoom_in(&self) -> bool {
        self.percent < ZOOM_MAX
    }

    pub fn can_zoom_out(&self) -> bool {
        self.percent > ZOOM_MIN
    }

    pub fn label(&self) -> String {
        format!(" Zoom: {}% ", self.percent)
    }
}
