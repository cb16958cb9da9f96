use std::ops::RangeInclusive;

/// Two-state control; the callback runs on every actual change
pub struct Toggle {
    label: String,
    value: bool,
    on_change: Box<dyn FnMut(bool) + Send>,
}

impl Toggle {
    pub fn new(label: impl Into<String>, value: bool, on_change: impl FnMut(bool) + Send + 'static) -> Self {
        Self {
            label: label.into(),
            value,
            on_change: Box::new(on_change),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set(&mut self, value: bool) {
        if value != self.value {
            self.value = value;
            (self.on_change)(value);
        }
    }
}

/// Continuous control clamped to a range
pub struct Slider {
    label: String,
    value: f32,
    range: RangeInclusive<f32>,
    on_change: Box<dyn FnMut(f32) + Send>,
}

impl Slider {
    pub fn new(
        label: impl Into<String>,
        value: f32,
        range: RangeInclusive<f32>,
        on_change: impl FnMut(f32) + Send + 'static,
    ) -> Self {
        let value = value.clamp(*range.start(), *range.end());
        Self {
            label: label.into(),
            value,
            range,
            on_change: Box::new(on_change),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn range(&self) -> RangeInclusive<f32> {
        self.range.clone()
    }

    pub fn set(&mut self, value: f32) {
        let value = value.clamp(*self.range.start(), *self.range.end());
        if value != self.value {
            self.value = value;
            (self.on_change)(value);
        }
    }
}

/// Momentary control
pub struct TapButton {
    label: String,
    on_tap: Box<dyn FnMut() + Send>,
}

impl TapButton {
    pub fn new(label: impl Into<String>, on_tap: impl FnMut() + Send + 'static) -> Self {
        Self {
            label: label.into(),
            on_tap: Box::new(on_tap),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tap(&mut self) {
        (self.on_tap)();
    }
}
