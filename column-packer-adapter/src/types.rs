/// Where an item should land in the viewport after a scroll-to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Keep the current offset if the item is fully visible, otherwise scroll the least amount.
    Auto,
}

/// Horizontal insets between the host's bounds and the packed columns.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub left: f64,
    pub right: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }
}

/// Size of the host's scrollable area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
