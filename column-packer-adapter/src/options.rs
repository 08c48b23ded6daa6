use column_packer::ColumnStrategy;

use crate::Insets;

/// Configuration for [`crate::Controller`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    pub item_count: usize,
    pub column_count: usize,
    pub cell_padding: f64,
    pub insets: Insets,
    pub strategy: ColumnStrategy,
    /// Extra distance above and below the viewport included in visible queries.
    pub overscan: f64,
}

impl ControllerOptions {
    pub fn new(item_count: usize, column_count: usize) -> Self {
        Self {
            item_count,
            column_count,
            cell_padding: 0.0,
            insets: Insets::default(),
            strategy: ColumnStrategy::default(),
            overscan: 0.0,
        }
    }

    pub fn with_cell_padding(mut self, cell_padding: f64) -> Self {
        self.cell_padding = cell_padding;
        self
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_strategy(mut self, strategy: ColumnStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_overscan(mut self, overscan: f64) -> Self {
        self.overscan = overscan;
        self
    }

    /// `true` if switching from `self` to `next` changes any packed geometry.
    pub(crate) fn affects_layout(&self, next: &Self) -> bool {
        self.item_count != next.item_count
            || self.column_count != next.column_count
            || self.cell_padding != next.cell_padding
            || self.insets != next.insets
            || self.strategy != next.strategy
    }
}
