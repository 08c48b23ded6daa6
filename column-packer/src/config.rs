use crate::InvalidConfiguration;

/// How the packer chooses a column for the next item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnStrategy {
    /// Append to the column with the smallest running height; equal heights resolve to the
    /// lowest column index.
    #[default]
    Shortest,
    /// Item `i` goes to column `i % column_count`, regardless of heights.
    RoundRobin,
}

impl ColumnStrategy {
    pub(crate) fn pick(self, column_heights: &[f64], item_index: usize) -> usize {
        match self {
            Self::Shortest => shortest_column(column_heights),
            Self::RoundRobin => item_index % column_heights.len().max(1),
        }
    }
}

/// First index holding the minimum height. Returns 0 for an empty slice.
pub(crate) fn shortest_column(column_heights: &[f64]) -> usize {
    let mut index = 0;
    let mut best = column_heights.first().copied().unwrap_or(0.0);
    for (i, &height) in column_heights.iter().enumerate().skip(1) {
        if height < best {
            best = height;
            index = i;
        }
    }
    index
}

/// Layout inputs for one packing pass.
///
/// `content_width` is the width available to the columns (the host's width minus any
/// horizontal insets).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub content_width: f64,
    pub column_count: usize,
    /// Inset applied on all four sides of every cell.
    pub cell_padding: f64,
    pub strategy: ColumnStrategy,
}

impl LayoutConfig {
    pub fn new(content_width: f64, column_count: usize) -> Self {
        Self {
            content_width,
            column_count,
            cell_padding: 0.0,
            strategy: ColumnStrategy::default(),
        }
    }

    pub fn with_cell_padding(mut self, cell_padding: f64) -> Self {
        self.cell_padding = cell_padding;
        self
    }

    pub fn with_strategy(mut self, strategy: ColumnStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Width of one column track. `0.0` when `column_count` is zero.
    pub fn column_width(&self) -> f64 {
        if self.column_count == 0 {
            return 0.0;
        }
        self.content_width / self.column_count as f64
    }

    /// The width handed to [`crate::Measure::measure`]: the column minus padding on both sides.
    ///
    /// Negative when the padding is wider than half a column; the cell rects then have the same
    /// negative width.
    pub fn measure_width(&self) -> f64 {
        self.column_width() - 2.0 * self.cell_padding
    }

    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.column_count == 0 {
            return Err(InvalidConfiguration::ZeroColumns);
        }
        if !self.content_width.is_finite() || !self.cell_padding.is_finite() {
            return Err(InvalidConfiguration::NonFinite);
        }
        if self.content_width < 0.0 {
            return Err(InvalidConfiguration::NegativeWidth(self.content_width));
        }
        if self.cell_padding < 0.0 {
            return Err(InvalidConfiguration::NegativePadding(self.cell_padding));
        }
        Ok(())
    }
}
