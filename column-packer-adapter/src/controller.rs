use alloc::vec::Vec;

use column_packer::{
    ColumnPacker, ColumnStrategy, Error, ItemGeometry, LayoutConfig, Measure, Rect, Size,
};

use crate::{Align, ControllerOptions, Insets, Viewport};

/// A framework-neutral controller that owns a [`ColumnPacker`] together with the inputs a host
/// would otherwise have to track by hand.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `set_viewport` when the scroll area is resized
/// - `set_item_count` / `set_column_count` / ... when the data or style changes
/// - `invalidate_measurements` when item heights change without a count change
/// - `visible()` each frame
///
/// Setters compare against the previous value and only drop the packer's cache when a layout
/// input actually changed. Viewport height, scroll offset, and overscan never trigger a relayout.
#[derive(Clone, Debug)]
pub struct Controller<M> {
    packer: ColumnPacker,
    measure: M,
    options: ControllerOptions,
    viewport: Viewport,
    scroll_offset: f64,
}

impl<M: Measure> Controller<M> {
    pub fn new(options: ControllerOptions, measure: M) -> Self {
        Self {
            packer: ColumnPacker::new(),
            measure,
            options,
            viewport: Viewport::default(),
            scroll_offset: 0.0,
        }
    }

    pub fn packer(&self) -> &ColumnPacker {
        &self.packer
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// Replaces the measurement provider and drops the cached layout.
    pub fn set_measure(&mut self, measure: M) {
        self.measure = measure;
        self.invalidate_measurements();
    }

    pub fn into_parts(self) -> (ColumnPacker, M) {
        (self.packer, self.measure)
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ControllerOptions) {
        if self.options.affects_layout(&options) {
            atrace!(
                item_count = options.item_count,
                column_count = options.column_count,
                "set_options: layout inputs changed"
            );
            self.packer.invalidate();
        }
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ControllerOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.update_options(|o| o.item_count = item_count);
    }

    pub fn set_column_count(&mut self, column_count: usize) {
        self.update_options(|o| o.column_count = column_count);
    }

    pub fn set_cell_padding(&mut self, cell_padding: f64) {
        self.update_options(|o| o.cell_padding = cell_padding);
    }

    pub fn set_insets(&mut self, insets: Insets) {
        self.update_options(|o| o.insets = insets);
    }

    pub fn set_strategy(&mut self, strategy: ColumnStrategy) {
        self.update_options(|o| o.strategy = strategy);
    }

    pub fn set_overscan(&mut self, overscan: f64) {
        self.update_options(|o| o.overscan = overscan);
    }

    /// Call this when any item's measured height may have changed.
    pub fn invalidate_measurements(&mut self) {
        atrace!("invalidate_measurements");
        self.packer.invalidate();
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        let prev_width = self.content_width();
        self.viewport = viewport;
        if self.content_width() != prev_width {
            atrace!(
                width = viewport.width,
                height = viewport.height,
                "set_viewport: content width changed"
            );
            self.packer.invalidate();
        }
    }

    /// The host width minus the horizontal insets, never negative.
    pub fn content_width(&self) -> f64 {
        (self.viewport.width - self.options.insets.horizontal()).max(0.0)
    }

    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig::new(self.content_width(), self.options.column_count)
            .with_cell_padding(self.options.cell_padding)
            .with_strategy(self.options.strategy)
    }

    /// Runs a layout pass if the cache is empty, then pulls the scroll offset back inside the
    /// (possibly shorter) content.
    ///
    /// A zero or narrow width is packed like any other; cells just end up with zero or negative
    /// width.
    pub fn ensure_layout(&mut self) -> Result<(), Error> {
        let config = self.layout_config();
        self.packer
            .layout_with(self.options.item_count, config, &mut self.measure)?;

        let max = (self.packer.content_size().height - self.viewport.height).max(0.0);
        let clamped = self.scroll_offset.clamp(0.0, max);
        if clamped != self.scroll_offset {
            atrace!(
                from = self.scroll_offset,
                to = clamped,
                "ensure_layout: clamped scroll offset"
            );
            self.scroll_offset = clamped;
        }
        Ok(())
    }

    pub fn content_size(&mut self) -> Result<Size, Error> {
        self.ensure_layout()?;
        Ok(self.packer.content_size())
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn max_scroll_offset(&mut self) -> Result<f64, Error> {
        let size = self.content_size()?;
        Ok((size.height - self.viewport.height).max(0.0))
    }

    pub fn clamp_scroll_offset(&mut self, offset: f64) -> Result<f64, Error> {
        let max = self.max_scroll_offset()?;
        Ok(offset.clamp(0.0, max))
    }

    /// Applies a scroll offset reported by the host, clamped to the content.
    ///
    /// Returns the applied offset.
    pub fn set_scroll_offset(&mut self, offset: f64) -> Result<f64, Error> {
        self.scroll_offset = self.clamp_scroll_offset(offset)?;
        Ok(self.scroll_offset)
    }

    /// The content-space rectangle currently visible, extended by `overscan` above and below.
    pub fn visible_rect(&self) -> Rect {
        let overscan = self.options.overscan.max(0.0);
        let top = (self.scroll_offset - overscan).max(0.0);
        let bottom = self.scroll_offset + self.viewport.height + overscan;
        Rect::new(0.0, top, self.content_width(), bottom - top)
    }

    /// Visits the geometries intersecting [`Self::visible_rect`], laying out first if needed.
    pub fn for_each_visible(&mut self, f: impl FnMut(ItemGeometry)) -> Result<(), Error> {
        self.ensure_layout()?;
        self.packer.for_each_in_rect(self.visible_rect(), f);
        Ok(())
    }

    pub fn visible(&mut self) -> Result<Vec<ItemGeometry>, Error> {
        let mut out = Vec::new();
        self.for_each_visible(|g| out.push(g))?;
        Ok(out)
    }

    /// Computes the offset that brings item `index` into view (no state change).
    ///
    /// Indexes past the end are clamped to the last item. The item's outer slot (including
    /// padding) is what gets aligned. Returns `0.0` when there are no items.
    pub fn scroll_to_item_offset(&mut self, index: usize, align: Align) -> Result<f64, Error> {
        self.ensure_layout()?;
        let len = self.packer.len();
        if len == 0 {
            return Ok(0.0);
        }
        let Some(item) = self.packer.geometry(index.min(len - 1)) else {
            return Ok(0.0);
        };

        let padding = self.packer.cell_padding();
        let start = item.rect.y - padding;
        let end = item.rect.max_y() + padding;
        let view = self.viewport.height;

        let target = match align {
            Align::Start => start,
            Align::End => end - view,
            Align::Center => (start + end) / 2.0 - view / 2.0,
            Align::Auto => {
                let cur = self.scroll_offset;
                if start >= cur && end <= cur + view {
                    cur
                } else if start < cur {
                    start
                } else {
                    end - view
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    /// Scrolls so item `index` is aligned as requested. Returns the applied offset.
    pub fn scroll_to_item(&mut self, index: usize, align: Align) -> Result<f64, Error> {
        let offset = self.scroll_to_item_offset(index, align)?;
        self.scroll_offset = offset;
        Ok(offset)
    }
}
