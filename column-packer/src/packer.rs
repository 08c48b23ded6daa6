use alloc::vec::Vec;

use crate::{Error, ItemGeometry, ItemHeights, LayoutConfig, LayoutSnapshot, Measure, Rect, Size};

/// A headless masonry layout engine.
///
/// The packer places items one by one into the column with the smallest running height and
/// caches the result:
/// - [`Self::layout`] computes every geometry once and is a no-op while the cache is populated.
/// - [`Self::invalidate`] drops the cache; the host must call it whenever an input changes
///   (item count, column count, padding, width, or any measured height).
/// - [`Self::query`] and [`Self::content_size`] read the cache and never mutate it.
///
/// It holds no UI objects and no callbacks. Measurement is borrowed for the duration of a
/// single `layout` call.
#[derive(Clone, Debug, Default)]
pub struct ColumnPacker {
    config: Option<LayoutConfig>,
    content_width: f64,
    column_heights: Vec<f64>,
    cache: Vec<ItemGeometry>,
    content_height: f64,
}

impl ColumnPacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every cached geometry and resets the column heights.
    ///
    /// The last content width is kept, so [`Self::content_size`] reports `(width, 0)`.
    pub fn invalidate(&mut self) {
        ptrace!(cached = self.cache.len(), "invalidate");
        self.config = None;
        self.column_heights.clear();
        self.cache.clear();
        self.content_height = 0.0;
    }

    /// Packs `item_count` items into `column_count` columns spanning `content_width`.
    ///
    /// `measure(index, width)` is called once per item, in index order, with the column width
    /// minus `cell_padding` on both sides. Returns immediately if a previous pass is still
    /// cached. On error nothing is modified.
    pub fn layout(
        &mut self,
        item_count: usize,
        content_width: f64,
        column_count: usize,
        cell_padding: f64,
        mut measure: impl FnMut(usize, f64) -> ItemHeights,
    ) -> Result<(), Error> {
        let config =
            LayoutConfig::new(content_width, column_count).with_cell_padding(cell_padding);
        self.layout_with(item_count, config, &mut measure)
    }

    /// Same as [`Self::layout`], taking a prebuilt config and any [`Measure`] implementation.
    pub fn layout_with<M: Measure + ?Sized>(
        &mut self,
        item_count: usize,
        config: LayoutConfig,
        measure: &mut M,
    ) -> Result<(), Error> {
        config.validate()?;
        if !self.cache.is_empty() {
            ptrace!(cached = self.cache.len(), "layout: cache populated, skipping");
            return Ok(());
        }

        pdebug!(
            item_count,
            column_count = config.column_count,
            content_width = config.content_width,
            cell_padding = config.cell_padding,
            "layout"
        );

        let column_width = config.column_width();
        let measure_width = config.measure_width();
        let padding = config.cell_padding;

        // Built off to the side so a panicking `measure` cannot leave a partial cache behind.
        let mut column_heights = alloc::vec![0.0f64; config.column_count];
        let mut cache = Vec::with_capacity(item_count);
        let mut content_height = 0.0f64;

        for index in 0..item_count {
            let column = config.strategy.pick(&column_heights, index);
            let heights = measure.measure(index, measure_width);
            let heights = if heights.is_valid() {
                heights
            } else {
                pwarn!(
                    index,
                    photo = heights.photo,
                    annotation = heights.annotation,
                    "layout: clamping invalid measurement to 0"
                );
                heights.clamped()
            };

            let cell_height = padding + heights.photo + heights.annotation + padding;
            let outer = Rect::new(
                column as f64 * column_width,
                column_heights[column],
                column_width,
                cell_height,
            );

            cache.push(ItemGeometry {
                index,
                column,
                rect: outer.inset(padding, padding),
                photo_height: heights.photo,
            });
            content_height = content_height.max(outer.max_y());
            column_heights[column] += cell_height;
        }

        pdebug!(items = cache.len(), content_height, "layout: done");

        self.config = Some(config);
        self.content_width = config.content_width;
        self.column_heights = column_heights;
        self.cache = cache;
        self.content_height = content_height;
        Ok(())
    }

    /// `true` once a pass with at least one item is cached.
    pub fn is_populated(&self) -> bool {
        !self.cache.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// The config of the last completed pass, if it has not been invalidated since.
    pub fn config(&self) -> Option<LayoutConfig> {
        self.config
    }

    pub fn column_count(&self) -> usize {
        self.column_heights.len()
    }

    pub fn column_width(&self) -> f64 {
        self.config.map_or(0.0, |c| c.column_width())
    }

    pub fn cell_padding(&self) -> f64 {
        self.config.map_or(0.0, |c| c.cell_padding)
    }

    /// Running height of every column, including the trailing padding of the last cell.
    pub fn column_heights(&self) -> &[f64] {
        &self.column_heights
    }

    /// All cached geometries in index order.
    pub fn geometries(&self) -> &[ItemGeometry] {
        &self.cache
    }

    pub fn geometry(&self, index: usize) -> Option<ItemGeometry> {
        self.cache.get(index).copied()
    }

    pub fn content_size(&self) -> Size {
        Size {
            width: self.content_width,
            height: self.content_height,
        }
    }

    /// Returns every cached geometry intersecting `rect`, in index order.
    ///
    /// See [`Rect::intersects`] for the edge convention.
    pub fn query(&self, rect: Rect) -> Vec<ItemGeometry> {
        let mut out = Vec::new();
        self.collect_in_rect(rect, &mut out);
        out
    }

    /// Collects the geometries intersecting `rect` into `out` (clears `out` first).
    pub fn collect_in_rect(&self, rect: Rect, out: &mut Vec<ItemGeometry>) {
        out.clear();
        self.for_each_in_rect(rect, |g| out.push(g));
    }

    /// Visits the geometries intersecting `rect` in index order without allocating.
    pub fn for_each_in_rect(&self, rect: Rect, mut f: impl FnMut(ItemGeometry)) {
        for g in &self.cache {
            if g.rect.intersects(&rect) {
                f(*g);
            }
        }
    }

    /// Captures the current pass. Returns `None` if nothing has been laid out since the last
    /// invalidation.
    pub fn snapshot(&self) -> Option<LayoutSnapshot> {
        let config = self.config?;
        Some(LayoutSnapshot {
            config,
            column_heights: self.column_heights.clone(),
            geometries: self.cache.clone(),
            content_height: self.content_height,
        })
    }

    /// Replaces the current state with a previously captured pass.
    ///
    /// The snapshot is checked first; a rejected snapshot leaves the packer untouched.
    pub fn restore(&mut self, snapshot: LayoutSnapshot) -> Result<(), Error> {
        snapshot.check().map_err(Error::InvalidSnapshot)?;
        pdebug!(items = snapshot.geometries.len(), "restore");
        self.content_width = snapshot.config.content_width;
        self.config = Some(snapshot.config);
        self.column_heights = snapshot.column_heights;
        self.cache = snapshot.geometries;
        self.content_height = snapshot.content_height;
        Ok(())
    }
}
