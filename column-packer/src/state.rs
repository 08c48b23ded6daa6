use alloc::vec::Vec;

use crate::{ItemGeometry, LayoutConfig, Size};

/// A copy of a completed layout pass.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so a host can
/// persist a pass (e.g. across app launches) and hand it back to
/// [`crate::ColumnPacker::restore`] instead of re-measuring every item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSnapshot {
    pub config: LayoutConfig,
    pub column_heights: Vec<f64>,
    pub geometries: Vec<ItemGeometry>,
    pub content_height: f64,
}

impl LayoutSnapshot {
    pub fn content_size(&self) -> Size {
        Size {
            width: self.config.content_width,
            height: self.content_height,
        }
    }

    pub(crate) fn check(&self) -> Result<(), &'static str> {
        if self.config.validate().is_err() {
            return Err("layout config is invalid");
        }
        if self.column_heights.len() != self.config.column_count {
            return Err("column height count does not match column count");
        }
        if !self.content_height.is_finite() || self.content_height < 0.0 {
            return Err("content height must be finite and non-negative");
        }
        for &height in &self.column_heights {
            if !height.is_finite() || height < 0.0 {
                return Err("column heights must be finite and non-negative");
            }
            if exceeds(height, self.content_height) {
                return Err("a column extends past the content height");
            }
        }

        let width = self.config.content_width;
        for (i, g) in self.geometries.iter().enumerate() {
            if g.index != i {
                return Err("geometries are not in index order");
            }
            if g.column >= self.config.column_count {
                return Err("geometry refers to a missing column");
            }
            let r = g.rect;
            let finite = [r.x, r.y, r.width, r.height, g.photo_height]
                .iter()
                .all(|v| v.is_finite());
            if !finite || r.height < 0.0 || g.photo_height < 0.0 {
                return Err("geometry must be finite with non-negative heights");
            }
            let outside = r.x < 0.0
                || r.y < 0.0
                || exceeds(r.max_x(), width)
                || exceeds(r.max_y(), self.content_height);
            if outside {
                return Err("geometry lies outside the content area");
            }
        }
        Ok(())
    }
}

/// `value > limit`, ignoring the rounding left by summing cell heights and insets.
fn exceeds(value: f64, limit: f64) -> bool {
    value > limit + limit.abs().max(1.0) * 1e-9
}
