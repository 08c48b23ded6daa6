/// An axis-aligned rectangle in content coordinates.
///
/// Rectangles with positive extents are half-open: a rect covers
/// `[x, x + width) × [y, y + height)` and two such rects that only share an edge do not
/// intersect. A zero extent is a point on that axis and hits any span containing it, edges
/// included. Negative extents are normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Shrinks the rect by `dx` on the left and right edges and by `dy` on the top and bottom.
    pub fn inset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width - 2.0 * dx,
            height: self.height - 2.0 * dy,
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        spans_overlap(self.x, self.width, other.x, other.width)
            && spans_overlap(self.y, self.height, other.y, other.height)
    }
}

fn span(start: f64, len: f64) -> (f64, f64) {
    if len < 0.0 {
        (start + len, start)
    } else {
        (start, start + len)
    }
}

/// Half-open overlap when both spans have length, closed when either is a point. NaN never
/// overlaps.
fn spans_overlap(a: f64, a_len: f64, b: f64, b_len: f64) -> bool {
    let (a_lo, a_hi) = span(a, a_len);
    let (b_lo, b_hi) = span(b, b_len);
    if a_hi > a_lo && b_hi > b_lo {
        a_lo < b_hi && b_lo < a_hi
    } else {
        a_lo <= b_hi && b_lo <= a_hi
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Heights of the two stacked regions of one item, as reported by a [`crate::Measure`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHeights {
    /// Height of the primary (photo) region at the top of the cell.
    pub photo: f64,
    /// Height of the secondary (annotation) region below the photo.
    pub annotation: f64,
}

impl ItemHeights {
    pub const fn new(photo: f64, annotation: f64) -> Self {
        Self { photo, annotation }
    }

    pub fn total(&self) -> f64 {
        self.photo + self.annotation
    }

    /// Returns `true` if both heights are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        is_valid_height(self.photo) && is_valid_height(self.annotation)
    }

    /// Replaces negative, NaN or infinite heights with `0.0`.
    pub fn clamped(self) -> Self {
        Self {
            photo: clamp_height(self.photo),
            annotation: clamp_height(self.annotation),
        }
    }
}

fn is_valid_height(h: f64) -> bool {
    h.is_finite() && h >= 0.0
}

fn clamp_height(h: f64) -> f64 {
    if is_valid_height(h) { h } else { 0.0 }
}

/// The computed placement of one item.
///
/// Equality only considers `rect` and `photo_height`: two geometries describe the same cell
/// shape regardless of which item or column produced them.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemGeometry {
    pub index: usize,
    /// Column the item was packed into.
    pub column: usize,
    /// The visible cell rectangle (outer slot inset by the cell padding).
    pub rect: Rect,
    pub photo_height: f64,
}

impl ItemGeometry {
    /// The photo region: the top `photo_height` of the cell.
    pub fn photo_rect(&self) -> Rect {
        Rect {
            height: self.photo_height.min(self.rect.height),
            ..self.rect
        }
    }

    /// The annotation region: whatever remains of the cell below the photo.
    pub fn annotation_rect(&self) -> Rect {
        let photo = self.photo_height.min(self.rect.height);
        Rect {
            y: self.rect.y + photo,
            height: self.rect.height - photo,
            ..self.rect
        }
    }
}

impl PartialEq for ItemGeometry {
    fn eq(&self, other: &Self) -> bool {
        self.rect == other.rect && self.photo_height == other.photo_height
    }
}
