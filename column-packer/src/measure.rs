use crate::ItemHeights;

/// Supplies item heights to the packer.
///
/// `measure(index, width)` returns the photo and annotation heights of item `index` when laid
/// out at `width` (the column width minus the cell padding on both sides). The packer calls it
/// exactly once per item per layout pass, in index order, so implementations may be expensive
/// but should be deterministic for a given pass.
///
/// Any `FnMut(usize, f64) -> ItemHeights` closure implements this trait.
pub trait Measure {
    fn measure(&mut self, index: usize, width: f64) -> ItemHeights;
}

impl<F> Measure for F
where
    F: FnMut(usize, f64) -> ItemHeights,
{
    fn measure(&mut self, index: usize, width: f64) -> ItemHeights {
        self(index, width)
    }
}

/// A [`Measure`] built from two independent functions, one per region.
///
/// Useful when a host already computes photo and annotation heights separately (e.g. image
/// aspect ratio for the photo and text wrapping for the caption).
#[derive(Clone, Copy, Debug)]
pub struct SplitMeasure<P, A> {
    photo: P,
    annotation: A,
}

impl<P, A> SplitMeasure<P, A>
where
    P: FnMut(usize, f64) -> f64,
    A: FnMut(usize, f64) -> f64,
{
    pub fn new(photo: P, annotation: A) -> Self {
        Self { photo, annotation }
    }
}

impl<P, A> Measure for SplitMeasure<P, A>
where
    P: FnMut(usize, f64) -> f64,
    A: FnMut(usize, f64) -> f64,
{
    fn measure(&mut self, index: usize, width: f64) -> ItemHeights {
        ItemHeights {
            photo: (self.photo)(index, width),
            annotation: (self.annotation)(index, width),
        }
    }
}
