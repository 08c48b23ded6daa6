// Example: pack a feed of photo cards and query the visible slice.
use column_packer::{ColumnPacker, ItemHeights, Rect};

fn main() {
    // Photo aspect ratios (height / width) and caption line counts for a small feed.
    let aspect = [1.5, 0.75, 1.0, 1.25, 0.6, 1.8, 1.0, 0.9];
    let caption_lines = [1, 2, 1, 3, 1, 1, 2, 1];

    let mut packer = ColumnPacker::new();
    packer
        .layout(aspect.len(), 400.0, 2, 6.0, |i, width| {
            ItemHeights::new(width * aspect[i], 4.0 + 16.0 * caption_lines[i] as f64)
        })
        .expect("valid layout inputs");

    println!("content_size={:?}", packer.content_size());
    println!("column_heights={:?}", packer.column_heights());

    let viewport = Rect::new(0.0, 300.0, 400.0, 200.0);
    for g in packer.query(viewport) {
        println!(
            "item={} column={} rect={:?} photo={:?}",
            g.index,
            g.column,
            g.rect,
            g.photo_rect()
        );
    }
}
