// Example: compare shortest-column packing with plain round-robin placement.
use column_packer::{ColumnPacker, ColumnStrategy, ItemHeights, LayoutConfig};

fn main() {
    let heights = [300.0, 80.0, 80.0, 80.0, 80.0, 80.0];
    let mut measure = |i: usize, _width: f64| ItemHeights::new(heights[i], 0.0);

    for strategy in [ColumnStrategy::Shortest, ColumnStrategy::RoundRobin] {
        let config = LayoutConfig::new(300.0, 2)
            .with_cell_padding(4.0)
            .with_strategy(strategy);
        let mut packer = ColumnPacker::new();
        packer
            .layout_with(heights.len(), config, &mut measure)
            .expect("valid layout inputs");

        let columns: Vec<usize> = packer.geometries().iter().map(|g| g.column).collect();
        println!(
            "{strategy:?}: columns={columns:?} content_height={}",
            packer.content_size().height
        );
    }
}
