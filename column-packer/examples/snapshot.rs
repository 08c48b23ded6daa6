// Example: capture a finished pass and restore it into a fresh packer.
use column_packer::{ColumnPacker, ItemHeights};

fn main() {
    let mut packer = ColumnPacker::new();
    packer
        .layout(12, 600.0, 3, 8.0, |i, width| {
            ItemHeights::new(width * (0.5 + (i % 4) as f64 * 0.25), 24.0)
        })
        .expect("valid layout inputs");

    // Persist this (e.g. with `feature = "serde"`) and restore it on the next launch.
    let Some(snapshot) = packer.snapshot() else {
        return;
    };
    println!("snapshot items={} size={:?}", snapshot.geometries.len(), snapshot.content_size());

    let mut restored = ColumnPacker::new();
    restored.restore(snapshot).expect("snapshot taken from a valid pass");
    println!(
        "restored items={} first={:?}",
        restored.len(),
        restored.geometry(0)
    );
}
