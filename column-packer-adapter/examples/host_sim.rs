// Example: simulate a host view that scrolls, resizes and changes its column count.
use column_packer::ItemHeights;
use column_packer_adapter::{Align, Controller, ControllerOptions, Insets, Viewport};

fn main() {
    let photo_aspect = |i: usize| 0.6 + (i * 37 % 11) as f64 * 0.1;

    let options = ControllerOptions::new(60, 2)
        .with_cell_padding(6.0)
        .with_insets(Insets::new(8.0, 8.0))
        .with_overscan(120.0);
    let mut c = Controller::new(options, move |i: usize, width: f64| {
        ItemHeights::new(width * photo_aspect(i), 28.0)
    });

    // First frame: the host reports its bounds.
    c.set_viewport(Viewport::new(416.0, 800.0));
    let size = c.content_size().expect("valid layout inputs");
    println!("content_size={size:?}");

    let visible = c.visible().expect("valid layout inputs");
    println!("visible_at_top={:?}", visible.iter().map(|g| g.index).collect::<Vec<_>>());

    // User scrolls.
    let applied = c.set_scroll_offset(1500.0).expect("valid layout inputs");
    let visible = c.visible().expect("valid layout inputs");
    println!(
        "offset={applied} visible={:?}",
        visible.iter().map(|g| g.index).collect::<Vec<_>>()
    );

    // Rotation: wider bounds and three columns. Both changes invalidate the cached pass.
    c.set_viewport(Viewport::new(816.0, 600.0));
    c.set_column_count(3);
    let size = c.content_size().expect("valid layout inputs");
    println!("after resize: content_size={size:?}");

    let target = c.scroll_to_item(42, Align::Center).expect("valid layout inputs");
    println!("scroll_to_item(42)={target}");
}
