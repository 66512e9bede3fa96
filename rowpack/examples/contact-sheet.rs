use std::num::NonZeroU32;

use rowpack::{sort_widest_first, RowPacker};

fn main() {
    env_logger::init();

    // Thumbnails that were all scaled to 200px tall.
    let mut inputs: Vec<(u32, u32)> = [133, 300, 356, 267, 150, 200, 356]
        .iter()
        .map(|&width| (width, 200))
        .collect();

    sort_widest_first(&mut inputs);

    let packer = RowPacker::new(NonZeroU32::new(820).unwrap());
    let layout = packer.pack(inputs);

    println!(
        "Canvas: {:?} (asked for at most {}px)",
        layout.size(),
        packer.max_width()
    );

    for (item, rect) in layout.placements() {
        println!("{:?} at {:?}", item, rect.pos);
    }

    for (index, row) in layout.into_rows().into_iter().enumerate() {
        println!("Row {}: {:?}", index, row.into_items());
    }
}
