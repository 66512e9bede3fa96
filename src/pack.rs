use anyhow::Context;
use rowpack::{sort_widest_first, Layout, RowPacker};

use crate::{
    config::ComposeConfig,
    discover::find_inputs,
    thumbnail::{make_thumbnails, Thumbnail},
};

/// Finds every input described by `config`, scales them to thumbnails and
/// packs those into rows.
///
/// Thumbnails are saved into `config.thumbnails_dir` along the way when it's
/// set; the folder is expected to be ready already.
pub fn pack_folder(config: &ComposeConfig) -> anyhow::Result<Layout<Thumbnail>> {
    let inputs = find_inputs(
        &config.input,
        &config.patterns,
        config.recursive,
        &config.output,
    )
    .with_context(|| format!("Couldn't search {} for images", config.input.display()))?;

    let mut thumbnails = make_thumbnails(
        &inputs,
        config.thumbnail_height,
        config.thumbnails_dir.as_deref(),
    );

    sort_widest_first(&mut thumbnails);

    let layout = RowPacker::new(config.max_width).pack(thumbnails);

    log::info!(
        "Packed {} thumbnails into {} rows, {}x{}",
        layout.item_count(),
        layout.rows().len(),
        layout.width(),
        layout.height()
    );

    Ok(layout)
}
