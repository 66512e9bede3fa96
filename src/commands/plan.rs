use std::io::{self, Write};

use rowpack::Layout;

use crate::{
    config::{ComposeConfig, ConfigFile},
    options::{GlobalOptions, LayoutOptions},
    pack::pack_folder,
    thumbnail::Thumbnail,
};

pub fn plan(global: GlobalOptions, options: LayoutOptions) -> anyhow::Result<()> {
    let config_file = ConfigFile::load(global.config.as_deref())?;

    let mut config = ComposeConfig::new(&config_file, &options)?;
    config.thumbnails_dir = None;

    let layout = pack_folder(&config)?;

    let stdout = io::stdout();
    write_plan(&layout, stdout.lock())?;

    Ok(())
}

fn write_plan<W: Write>(layout: &Layout<Thumbnail>, mut output: W) -> io::Result<()> {
    writeln!(
        output,
        "Canvas: {}x{} ({} images in {} rows)",
        layout.width(),
        layout.height(),
        layout.item_count(),
        layout.rows().len()
    )?;

    for (thumbnail, rect) in layout.placements() {
        writeln!(
            output,
            "  ({}, {}) {}x{} {}",
            rect.pos.0,
            rect.pos.1,
            rect.size.0,
            rect.size.1,
            thumbnail.name()
        )?;
    }

    output.flush()
}
