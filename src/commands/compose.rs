use std::{
    io::{self, BufRead, BufWriter, Write},
    path::Path,
};

use anyhow::{bail, Context};
use fs_err as fs;

use crate::{
    composite::composite,
    config::{ComposeConfig, ConfigFile},
    glob::Glob,
    image::Image,
    options::{ComposeOptions, GlobalOptions},
    pack::pack_folder,
    thumbnails_dir::prepare_thumbnails_dir,
};

pub fn compose(global: GlobalOptions, options: ComposeOptions) -> anyhow::Result<()> {
    let config_file = ConfigFile::load(global.config.as_deref())?;

    let mut config = ComposeConfig::new(&config_file, &options.layout)?;
    config.assume_yes = options.yes;

    if options.no_thumbnails {
        config.thumbnails_dir = None;
    }

    let stdin = io::stdin();

    match compose_with_prompt(&config, stdin.lock(), io::stderr())? {
        ComposeOutcome::Written { size } => {
            log::info!("Composite is {}x{}", size.0, size.1);
            println!(
                "Masonry layout created and saved to {}",
                config.output.display()
            );
        }
        ComposeOutcome::Cancelled => println!("Operation cancelled."),
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComposeOutcome {
    Written { size: (u32, u32) },
    Cancelled,
}

fn compose_with_prompt<R: BufRead, W: Write>(
    config: &ComposeConfig,
    answers: R,
    prompt: W,
) -> anyhow::Result<ComposeOutcome> {
    if let Some(dir) = &config.thumbnails_dir {
        let proceed = prepare_thumbnails_dir(dir, config.assume_yes, answers, prompt)
            .with_context(|| format!("Couldn't set up thumbnails folder {}", dir.display()))?;

        if !proceed {
            return Ok(ComposeOutcome::Cancelled);
        }
    }

    let layout = pack_folder(config)?;

    if layout.is_empty() {
        let patterns: Vec<_> = config.patterns.iter().map(Glob::as_str).collect();

        bail!(
            "No images matching {} were found in {}",
            patterns.join(", "),
            config.input.display()
        );
    }

    let canvas = composite(&layout);
    write_png(&canvas, &config.output)?;

    Ok(ComposeOutcome::Written {
        size: canvas.size(),
    })
}

fn write_png(canvas: &Image, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = BufWriter::new(fs::File::create(path)?);
    canvas
        .encode_png(&mut file)
        .with_context(|| format!("Couldn't encode {}", path.display()))?;
    file.flush()?;

    log::debug!("Wrote {}", path.display());

    Ok(())
}
