use std::path::PathBuf;

use structopt::StructOpt;

use crate::glob::Glob;

#[derive(Debug, StructOpt)]
#[structopt(about = "Packs a folder of images into a single masonry-style contact sheet")]
pub struct Options {
    #[structopt(flatten)]
    pub global: GlobalOptions,

    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub struct GlobalOptions {
    /// The path to a masonry.toml file to read defaults from. If not
    /// specified, masonry.toml in the current directory is used when it
    /// exists.
    #[structopt(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Scale every image in a folder to the same height and pack the results
    /// into a single PNG.
    Compose(ComposeOptions),

    /// Print where each image would be placed without writing anything.
    Plan(LayoutOptions),
}

/// Options that affect which images are picked up and how they're laid out.
#[derive(Debug, Default, StructOpt)]
pub struct LayoutOptions {
    /// The folder containing the images to pack. Defaults to the current
    /// directory.
    #[structopt(long, short)]
    pub input: Option<PathBuf>,

    /// The image to write. Inputs with the same file name are skipped so that
    /// re-running in the same folder doesn't pack the previous result.
    /// Defaults to output.png.
    #[structopt(long, short)]
    pub output: Option<PathBuf>,

    /// The widest the first row of images is allowed to be. Every later row is
    /// held to the width the first row ended up with. Defaults to 820.
    #[structopt(long)]
    pub max_width: Option<u32>,

    /// The height, in pixels, every image is scaled to. Defaults to 200.
    #[structopt(long)]
    pub height: Option<u32>,

    /// Which files in the input folder to pick up. Can be given more than
    /// once. Defaults to *.jpg and *.jpeg.
    #[structopt(long = "pattern", parse(try_from_str = Glob::new))]
    pub patterns: Vec<Glob>,

    /// Also pick up images in folders inside the input folder.
    #[structopt(long)]
    pub recursive: bool,
}

#[derive(Debug, StructOpt)]
pub struct ComposeOptions {
    #[structopt(flatten)]
    pub layout: LayoutOptions,

    /// Remove an existing thumbnails folder without asking first.
    #[structopt(long, short)]
    pub yes: bool,

    /// Don't save the scaled thumbnails to disk.
    #[structopt(long)]
    pub no_thumbnails: bool,
}
