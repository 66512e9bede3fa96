mod commands;
mod composite;
mod config;
mod discover;
mod glob;
mod image;
mod options;
mod pack;
mod thumbnail;
mod thumbnails_dir;

use std::process;

use env_logger::Env;
use structopt::StructOpt;

use crate::options::{Options, Subcommand};

fn main() {
    env_logger::from_env(Env::default().default_filter_or("warn")).init();

    let options = Options::from_args();

    match run(options) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {:?}", err);
            process::exit(1);
        }
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    match options.command {
        Subcommand::Compose(compose_options) => {
            commands::compose(options.global, compose_options)?;
        }
        Subcommand::Plan(layout_options) => {
            commands::plan(options.global, layout_options)?;
        }
    }

    Ok(())
}
