use clap::Parser;
use log::info;
use std::path::PathBuf;
use tracklister::tracklist::errors::Result;

use crate::creator;

#[derive(Parser)]
#[command(name = "tracklister")]
#[command(version, about = "Build a tracklist from a list of track drops", long_about = None)]
struct Cli {
    /// Drop list with one "Artist - Track" record per line [default: drops.txt]
    #[arg(short, long, env = "TRACKLIST_INPUT")]
    input: Option<PathBuf>,

    /// Where to write the tracklist [default: tracklist.txt]
    #[arg(short, long, env = "TRACKLIST_OUTPUT")]
    output: Option<PathBuf>,

    /// Seed for shuffling transitions, taken from the clock when omitted
    #[arg(short, long, env = "TRACKLIST_SEED")]
    seed: Option<u64>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    info!("Building config ...");
    let config = creator::ConfigBuilder::new()
        .input(cli.input)
        .output(cli.output)
        .seed(cli.seed)
        .build();

    let creator = creator::Creator::new(config);
    creator.create()?;
    Ok(())
}
