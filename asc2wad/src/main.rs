//! `asc2wad` converts a maze drawn in ASCII to a playable UDMF map.
//!
//! ```text,ignore
//! asc2wad maze.txt -o maze.wad --width-pass 96 --texture-walls BRICK1
//! ```

mod cli;
mod config;

use cli::*;
use log::{LevelFilter, info};
use maze::{Grid, MazeMap};
use simplelog::TermLogger;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use crate::config::UserConfig;

const BASE_DIR: &str = "asc2wad/";
const STDIN: &str = "-";

fn main() -> Result<(), Box<dyn Error>> {
    let options: CLIOptions = argh::from_env();

    TermLogger::init(
        options.verbose.unwrap_or(LevelFilter::Info),
        simplelog::ConfigBuilder::default()
            .set_time_level(LevelFilter::Trace)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let mut user_config = UserConfig::load();
    user_config.sync_cli(&options);
    if options.save_defaults {
        user_config.write()?;
    }

    let text = read_input(&options.input)?;
    let grid = Grid::parse(&text);
    let map = MazeMap::build(&grid, &(&user_config).into());
    info!(
        "{} vertices, {} linedefs, {} things.",
        map.vertexes.len(),
        map.linedefs.len(),
        map.things.len()
    );

    if let Some(path) = &options.output {
        let mut file = BufWriter::new(File::create(path)?);
        let size = map.write_wad(&mut file, &(&user_config).into())?;
        file.flush()?;
        info!("Written {} bytes to WAD file {:?}.", size, path);
    }

    Ok(())
}

/// The whole maze as text, from a file or `-` for stdin
fn read_input(input: &str) -> io::Result<String> {
    if input == STDIN {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
    }
}
