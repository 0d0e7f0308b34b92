use argh::FromArgs;
use log::LevelFilter;
use std::path::PathBuf;

/// Convert a maze drawn in ASCII to a UDMF map in a PWAD
#[derive(Debug, Clone, FromArgs)]
pub struct CLIOptions {
    /// ASCII maze file, `-` to read standard input
    #[argh(positional, default = "String::from(\"-\")")]
    pub input: String,
    /// WAD file to write. Without it only the map statistics are shown
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,
    /// verbose level: off, error, warn, info, debug, trace
    #[argh(option)]
    pub verbose: Option<LevelFilter>,
    /// offset X coordinate
    #[argh(option)]
    pub offset_x: Option<i32>,
    /// offset Y coordinate
    #[argh(option)]
    pub offset_y: Option<i32>,
    /// width of passages
    #[argh(option)]
    pub width_pass: Option<i32>,
    /// width of poles and walls
    #[argh(option)]
    pub width_pole: Option<i32>,
    /// height of floor
    #[argh(option)]
    pub height_floor: Option<i32>,
    /// height of ceiling
    #[argh(option)]
    pub height_ceiling: Option<i32>,
    /// texture name for floor
    #[argh(option)]
    pub texture_floor: Option<String>,
    /// texture name for ceiling
    #[argh(option)]
    pub texture_ceiling: Option<String>,
    /// texture name for walls
    #[argh(option)]
    pub texture_walls: Option<String>,
    /// name of the map lump, e.g. MAP01 or E1M1
    #[argh(option)]
    pub map_name: Option<String>,
    /// store the settings used for this run as the new defaults
    #[argh(switch)]
    pub save_defaults: bool,
}
