//! User defaults for conversion options.

use crate::{BASE_DIR, CLIOptions};
use dirs::config_dir;
use log::{debug, info, warn};
use maze::glam::IVec2;
use maze::{ConvertOptions, MapStyle};
use nanoserde::{DeRon, SerRon};
use std::{
    fs::{File, create_dir_all},
    io::{self, ErrorKind, Write},
    path::PathBuf,
};

const LOG_TAG: &str = "UserConfig";

fn get_cfg_file() -> Option<PathBuf> {
    let mut dir = config_dir()?;
    dir.push(BASE_DIR);
    dir.push("defaults.ron");
    Some(dir)
}

#[derive(Debug, Clone, PartialEq, SerRon, DeRon)]
pub struct UserConfig {
    pub offset_x: i32,
    pub offset_y: i32,
    pub width_pass: i32,
    pub width_pole: i32,
    pub height_floor: i32,
    pub height_ceiling: i32,
    pub texture_floor: String,
    pub texture_ceiling: String,
    pub texture_walls: String,
    pub map_name: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        let geometry = ConvertOptions::default();
        let style = MapStyle::default();
        Self {
            offset_x: geometry.offset.x,
            offset_y: geometry.offset.y,
            width_pass: geometry.pass_width,
            width_pole: geometry.pole_width,
            height_floor: style.floor_height,
            height_ceiling: style.ceiling_height,
            texture_floor: style.floor_texture,
            texture_ceiling: style.ceiling_texture,
            texture_walls: style.wall_texture,
            map_name: style.map_name,
        }
    }
}

impl UserConfig {
    /// `load` reads the saved defaults if there are any. A missing or broken
    /// file is not an error, the built in defaults are used instead
    pub fn load() -> Self {
        let Some(path) = get_cfg_file() else {
            warn!(target: LOG_TAG, "No user config dir, using built in defaults");
            return UserConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(buf) => UserConfig::from_ron(&buf).unwrap_or_else(|e| {
                warn!(target: LOG_TAG, "Could not deserialise {:?}: {}", path, e);
                UserConfig::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(target: LOG_TAG, "No saved defaults at {:?}", path);
                UserConfig::default()
            }
            Err(e) => {
                warn!(target: LOG_TAG, "Could not read {:?}: {}", path, e);
                UserConfig::default()
            }
        }
    }

    fn from_ron(buf: &str) -> Result<Self, nanoserde::DeRonErr> {
        let data = UserConfig::deserialize_ron(buf)?;
        info!(target: LOG_TAG, "Loaded user config file");
        Ok(data)
    }

    /// Save as the new defaults, returns where they went
    pub fn write(&self) -> io::Result<PathBuf> {
        let path = get_cfg_file()
            .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "No user config dir"))?;
        if let Some(dir) = path.parent() {
            create_dir_all(dir)?;
        }
        let mut file = File::create(&path)?;
        file.write_all(self.serialize_ron().as_bytes())?;
        info!(target: LOG_TAG, "Saved user config to {:?}", path);
        Ok(path)
    }

    /// Anything given on the command line wins over the saved defaults
    pub fn sync_cli(&mut self, cli: &CLIOptions) {
        debug!(target: LOG_TAG, "Checking CLI options");

        let numbers = [
            (cli.offset_x, &mut self.offset_x),
            (cli.offset_y, &mut self.offset_y),
            (cli.width_pass, &mut self.width_pass),
            (cli.width_pole, &mut self.width_pole),
            (cli.height_floor, &mut self.height_floor),
            (cli.height_ceiling, &mut self.height_ceiling),
        ];
        for (arg, value) in numbers {
            if let Some(v) = arg {
                *value = v;
            }
        }

        let names = [
            (&cli.texture_floor, &mut self.texture_floor),
            (&cli.texture_ceiling, &mut self.texture_ceiling),
            (&cli.texture_walls, &mut self.texture_walls),
            (&cli.map_name, &mut self.map_name),
        ];
        for (arg, value) in names {
            if let Some(v) = arg {
                v.clone_into(value);
            }
        }
    }
}

impl From<&UserConfig> for ConvertOptions {
    fn from(c: &UserConfig) -> Self {
        ConvertOptions {
            offset: IVec2::new(c.offset_x, c.offset_y),
            pass_width: c.width_pass,
            pole_width: c.width_pole,
        }
    }
}

impl From<&UserConfig> for MapStyle {
    fn from(c: &UserConfig) -> Self {
        MapStyle {
            map_name: c.map_name.clone(),
            floor_height: c.height_floor,
            ceiling_height: c.height_ceiling,
            floor_texture: c.texture_floor.clone(),
            ceiling_texture: c.texture_ceiling.clone(),
            wall_texture: c.texture_walls.clone(),
            ..MapStyle::default()
        }
    }
}
