//! Turns a maze drawn in ASCII in to map geometry.
//!
//! ```text,ignore
//! +--+--+
//! |  |  |      `-` horizontal wall     `+` pole (corner)
//! +  +  +      `|` `:` vertical wall   digits: a thing of that type
//! | 1   |      anything else is open floor
//! +-----+
//! ```
//!
//! Passages are `pass_width` map units across and walls/poles `pole_width`,
//! so the grid is squashed and stretched in to a non-uniform one (see
//! [`coords`]). Walls are then traced where floor meets wall (see [`faces`])
//! and numbers become things (see [`things`]).
//!
//! Everything is built by [`MazeMap::build`] in one go and then written out as
//! a UDMF map with [`MazeMap::write_wad`].

pub mod coords;
pub mod faces;
pub mod grid;
mod options;
pub mod spans;
pub mod things;
pub mod vertex;

pub use coords::Coordinates;
pub use faces::{Facing, LineDef};
pub use glam;
pub use grid::Grid;
pub use options::{ConvertOptions, MapStyle};
pub use things::Thing;
pub use vertex::VertexTable;

use log::debug;
use std::io::{self, Seek, Write};
use wad::{TextMap, UdmfLineDef, UdmfSector, UdmfSideDef, UdmfThing, UdmfVertex};

/// The geometry of one converted maze
#[derive(Debug, Clone)]
pub struct MazeMap {
    pub coords: Coordinates,
    pub vertexes: VertexTable,
    pub linedefs: Vec<LineDef>,
    pub things: Vec<Thing>,
}

impl MazeMap {
    pub fn build(grid: &Grid, opts: &ConvertOptions) -> MazeMap {
        let columns = grid.columns();
        let coords = Coordinates::build(grid, opts);
        debug!(
            "Grid is {}x{}, map spans {:?} to {:?}",
            grid.width(),
            grid.height(),
            coords.point(0, 0),
            coords.point(grid.width(), grid.height())
        );

        let mut vertexes = VertexTable::new();
        let linedefs = faces::detect_walls(grid.rows(), &columns, &coords, &mut vertexes);
        let things = things::extract_things(grid.rows(), &coords);

        MazeMap {
            coords,
            vertexes,
            linedefs,
            things,
        }
    }

    /// Every linedef fronts on the one sidedef, which faces the one sector
    pub fn to_textmap(&self, style: &MapStyle) -> TextMap {
        TextMap {
            things: self
                .things
                .iter()
                .map(|t| UdmfThing::new(t.pos.x, t.pos.y, style.thing_angle, t.kind))
                .collect(),
            vertexes: self
                .vertexes
                .vertexes()
                .iter()
                .map(|v| UdmfVertex::new(v.x, v.y))
                .collect(),
            linedefs: self
                .linedefs
                .iter()
                .map(|l| UdmfLineDef::new(l.start, l.end, 0))
                .collect(),
            sidedefs: vec![UdmfSideDef::new(0, &style.wall_texture)],
            sectors: vec![UdmfSector::new(
                style.floor_height,
                style.ceiling_height,
                &style.floor_texture,
                &style.ceiling_texture,
                style.light_level,
            )],
            ..TextMap::default()
        }
    }

    /// Write the map as a PWAD, returns the number of bytes written
    pub fn write_wad<W: Write + Seek>(&self, out: &mut W, style: &MapStyle) -> io::Result<u64> {
        wad::write_udmf_map(out, &style.map_name, &self.to_textmap(style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use std::collections::HashSet;
    use std::io::Cursor;
    use wad::WadData;

    const MAZE: &str = "\
+--+--+--+
|     |  |
+--+  +  +
|  1     |
+  +--+--+
|  :   23|
+--+-----+
";

    #[test]
    fn corner_case() {
        let map = MazeMap::build(&Grid::parse("+-+\n| |\n+-+\n"), &ConvertOptions::default());
        assert_eq!(map.coords.xpos, [0, 32, 160, 192]);
        assert_eq!(map.coords.ypos, [0, 32, 160, 192]);
        assert_eq!(map.vertexes.len(), 4);
        assert_eq!(map.linedefs.len(), 4);
        assert!(map.things.is_empty());
    }

    #[test]
    fn all_open_grid() {
        let map = MazeMap::build(&Grid::parse("..1..\n.....\n"), &ConvertOptions::default());
        assert!(map.linedefs.is_empty());
        assert!(map.vertexes.is_empty());
        assert_eq!(map.things.len(), 1);
    }

    #[test]
    fn empty_grid() {
        let opts = ConvertOptions {
            offset: IVec2::new(64, -64),
            ..ConvertOptions::default()
        };
        let map = MazeMap::build(&Grid::parse(""), &opts);
        assert_eq!(map.coords.xpos, [64]);
        assert_eq!(map.coords.ypos, [-64]);
        assert!(map.linedefs.is_empty());
        assert!(map.things.is_empty());
    }

    #[test]
    fn maze_geometry() {
        let map = MazeMap::build(&Grid::parse(MAZE), &ConvertOptions::default());
        assert!(map.coords.xpos.windows(2).all(|w| w[0] <= w[1]));
        assert!(map.coords.ypos.windows(2).all(|w| w[0] <= w[1]));

        // Every vertex is used and none are repeated
        let used: HashSet<usize> = map
            .linedefs
            .iter()
            .flat_map(|l| [l.start, l.end])
            .collect();
        assert_eq!(used.len(), map.vertexes.len());
        let distinct: HashSet<IVec2> = map.vertexes.vertexes().iter().copied().collect();
        assert_eq!(distinct.len(), map.vertexes.len());

        // No linedef is a point
        for l in &map.linedefs {
            assert_ne!(
                map.vertexes.vertexes()[l.start],
                map.vertexes.vertexes()[l.end]
            );
        }

        let kinds: Vec<u32> = map.things.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, [23, 1]);
    }

    #[test]
    fn closed_room_loops() {
        // Around a closed room every vertex starts exactly one linedef and
        // ends exactly one
        let map = MazeMap::build(
            &Grid::parse("+---+\n|   |\n|   |\n+---+\n"),
            &ConvertOptions::default(),
        );
        let mut starts: Vec<usize> = map.linedefs.iter().map(|l| l.start).collect();
        let mut ends: Vec<usize> = map.linedefs.iter().map(|l| l.end).collect();
        starts.sort_unstable();
        ends.sort_unstable();
        assert_eq!(starts, ends);
        assert_eq!(map.linedefs.len(), 4);
    }

    #[test]
    fn textmap_from_map() {
        let map = MazeMap::build(&Grid::parse("+-+\n|7|\n+-+\n"), &ConvertOptions::default());
        let style = MapStyle::default();
        let textmap = map.to_textmap(&style);

        assert_eq!(textmap.things, [UdmfThing::new(96.0, 96.0, 90, 7)]);
        assert_eq!(textmap.vertexes.len(), 4);
        assert_eq!(textmap.linedefs.len(), 4);
        assert!(textmap.linedefs.iter().all(|l| l.front_sidedef == 0));
        assert_eq!(textmap.sidedefs, [UdmfSideDef::new(0, "STARTAN1")]);
        assert_eq!(
            textmap.sectors,
            [UdmfSector::new(0, 144, "FLOOR0_1", "F_SKY1", 192)]
        );
    }

    #[test]
    fn known_good_wads() {
        let grid = Grid::parse(include_str!("../testdata/rooms.txt"));
        let map = MazeMap::build(&grid, &ConvertOptions::default());
        assert_eq!(
            map.coords.xpos,
            [0, 32, 32, 160, 192, 192, 320, 352, 352, 480, 512]
        );
        assert_eq!(map.coords.ypos, [0, 32, 160, 192, 320, 352, 480, 512]);
        let mut out = Cursor::new(Vec::new());
        map.write_wad(&mut out, &MapStyle::default()).unwrap();
        assert_eq!(out.into_inner(), include_bytes!("../testdata/rooms.wad"));

        // Ragged rows are filled out with poles
        let grid = Grid::parse(include_str!("../testdata/ragged.txt"));
        let opts = ConvertOptions {
            offset: IVec2::new(-256, 64),
            pass_width: 64,
            pole_width: 16,
        };
        let style = MapStyle {
            ceiling_height: 256,
            wall_texture: "BRICK7".to_owned(),
            ..MapStyle::default()
        };
        let map = MazeMap::build(&grid, &opts);
        assert_eq!(map.vertexes.len(), 14);
        assert_eq!(map.linedefs.len(), 13);
        let mut out = Cursor::new(Vec::new());
        map.write_wad(&mut out, &style).unwrap();
        assert_eq!(out.into_inner(), include_bytes!("../testdata/ragged.wad"));
    }

    #[test]
    fn written_wad() {
        let map = MazeMap::build(&Grid::parse(MAZE), &ConvertOptions::default());
        let style = MapStyle {
            map_name: "MAP02".to_owned(),
            wall_texture: "BRICK1".to_owned(),
            ..MapStyle::default()
        };
        let mut out = Cursor::new(Vec::new());
        let size = map.write_wad(&mut out, &style).unwrap();

        let bytes = out.into_inner();
        assert_eq!(size as usize, bytes.len());
        assert_eq!(
            u32::from_le_bytes(bytes[44..48].try_into().unwrap()) as usize,
            bytes.len()
        );
        assert_eq!(
            u32::from_le_bytes(bytes[32..36].try_into().unwrap()) as usize,
            bytes.len() - 60
        );

        let wad = WadData::from_bytes(bytes).unwrap();
        let text = std::str::from_utf8(wad.lump("TEXTMAP").unwrap()).unwrap();
        let count = |kw: &str| text.lines().filter(|l| l.starts_with(kw)).count();
        assert_eq!(count("thing {"), map.things.len());
        assert_eq!(count("vertex {"), map.vertexes.len());
        assert_eq!(count("linedef {"), map.linedefs.len());
        assert_eq!(count("sidedef {"), 1);
        assert_eq!(count("sector {"), 1);
        assert!(text.contains("texturemiddle = \"BRICK1\";"));
        assert!(wad.lump("MAP02").is_some());
    }
}
