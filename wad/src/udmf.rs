//! UDMF ("Universal Doom Map Format") records. Each record is written as a
//! single line of the form `keyword { field = value; ... }`.
//!
//! Only the fields a flat, single sector map needs are carried. Everything else
//! is left to the UDMF defaults of the target port.

use std::fmt;
use std::io::{self, Write};

/// Namespace the records are written for
pub const ZDOOM_NAMESPACE: &str = "zdoom";

/// Every skill, mode, and class flag a thing can be present in. A `Thing` is
/// always written with all of them set so it appears regardless of how the map
/// is played.
const THING_PRESENCE_FLAGS: [&str; 16] = [
    "skill1", "skill2", "skill3", "skill4", "skill5", "skill6", "skill7", "skill8", "single",
    "coop", "dm", "class1", "class2", "class3", "class4", "class5",
];

/// A `Thing` describes only the position, type, and angle. Spawn flags are
/// implicit (see `THING_PRESENCE_FLAGS`)
///
/// | Field | Data Type | Content                           |
/// |-------|-----------|-----------------------------------|
/// | x     |   float   | X Position                        |
/// | y     |   float   | Y Position                        |
/// | angle |   int     | Facing angle in degrees           |
/// | type  |   int     | DoomEd number of the thing        |
#[derive(Debug, Clone, PartialEq)]
pub struct UdmfThing {
    pub x: f64,
    pub y: f64,
    pub angle: i32,
    pub kind: u32,
}

impl UdmfThing {
    pub fn new(x: f64, y: f64, angle: i32, kind: u32) -> UdmfThing {
        UdmfThing { x, y, angle, kind }
    }
}

impl fmt::Display for UdmfThing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Things sit on half-units at most, one decimal is exact
        write!(
            f,
            "thing {{ x = {:.1}; y = {:.1}; angle = {}; type = {};",
            self.x, self.y, self.angle, self.kind
        )?;
        for flag in THING_PRESENCE_FLAGS {
            write!(f, " {} = true;", flag)?;
        }
        write!(f, " }}")
    }
}

/// A `Vertex` is the basic struct used for any type of coordinate
/// in the map. Map units are integral so the fraction is always `.0`
///
/// | Field | Data Type | Content      |
/// |-------|-----------|--------------|
/// | x     |   float   | X Coordinate |
/// | y     |   float   | Y Coordinate |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UdmfVertex {
    pub x: i32,
    pub y: i32,
}

impl UdmfVertex {
    pub fn new(x: i32, y: i32) -> UdmfVertex {
        UdmfVertex { x, y }
    }
}

impl fmt::Display for UdmfVertex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "vertex {{ x = {}.0; y = {}.0; }}", self.x, self.y)
    }
}

/// Each linedef represents a line from one of the VERTEXES to another.
///
/// | Field     | Data Type | Content                          |
/// |-----------|-----------|----------------------------------|
/// | v1        |   int     | Start vertex                     |
/// | v2        |   int     | End vertex                       |
/// | sidefront |   int     | Front (right) sidedef            |
/// | blocking  |   bool    | Blocks players and monsters      |
///
/// A Linedef will always have at least one side. This first side is referred to
/// as either front or right. If you imagine a linedef starting from the bottom
/// of the screen travelling upwards then the right side of this line is the first
/// valid side (and is the front).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdmfLineDef {
    /// The line starts from this point
    pub start_vertex: usize,
    /// The line ends at this point
    pub end_vertex: usize,
    /// Index of the front (right) `SideDef` for this line
    pub front_sidedef: usize,
    pub blocking: bool,
}

impl UdmfLineDef {
    pub fn new(start_vertex: usize, end_vertex: usize, front_sidedef: usize) -> UdmfLineDef {
        UdmfLineDef {
            start_vertex,
            end_vertex,
            front_sidedef,
            blocking: true,
        }
    }
}

impl fmt::Display for UdmfLineDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "linedef {{ v1 = {}; v2 = {}; sidefront = {}; blocking = {}; }}",
            self.start_vertex, self.end_vertex, self.front_sidedef, self.blocking
        )
    }
}

/// A `SideDef` is the texturing for one side of a `LineDef`. Only the middle
/// texture is of use on one-sided lines
///
/// | Field         | Data Type | Content                        |
/// |---------------|-----------|--------------------------------|
/// | sector        |   int     | Sector this side faces in to   |
/// | texturemiddle |   string  | Name of the middle texture     |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdmfSideDef {
    pub sector: usize,
    pub middle_tex: String,
}

impl UdmfSideDef {
    pub fn new(sector: usize, middle_tex: &str) -> UdmfSideDef {
        UdmfSideDef {
            sector,
            middle_tex: middle_tex.to_owned(),
        }
    }
}

impl fmt::Display for UdmfSideDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "sidedef {{ sector = {}; texturemiddle = \"{}\"; }}",
            self.sector, self.middle_tex
        )
    }
}

/// A `Sector` is an area surrounded by lines, with set ceiling and floor
/// textures/heights with light level
///
/// | Field          | Data Type | Content          |
/// |----------------|-----------|------------------|
/// | heightfloor    |   int     | Floor height     |
/// | heightceiling  |   int     | Ceiling height   |
/// | texturefloor   |   string  | Floor flat       |
/// | textureceiling |   string  | Ceiling flat     |
/// | lightlevel     |   int     | Light level      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdmfSector {
    pub floor_height: i32,
    pub ceil_height: i32,
    pub floor_tex: String,
    pub ceil_tex: String,
    pub light_level: i32,
}

impl UdmfSector {
    pub fn new(
        floor_height: i32,
        ceil_height: i32,
        floor_tex: &str,
        ceil_tex: &str,
        light_level: i32,
    ) -> UdmfSector {
        UdmfSector {
            floor_height,
            ceil_height,
            floor_tex: floor_tex.to_owned(),
            ceil_tex: ceil_tex.to_owned(),
            light_level,
        }
    }
}

impl fmt::Display for UdmfSector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "sector {{ heightfloor = {}; heightceiling = {}; texturefloor = \"{}\"; textureceiling = \"{}\"; lightlevel = {}; }}",
            self.floor_height, self.ceil_height, self.floor_tex, self.ceil_tex, self.light_level
        )
    }
}

/// The full contents of a `TEXTMAP` lump, in the order it is written
#[derive(Debug, Clone, PartialEq)]
pub struct TextMap {
    pub namespace: String,
    pub things: Vec<UdmfThing>,
    pub vertexes: Vec<UdmfVertex>,
    pub linedefs: Vec<UdmfLineDef>,
    pub sidedefs: Vec<UdmfSideDef>,
    pub sectors: Vec<UdmfSector>,
}

impl Default for TextMap {
    fn default() -> Self {
        Self {
            namespace: ZDOOM_NAMESPACE.to_owned(),
            things: Vec::new(),
            vertexes: Vec::new(),
            linedefs: Vec::new(),
            sidedefs: Vec::new(),
            sectors: Vec::new(),
        }
    }
}

impl fmt::Display for TextMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "namespace = \"{}\";", self.namespace)?;
        for thing in &self.things {
            writeln!(f, "{}", thing)?;
        }
        for vertex in &self.vertexes {
            writeln!(f, "{}", vertex)?;
        }
        for linedef in &self.linedefs {
            writeln!(f, "{}", linedef)?;
        }
        for sidedef in &self.sidedefs {
            writeln!(f, "{}", sidedef)?;
        }
        for sector in &self.sectors {
            writeln!(f, "{}", sector)?;
        }
        Ok(())
    }
}

impl TextMap {
    /// Write the lump text. The lump is plain ASCII, anything else (such as a
    /// texture name with non-ASCII characters) is refused before any byte is
    /// written.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<usize> {
        let text = self.to_string();
        if !text.is_ascii() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "TEXTMAP must be ASCII",
            ));
        }
        out.write_all(text.as_bytes())?;
        Ok(text.len())
    }
}
