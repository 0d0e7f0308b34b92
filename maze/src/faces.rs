//! Wall faces are found where a passage meets a wall. Along a row that is a
//! vertical wall face, along a column a horizontal one. Neighbouring rows with
//! a face on the same grid line join up in to one linedef.
//!
//! Linedefs have their front on the right hand side, so the direction of a
//! linedef is what says which side of the wall the maze is on:
//!
//! | Facing | Found where                       | Linedef runs |
//! |--------|-----------------------------------|--------------|
//! | West   | passage, then wall to its right   | down         |
//! | East   | wall, then passage to its right   | up           |
//! | South  | passage, then wall above it       | east         |
//! | North  | wall, then passage above it       | west         |

use crate::coords::Coordinates;
use crate::spans::CharClass;
use crate::vertex::VertexTable;
use log::debug;

/// A directed wall line, front side on the right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDef {
    pub start: usize,
    pub end: usize,
}

impl LineDef {
    pub fn new(start: usize, end: usize) -> LineDef {
        LineDef { start, end }
    }
}

/// Which way a wall face looks, out of the wall in to the passage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    West,
    East,
    South,
    North,
}

impl Facing {
    /// Detection order, also the order linedefs end up in
    pub const ALL: [Facing; 4] = [Facing::West, Facing::East, Facing::South, Facing::North];

    /// West and south faces are where a passage runs in to a wall, east and
    /// north where a wall gives way to a passage
    fn matches(self, before: char, after: char) -> bool {
        let before = CharClass::of(before).is_wall();
        let after = CharClass::of(after).is_wall();
        match self {
            Facing::West | Facing::South => !before && after,
            Facing::East | Facing::North => before && !after,
        }
    }

    /// West and east faces lie between columns, so are found scanning rows
    fn along_rows(self) -> bool {
        matches!(self, Facing::West | Facing::East)
    }

    /// Grid corners at the two ends of `run`, start first
    fn ends(self, run: &FaceRun) -> ((usize, usize), (usize, usize)) {
        let FaceRun { line, start, end } = *run;
        match self {
            Facing::West => ((line, end), (line, start)),
            Facing::East => ((line, start), (line, end)),
            Facing::South => ((start, line), (end, line)),
            Facing::North => ((end, line), (start, line)),
        }
    }
}

/// Consecutive rows (or columns) `start..end` with a face on grid line `line`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRun {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// Find every run of `facing` faces. `lines` all have the same length; the
/// runs come out ordered by grid line, then by position along it.
pub fn face_runs(lines: &[Vec<char>], facing: Facing) -> Vec<FaceRun> {
    let len = lines.first().map_or(0, Vec::len);
    let mut runs = Vec::new();

    for line in 1..len {
        let mut open: Option<usize> = None;
        for (j, chars) in lines.iter().enumerate() {
            let hit = facing.matches(chars[line - 1], chars[line]);
            match (hit, open) {
                (true, None) => open = Some(j),
                (false, Some(start)) => {
                    runs.push(FaceRun {
                        line,
                        start,
                        end: j,
                    });
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(start) = open {
            runs.push(FaceRun {
                line,
                start,
                end: lines.len(),
            });
        }
    }
    runs
}

/// Run all four face passes over the grid and return the linedefs, adding
/// their vertexes to `vertexes` as they are met. Overlapping faces are kept
/// as they are.
pub fn detect_walls(
    rows: &[Vec<char>],
    columns: &[Vec<char>],
    coords: &Coordinates,
    vertexes: &mut VertexTable,
) -> Vec<LineDef> {
    let mut linedefs = Vec::new();
    for facing in Facing::ALL {
        let lines = if facing.along_rows() { rows } else { columns };
        let runs = face_runs(lines, facing);
        debug!("{} {:?} facing walls", runs.len(), facing);

        for run in &runs {
            let ((x1, y1), (x2, y2)) = facing.ends(run);
            let v1 = vertexes.get_vertex_index(coords.point(x1, y1));
            let v2 = vertexes.get_vertex_index(coords.point(x2, y2));
            linedefs.push(LineDef::new(v1, v2));
        }
    }
    linedefs
}
