//! Non-uniform spacing of the grid lines. Passages are wide and walls are
//! thin, so the map position of a grid line depends on everything to the left
//! of (or below) it in *every* row (or column).

use crate::grid::Grid;
use crate::options::ConvertOptions;
use crate::spans::{CharClass, classify};
use glam::IVec2;

/// Width of a span measured along X
pub fn x_thickness(class: CharClass, opts: &ConvertOptions) -> i32 {
    match class {
        CharClass::Pole | CharClass::VerticalWall => opts.pole_width,
        _ => opts.pass_width,
    }
}

/// Height of a span measured along Y
pub fn y_thickness(class: CharClass, opts: &ConvertOptions) -> i32 {
    match class {
        CharClass::Pole | CharClass::HorizontalWall => opts.pole_width,
        _ => opts.pass_width,
    }
}

/// Map positions of the grid lines. `xpos[c]` is the left edge of column `c`
/// and `xpos[width]` the right edge of the last column, likewise for `ypos`
/// with rows from the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub xpos: Vec<i32>,
    pub ypos: Vec<i32>,
}

impl Coordinates {
    pub fn build(grid: &Grid, opts: &ConvertOptions) -> Coordinates {
        Coordinates {
            xpos: boundaries(grid.rows(), grid.width(), opts.offset.x, |c| {
                x_thickness(c, opts)
            }),
            ypos: boundaries(&grid.columns(), grid.height(), opts.offset.y, |c| {
                y_thickness(c, opts)
            }),
        }
    }

    /// Map position of the grid corner at column line `col`, row line `row`
    pub fn point(&self, col: usize, row: usize) -> IVec2 {
        IVec2::new(self.xpos[col], self.ypos[row])
    }
}

/// Each boundary is pushed out as far as the widest span that ends on it
/// needs, measured from where that span starts. A boundary nothing ends on
/// stays where the previous one is. Every span is `len` characters or less
/// and starts before it ends, so one pass left to right is enough.
fn boundaries<F>(lines: &[Vec<char>], len: usize, origin: i32, thickness: F) -> Vec<i32>
where
    F: Fn(CharClass) -> i32,
{
    let mut ending: Vec<Vec<(usize, i32)>> = vec![Vec::new(); len + 1];
    for line in lines {
        for span in classify(line) {
            ending[span.end].push((span.start, thickness(span.class)));
        }
    }

    let mut pos = Vec::with_capacity(len + 1);
    pos.push(origin);
    for i in 1..=len {
        let need = ending[i]
            .iter()
            .map(|&(start, size)| pos[start].saturating_add(size))
            .fold(pos[i - 1], i32::max);
        pos.push(need);
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(text: &str) -> Coordinates {
        Coordinates::build(&Grid::parse(text), &ConvertOptions::default())
    }

    #[test]
    fn single_cell() {
        let c = build("+-+\n| |\n+-+\n");
        assert_eq!(c.xpos, [0, 32, 160, 192]);
        assert_eq!(c.ypos, [0, 32, 160, 192]);
    }

    #[test]
    fn offset_seeds_first_boundary() {
        let opts = ConvertOptions {
            offset: IVec2::new(-64, 1000),
            ..ConvertOptions::default()
        };
        let c = Coordinates::build(&Grid::parse("+-+\n| |\n+-+\n"), &opts);
        assert_eq!(c.xpos, [-64, -32, 96, 128]);
        assert_eq!(c.ypos, [1000, 1032, 1160, 1192]);
    }

    #[test]
    fn wide_passage_forces_every_row() {
        // The top row is all poles, the passage below it still makes column 1
        // a full passage wide
        let c = build("+++\n| |\n");
        assert_eq!(c.xpos, [0, 32, 160, 192]);
    }

    #[test]
    fn runs_share_one_boundary() {
        // A three character run only constrains its end, the inner lines
        // carry the previous position
        let c = build("+---+\n");
        assert_eq!(c.xpos, [0, 32, 32, 32, 160, 192]);
        assert_eq!(c.ypos, [0, 32]);
    }

    #[test]
    fn repeat_build_is_identical() {
        let grid = Grid::parse("+--+--+\n|  |  |\n+  +--+\n| 1    |\n+------+\n");
        let opts = ConvertOptions::default();
        assert_eq!(
            Coordinates::build(&grid, &opts),
            Coordinates::build(&grid, &opts)
        );
    }

    #[test]
    fn never_steps_back() {
        // Column line 2 is only needed by a wall starting at 0, while column
        // line 1 was pushed out by the passage in the other row
        let grids = [
            " ||\n|| \n",
            "+-+-+\n| | |\n+ + +\n|   |\n+-+-+\n",
            "  :\n--+\n 5|\n",
        ];
        for text in grids {
            let c = build(text);
            assert!(c.xpos.windows(2).all(|w| w[0] <= w[1]), "{:?}", c.xpos);
            assert!(c.ypos.windows(2).all(|w| w[0] <= w[1]), "{:?}", c.ypos);
        }
    }

    #[test]
    fn empty_grid_is_just_the_offset() {
        let opts = ConvertOptions {
            offset: IVec2::new(7, 9),
            ..ConvertOptions::default()
        };
        let c = Coordinates::build(&Grid::parse(""), &opts);
        assert_eq!(c.xpos, [7]);
        assert_eq!(c.ypos, [9]);
    }
}
