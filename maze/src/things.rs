use crate::coords::Coordinates;
use glam::DVec2;
use log::warn;

/// A map object placed by a number in the maze. The number is the DoomEd
/// type of the thing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thing {
    pub pos: DVec2,
    pub kind: u32,
}

/// Every run of decimal digits becomes a `Thing` centred on the run
pub fn extract_things(rows: &[Vec<char>], coords: &Coordinates) -> Vec<Thing> {
    let mut things = Vec::new();
    for (r, row) in rows.iter().enumerate() {
        let mut c = 0;
        while c < row.len() {
            if !row[c].is_ascii_digit() {
                c += 1;
                continue;
            }
            let start = c;
            while c < row.len() && row[c].is_ascii_digit() {
                c += 1;
            }
            let pos = DVec2::new(
                (coords.xpos[start] as f64 + coords.xpos[c] as f64) / 2.0,
                (coords.ypos[r] as f64 + coords.ypos[r + 1] as f64) / 2.0,
            );
            things.push(Thing {
                pos,
                kind: thing_kind(&row[start..c]),
            });
        }
    }
    things
}

/// Value of a run of ASCII digits, saturating at `u32::MAX`
fn thing_kind(digits: &[char]) -> u32 {
    digits
        .iter()
        .filter_map(|c| c.to_digit(10))
        .try_fold(0u32, |n, d| n.checked_mul(10)?.checked_add(d))
        .unwrap_or_else(|| {
            let digits: String = digits.iter().collect();
            warn!("Thing type {} is too large, using {}", digits, u32::MAX);
            u32::MAX
        })
}
