/// Short rows are filled out with poles so every row is the same width
const PAD: char = '+';

/// The maze as a rectangle of characters. Row 0 is the *bottom* of the maze so
/// that increasing row index is increasing Y in the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Grid {
    /// Parse ASCII art as it reads on screen: the first line is the top of the
    /// maze. Trailing whitespace on each line is dropped.
    pub fn parse(text: &str) -> Grid {
        Grid::from_rows(text.lines().rev().map(str::trim_end))
    }

    /// Build from rows that are already in bottom-up order
    pub fn from_rows<I, S>(rows: I) -> Grid
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|r| r.as_ref().chars().collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in rows.iter_mut() {
            row.resize(width, PAD);
        }
        Grid { rows, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// The grid transposed: column `c` indexed by row
    pub fn columns(&self) -> Vec<Vec<char>> {
        (0..self.width)
            .map(|c| self.rows.iter().map(|row| row[c]).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;

    #[test]
    fn bottom_row_first() {
        let grid = Grid::parse("top\nmid\nbot\n");
        let rows: Vec<String> = grid.rows().iter().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, ["bot", "mid", "top"]);
    }

    #[test]
    fn short_rows_padded_with_poles() {
        let grid = Grid::parse("+--+   \n|\n+--+\r\n");
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.rows()[1], ['|', '+', '+', '+']);
    }

    #[test]
    fn columns_are_transposed_rows() {
        let grid = Grid::from_rows(["ab", "cd", "ef"]);
        assert_eq!(grid.columns(), [['a', 'c', 'e'], ['b', 'd', 'f']]);
    }

    #[test]
    fn empty_input() {
        let grid = Grid::parse("");
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert!(grid.columns().is_empty());
    }
}
