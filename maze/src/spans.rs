/// What a character stands for when measuring the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `-`
    HorizontalWall,
    /// `+`, a corner. Always one character wide
    Pole,
    /// `|` or `:`
    VerticalWall,
    /// Anything else: passages, digits, decoration
    Open,
}

impl CharClass {
    pub fn of(c: char) -> CharClass {
        match c {
            '-' => CharClass::HorizontalWall,
            '+' => CharClass::Pole,
            '|' | ':' => CharClass::VerticalWall,
            _ => CharClass::Open,
        }
    }

    pub fn is_wall(self) -> bool {
        self != CharClass::Open
    }
}

/// A maximal run of one `CharClass` within a row or column, `end` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub class: CharClass,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(class: CharClass, start: usize, end: usize) -> Span {
        Span { class, start, end }
    }
}

/// Split a line in to spans covering all of it, left to right. Runs of the
/// same class merge except poles, each `+` is a span of its own.
pub fn classify(line: &[char]) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for (i, &c) in line.iter().enumerate() {
        let class = CharClass::of(c);
        if let Some(last) = spans.last_mut() {
            if last.class == class && class != CharClass::Pole {
                last.end = i + 1;
                continue;
            }
        }
        spans.push(Span::new(class, i, i + 1));
    }
    spans
}
