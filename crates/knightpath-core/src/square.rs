//! Board coordinates: [`Square`] and the knight [`Offset`] table.
//!
//! A square is a file letter (`'a'..='h'`) paired with a rank (`1..=8`).
//! Offsets are the eight fixed knight displacement vectors; their order is
//! load-bearing, see [`Offset::KNIGHT`].

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A board coordinate: file letter plus rank number.
///
/// Construction is unvalidated (like a raw point); use [`is_valid`](Square::is_valid)
/// or let [`checked_add`](Square::checked_add) filter derived squares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub file: char,
    pub rank: i32,
}

impl Square {
    /// Create a new square.
    #[inline]
    pub const fn new(file: char, rank: i32) -> Self {
        Self { file, rank }
    }

    /// Whether the square lies on the 8×8 board.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.file >= 'a' && self.file <= 'h' && self.rank >= 1 && self.rank <= 8
    }

    /// Apply a displacement, returning `None` when the result leaves the
    /// board. This is the only bounds filter derived squares ever need.
    #[inline]
    pub fn checked_add(self, off: Offset) -> Option<Square> {
        let file = self.file as i32 + off.df;
        let rank = self.rank + off.dr;
        if file < 'a' as i32 || file > 'h' as i32 || !(1..=8).contains(&rank) {
            return None;
        }
        Some(Square::new(file as u8 as char, rank))
    }
}

// --- trait impls for Square ---

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    /// File-major, rank-minor — the same order [`all_squares`] yields.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.file.cmp(&other.file).then(self.rank.cmp(&other.rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseSquareError::Length(s.len()));
        };
        if !('a'..='h').contains(&file) {
            return Err(ParseSquareError::File(file));
        }
        let Some(rank @ 1..=8) = rank.to_digit(10).map(|d| d as i32) else {
            return Err(ParseSquareError::Rank(rank));
        };
        Ok(Square::new(file, rank))
    }
}

/// Errors that can occur when parsing a square from text like `"b2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseSquareError {
    /// Input is not exactly two characters.
    Length(usize),
    /// The file character is outside `'a'..='h'`.
    File(char),
    /// The rank character is not a digit in `1..=8`.
    Rank(char),
}

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(n) => write!(f, "square text must be two characters, got {n}"),
            Self::File(ch) => write!(f, "file \u{201c}{ch}\u{201d} is outside a..h"),
            Self::Rank(ch) => write!(f, "rank \u{201c}{ch}\u{201d} is outside 1..8"),
        }
    }
}

impl std::error::Error for ParseSquareError {}

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A (Δfile, Δrank) displacement vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub df: i32,
    pub dr: i32,
}

impl Offset {
    /// Create a new offset.
    #[inline]
    pub const fn new(df: i32, dr: i32) -> Self {
        Self { df, dr }
    }

    /// The eight knight moves, in canonical order.
    ///
    /// This order determines neighbor-visit order during search and therefore
    /// which of several equally short paths wins the tie-break. Do not
    /// reorder.
    pub const KNIGHT: [Offset; 8] = [
        Offset::new(1, 2),
        Offset::new(1, -2),
        Offset::new(-1, 2),
        Offset::new(-1, -2),
        Offset::new(2, 1),
        Offset::new(2, -1),
        Offset::new(-2, 1),
        Offset::new(-2, -1),
    ];
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.df, self.dr)
    }
}

// ---------------------------------------------------------------------------
// Enumeration
// ---------------------------------------------------------------------------

/// All 64 squares in file-major, rank-minor order: a1, a2, …, a8, b1, …, h8.
pub fn all_squares() -> impl Iterator<Item = Square> {
    ('a'..='h').flat_map(|file| (1..=8).map(move |rank| Square::new(file, rank)))
}
