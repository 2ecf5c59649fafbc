//! Robot-frame and maze-frame directions.
//!
//! Both frames are quarter-turn rings, so converting between them is a
//! rotation. No position is ever involved.

/// A direction relative to the robot's current heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relative {
    Ahead,
    Behind,
    Left,
    Right,
}

impl Relative {
    /// All relative directions, in the order candidates are enumerated.
    pub const ALL: [Relative; 4] = [Self::Ahead, Self::Left, Self::Right, Self::Behind];

    /// Clockwise quarter turns from straight ahead.
    const fn quarter_turns(self) -> u8 {
        match self {
            Self::Ahead => 0,
            Self::Right => 1,
            Self::Behind => 2,
            Self::Left => 3,
        }
    }

    const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Self::Ahead,
            1 => Self::Right,
            2 => Self::Behind,
            _ => Self::Left,
        }
    }

    /// Position of this direction in [`Relative::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Ahead => 0,
            Self::Left => 1,
            Self::Right => 2,
            Self::Behind => 3,
        }
    }
}

/// An absolute compass heading in the maze frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Self::North, Self::East, Self::South, Self::West];

    const fn quarter_turns(self) -> u8 {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// The heading rotated by 180 degrees.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// The absolute heading reached by turning towards `relative`.
    #[must_use]
    pub const fn turn(self, relative: Relative) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + relative.quarter_turns())
    }

    /// The relative direction that points at `target` when facing `self`.
    #[must_use]
    pub const fn relative_to(self, target: Heading) -> Relative {
        Relative::from_quarter_turns(target.quarter_turns() + 4 - self.quarter_turns())
    }

    /// Glyph used by the terminal viewer.
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::North => '^',
            Self::East => '>',
            Self::South => 'v',
            Self::West => '<',
        }
    }
}
