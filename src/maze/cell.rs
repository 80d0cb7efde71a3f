use crossterm::style::Color;

use std::fmt;

/// Terrain kind of a cell. Entering a cell costs its terrain penalty.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    #[default]
    Default,
    Grass,
    Mud,
    Water,
}

impl Terrain {
    pub const ALL: [Terrain; 4] = [Terrain::Default, Terrain::Grass, Terrain::Mud, Terrain::Water];

    /// Cost of entering a cell with this terrain.
    pub const fn penalty(self) -> u32 {
        match self {
            Terrain::Default => 0,
            Terrain::Grass => 1,
            Terrain::Mud => 5,
            Terrain::Water => 10,
        }
    }

    /// Map a uniform draw in `[0, 100)` to a terrain kind.
    /// 10% grass, 10% mud, 10% water, the rest default.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..10 => Terrain::Grass,
            10..20 => Terrain::Mud,
            20..30 => Terrain::Water,
            _ => Terrain::Default,
        }
    }

    /// Background color used when drawing the cell.
    pub fn color(self) -> Color {
        match self {
            Terrain::Default => Color::Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
            Terrain::Grass => Color::Rgb {
                r: 144,
                g: 238,
                b: 144,
            },
            Terrain::Mud => Color::Rgb {
                r: 139,
                g: 119,
                b: 101,
            },
            Terrain::Water => Color::Rgb {
                r: 100,
                g: 149,
                b: 237,
            },
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terrain::Default => write!(f, "Default"),
            Terrain::Grass => write!(f, "Grass"),
            Terrain::Mud => write!(f, "Mud"),
            Terrain::Water => write!(f, "Water"),
        }
    }
}

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Order in which neighbors are reported: top, right, bottom, left.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Side::Top => 0b0001,
            Side::Right => 0b0010,
            Side::Bottom => 0b0100,
            Side::Left => 0b1000,
        }
    }
}

/// A maze cell: four wall flags and a terrain kind.
/// Identity lives in the coordinate the cell is stored at, not in the cell itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: u8,
    terrain: Terrain,
}

impl Cell {
    /// A cell with all four walls standing.
    pub const CLOSED: Cell = Cell {
        walls: 0b1111,
        terrain: Terrain::Default,
    };

    pub fn with_terrain(terrain: Terrain) -> Self {
        Cell {
            terrain,
            ..Cell::CLOSED
        }
    }

    pub fn has_wall(&self, side: Side) -> bool {
        self.walls & side.bit() != 0
    }

    pub fn set_wall(&mut self, side: Side, present: bool) {
        if present {
            self.walls |= side.bit();
        } else {
            self.walls &= !side.bit();
        }
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn set_terrain(&mut self, terrain: Terrain) {
        self.terrain = terrain;
    }

    pub fn penalty(&self) -> u32 {
        self.terrain.penalty()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::CLOSED
    }
}
