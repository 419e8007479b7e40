//! The [`Cell`] type and its mutually exclusive [`Role`].

/// Sentinel distance meaning "not reached from the start".
///
/// Larger than any finite path cost (paths are bounded by grid area with
/// unit edges), and never produced as a real distance.
pub const INFINITY: i32 = i32::MAX;

/// The role a cell plays on the board.
///
/// A cell holds exactly one role at a time; placing a new role replaces
/// whatever the cell had.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Plain traversable cell.
    #[default]
    Open,
    /// The search origin. At most one per grid.
    Start,
    /// The search destination. At most one per grid.
    Target,
    /// An obstacle; never traversed and never start or target.
    Wall,
}

/// A single grid cell.
///
/// `visited` and `on_path` are owned by the search/replay subsystem: the
/// grid's edit operations never set them, and only clear them where the
/// edit semantics demand it (reset, target moves).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub role: Role,
    /// Set once the search dequeued and processed this cell.
    pub visited: bool,
    /// Set during path reconstruction only.
    pub on_path: bool,
    /// Best known path cost from the start, [`INFINITY`] until relaxed.
    pub distance: i32,
}

impl Cell {
    /// Set the role (builder).
    #[inline]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Set the distance (builder).
    #[inline]
    pub const fn with_distance(mut self, distance: i32) -> Self {
        self.distance = distance;
        self
    }

    /// Whether this cell blocks traversal.
    #[inline]
    pub const fn is_wall(&self) -> bool {
        matches!(self.role, Role::Wall)
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self {
            role: Role::Open,
            visited: false,
            on_path: false,
            distance: INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_open_and_unreached() {
        let c = Cell::default();
        assert_eq!(c.role, Role::Open);
        assert!(!c.visited);
        assert!(!c.on_path);
        assert_eq!(c.distance, INFINITY);
    }

    #[test]
    fn builders() {
        let c = Cell::default().with_role(Role::Start).with_distance(0);
        assert_eq!(c.role, Role::Start);
        assert_eq!(c.distance, 0);
        assert!(Cell::default().with_role(Role::Wall).is_wall());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let c = Cell::default().with_role(Role::Target);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
