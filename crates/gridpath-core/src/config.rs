//! Grid limits.

use crate::geom::COORD_MAX;

/// Default maximum grid width, matching the map editor's limit.
pub const DEFAULT_MAX_WIDTH: i32 = 50;

/// Default maximum grid height.
pub const DEFAULT_MAX_HEIGHT: i32 = 50;

/// Size limits applied when a grid is created or resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GridConfig {
    pub max_width: i32,
    pub max_height: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl GridConfig {
    /// Whether a `width` x `height` grid is allowed.
    ///
    /// Limits above `COORD_MAX + 1` are capped there, since larger grids
    /// would contain cells no [`Coord`](crate::Coord) can name.
    pub fn allows(&self, width: i32, height: i32) -> bool {
        let max_w = self.max_width.min(COORD_MAX + 1);
        let max_h = self.max_height.min(COORD_MAX + 1);
        (0..=max_w).contains(&width) && (0..=max_h).contains(&height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let cfg = GridConfig::default();
        assert!(cfg.allows(0, 0));
        assert!(cfg.allows(50, 50));
        assert!(!cfg.allows(51, 10));
        assert!(!cfg.allows(10, -1));
    }

    #[test]
    fn limits_are_capped_by_coordinate_space() {
        let cfg = GridConfig {
            max_width: 1000,
            max_height: 1000,
        };
        assert!(cfg.allows(101, 101));
        assert!(!cfg.allows(102, 1));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: GridConfig = serde_json::from_str(r#"{"max_width": 20}"#).unwrap();
        assert_eq!(cfg.max_width, 20);
        assert_eq!(cfg.max_height, DEFAULT_MAX_HEIGHT);
    }
}
