//! The traversability/weight [`Grid`].
//!
//! A grid stores, per cell, whether it is *filled* (cannot be entered) and
//! its terrain weight (the cost of entering it). It keeps no graph around:
//! every query builds a fresh [`Graph`] from the current state, so routes
//! always reflect the latest edits.

use gridpath_core::{Bounds, BoundsIter, Coord, GridConfig, PathError, Result};
use gridpath_graph::{Graph, Route};

use crate::weights::WeightTable;

/// A rectangular map of fill states and terrain weights.
///
/// Cells start unfilled with weight 0 (free to enter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    config: GridConfig,
    bounds: Bounds,
    filled: Vec<bool>,
    weights: Vec<i32>,
}

impl Grid {
    /// Create a `width` x `height` grid with the default size limits.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::with_config(width, height, GridConfig::default())
    }

    /// Create a `width` x `height` grid with explicit size limits.
    pub fn with_config(width: i32, height: i32, config: GridConfig) -> Result<Self> {
        let mut grid = Self {
            config,
            bounds: Bounds::default(),
            filled: Vec::new(),
            weights: Vec::new(),
        };
        grid.resize(width, height)?;
        Ok(grid)
    }

    /// Build a grid from a symbolic tile map, resolving each mark through
    /// `table`. See [`WeightTable::resolve`].
    pub fn from_symbolic(map: &str, width: i32, height: i32, table: &WeightTable) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        let weights = table.resolve(map, grid.len())?;
        grid.apply_weights(&weights)?;
        Ok(grid)
    }

    #[inline]
    pub fn config(&self) -> GridConfig {
        self.config
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Change the grid size. All cells are regenerated unfilled with
    /// weight 0. On error the grid is left untouched.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        if !self.config.allows(width, height) {
            return Err(PathError::InvalidSize { width, height });
        }
        self.bounds = Bounds::new(width, height)?;
        self.clear();
        log::debug!("grid resized to {}", self.bounds);
        Ok(())
    }

    /// Unfill every cell and reset every weight to 0.
    pub fn clear(&mut self) {
        let len = self.bounds.len();
        self.filled = vec![false; len];
        self.weights = vec![0; len];
    }

    // -----------------------------------------------------------------------
    // Cells
    // -----------------------------------------------------------------------

    /// Row-major iterator over every cell.
    pub fn coords(&self) -> BoundsIter {
        self.bounds.iter()
    }

    /// The cell at column `x`, row `y`.
    pub fn coord_at(&self, x: i32, y: i32) -> Result<Coord> {
        let c = Coord::new(x, y)?;
        self.index(c)?;
        Ok(c)
    }

    /// The cells of row `y`, left to right. Empty if out of range.
    pub fn row(&self, y: i32) -> Vec<Coord> {
        self.bounds.row(y)
    }

    /// The cells of column `x`, top to bottom. Empty if out of range.
    pub fn column(&self, x: i32) -> Vec<Coord> {
        self.bounds.column(x)
    }

    #[inline]
    fn index(&self, c: Coord) -> Result<usize> {
        self.bounds.index(c).ok_or(PathError::OutOfBounds(c))
    }

    // -----------------------------------------------------------------------
    // Traversability
    // -----------------------------------------------------------------------

    /// Mark `c` as untraversable.
    pub fn fill(&mut self, c: Coord) -> Result<()> {
        let i = self.index(c)?;
        self.filled[i] = true;
        Ok(())
    }

    /// Mark `c` as traversable.
    pub fn unfill(&mut self, c: Coord) -> Result<()> {
        let i = self.index(c)?;
        self.filled[i] = false;
        Ok(())
    }

    /// Whether `c` cannot be entered. Cells outside the grid count as filled.
    pub fn is_filled(&self, c: Coord) -> bool {
        self.bounds.index(c).is_none_or(|i| self.filled[i])
    }

    /// Fill every cell of row `y`.
    pub fn fill_row(&mut self, y: i32) -> Result<()> {
        self.coord_at(0, y)?;
        for c in self.row(y) {
            self.fill(c)?;
        }
        Ok(())
    }

    /// Fill every cell of column `x`.
    pub fn fill_column(&mut self, x: i32) -> Result<()> {
        self.coord_at(x, 0)?;
        for c in self.column(x) {
            self.fill(c)?;
        }
        Ok(())
    }

    /// Fill cells from a presence matrix indexed `rows[y][x]`: entries equal
    /// to 1 fill their cell, any other value leaves the cell as is.
    ///
    /// The matrix must have exactly `height` rows of `width` entries.
    pub fn fill_vector(&mut self, rows: &[Vec<i32>]) -> Result<()> {
        let (width, height) = (self.width() as usize, self.height() as usize);
        if rows.len() != height {
            return Err(PathError::DimensionMismatch {
                expected: height,
                found: rows.len(),
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != width) {
            return Err(PathError::DimensionMismatch {
                expected: width,
                found: bad.len(),
            });
        }
        for (c, &present) in self.bounds.iter().zip(rows.iter().flatten()) {
            if present == 1 {
                self.fill(c)?;
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Weights
    // -----------------------------------------------------------------------

    /// Set the cost of entering `c`. A weight of 0 or less also fills the
    /// cell, which is how numeric weight tables mark walls.
    pub fn set_weight_for(&mut self, c: Coord, value: i32) -> Result<()> {
        let i = self.index(c)?;
        self.weights[i] = value;
        if value <= 0 {
            self.filled[i] = true;
        }
        Ok(())
    }

    /// The cost of entering `c`; 0 for cells outside the grid.
    pub fn weight_for(&self, c: Coord) -> i32 {
        self.bounds.index(c).map_or(0, |i| self.weights[i])
    }

    /// Every cell with its weight, row-major.
    pub fn weights(&self) -> impl Iterator<Item = (Coord, i32)> + '_ {
        self.bounds.iter().zip(self.weights.iter().copied())
    }

    /// Assign weights to every cell from a row-major slice, through
    /// [`set_weight_for`](Self::set_weight_for).
    ///
    /// Fails with [`PathError::DimensionMismatch`] without touching the
    /// grid if the slice does not have one entry per cell.
    pub fn apply_weights(&mut self, weights: &[i32]) -> Result<()> {
        if weights.len() != self.len() {
            return Err(PathError::DimensionMismatch {
                expected: self.len(),
                found: weights.len(),
            });
        }
        for (c, &w) in self.bounds.iter().zip(weights) {
            self.set_weight_for(c, w)?;
        }
        Ok(())
    }

    /// Reset the grid and load weights from a row-major digit string, one
    /// character per cell. Digits give the weight; any other character
    /// gives weight 0 and therefore a filled cell. Line breaks and tabs are
    /// ignored.
    pub fn load_weight_string(&mut self, weight_map: &str) -> Result<()> {
        let weights = WeightTable::new().resolve(weight_map, self.len())?;
        self.clear();
        self.apply_weights(&weights)
    }

    // -----------------------------------------------------------------------
    // Paths
    // -----------------------------------------------------------------------

    /// Build the movement graph for the current state.
    ///
    /// Every cell becomes a node. Each unfilled cell gets an edge to each
    /// unfilled 4-directional neighbour, weighted with the weight of the
    /// neighbour: entering a cell costs that cell's weight whatever the
    /// direction of travel. Negative weights count as 0.
    pub fn make_graph(&self) -> Graph {
        let mut graph = Graph::new();
        for c in self.coords() {
            graph.add_node(c);
        }
        for c in self.coords() {
            if self.is_filled(c) {
                continue;
            }
            for n in c.neighbors_4() {
                if self.is_filled(n) {
                    continue;
                }
                let weight = u32::try_from(self.weight_for(n)).unwrap_or(0);
                graph.add_edge(c, n, weight);
            }
        }
        log::debug!(
            "graph built from {} grid: {} nodes, {} edges",
            self.bounds,
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    /// Alias for [`make_graph`](Self::make_graph).
    pub fn graph(&self) -> Graph {
        self.make_graph()
    }

    /// The cheapest route from `from` to `to`, both included.
    pub fn shortest_path(&self, from: Coord, to: Coord) -> Result<Vec<Coord>> {
        Ok(self.shortest_route(from, to)?.nodes)
    }

    /// Like [`shortest_path`](Self::shortest_path), also reporting the
    /// total weight of the cells entered.
    pub fn shortest_route(&self, from: Coord, to: Coord) -> Result<Route> {
        self.index(from)?;
        self.index(to)?;
        let mut graph = self.make_graph();
        graph.set_weights(self.weights());
        graph.shortest_route(from, to)
    }
}
