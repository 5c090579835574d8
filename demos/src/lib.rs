//! Shared helpers for the gridpath demos.

use std::collections::BTreeSet;

use gridpath_core::Coord;
use gridpath_grid::{Grid, WeightTable};

/// The sample map used by the `route` demo.
pub const SAMPLE_MAP: &str = "\
~~~~~~~~~~~~
~....^^....~
~.~~~.^..~.~
~.~.....~~.~
~.~.^^^.~..~
~...~~~....~
~~~~~~~~~~~~";

pub const SAMPLE_WIDTH: i32 = 12;
pub const SAMPLE_HEIGHT: i32 = 7;

/// Marks of [`SAMPLE_MAP`]: water is impassable, hills cost more than
/// plains.
pub fn sample_table() -> WeightTable {
    [('~', 0), ('.', 1), ('^', 4)].into_iter().collect()
}

/// Render `grid` as text: `#` for filled cells, `*` for route cells, and
/// the weight digit (or `+` above 9) elsewhere.
pub fn render(grid: &Grid, route: &[Coord]) -> String {
    let on_route: BTreeSet<Coord> = route.iter().copied().collect();
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for y in 0..grid.height() {
        for c in grid.row(y) {
            let ch = if on_route.contains(&c) {
                '*'
            } else if grid.is_filled(c) {
                '#'
            } else {
                u32::try_from(grid.weight_for(c))
                    .ok()
                    .and_then(|w| char::from_digit(w, 10))
                    .unwrap_or('+')
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_map_loads() {
        let grid =
            Grid::from_symbolic(SAMPLE_MAP, SAMPLE_WIDTH, SAMPLE_HEIGHT, &sample_table()).unwrap();
        let from = Coord::new(1, 1).unwrap();
        let to = Coord::new(10, 5).unwrap();
        let path = grid.shortest_path(from, to).unwrap();
        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&to));
    }

    #[test]
    fn render_marks_cells() {
        let mut grid = Grid::new(3, 1).unwrap();
        grid.apply_weights(&[1, 0, 12]).unwrap();
        let route = [Coord::new(0, 0).unwrap()];
        assert_eq!(render(&grid, &route), "*#+\n");
    }
}
