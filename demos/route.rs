//! Load the sample symbolic map and print the cheapest route across it.
//!
//! Run: cargo run --bin route [from_x from_y to_x to_y]

use gridpath_core::Coord;
use gridpath_demos::{SAMPLE_HEIGHT, SAMPLE_MAP, SAMPLE_WIDTH, render, sample_table};
use gridpath_grid::Grid;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<i32> = std::env::args()
        .skip(1)
        .map(|a| a.parse())
        .collect::<Result<_, _>>()?;
    let (from, to) = match args.as_slice() {
        [] => (Coord::new(1, 1)?, Coord::new(10, 5)?),
        [fx, fy, tx, ty] => (Coord::new(*fx, *fy)?, Coord::new(*tx, *ty)?),
        _ => return Err("expected four coordinates: from_x from_y to_x to_y".into()),
    };

    let grid = Grid::from_symbolic(SAMPLE_MAP, SAMPLE_WIDTH, SAMPLE_HEIGHT, &sample_table())?;
    let route = grid.shortest_route(from, to)?;

    print!("{}", render(&grid, &route.nodes));
    println!("{} steps, cost {}", route.steps(), route.cost);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
