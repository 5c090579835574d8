//! Scatter random obstacles and weights over a grid and route across it.
//!
//! Run: cargo run --bin scatter [seed]

use gridpath_core::Coord;
use gridpath_demos::render;
use gridpath_grid::Grid;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const WIDTH: i32 = 40;
const HEIGHT: i32 = 16;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let seed = match std::env::args().nth(1) {
        Some(s) => s.parse()?,
        None => 42,
    };
    let mut rng = StdRng::seed_from_u64(seed);

    let mut grid = Grid::new(WIDTH, HEIGHT)?;
    for c in grid.bounds() {
        let weight = match rng.random_range(0..10) {
            0..=2 => 0,
            3 => rng.random_range(2..10),
            _ => 1,
        };
        grid.set_weight_for(c, weight)?;
    }

    let from = Coord::new(0, 0)?;
    let to = Coord::new(WIDTH - 1, HEIGHT - 1)?;
    for c in [from, to] {
        grid.unfill(c)?;
        grid.set_weight_for(c, 1)?;
    }

    match grid.shortest_route(from, to) {
        Ok(route) => {
            print!("{}", render(&grid, &route.nodes));
            println!("seed {seed}: {} steps, cost {}", route.steps(), route.cost);
        }
        Err(e) => {
            print!("{}", render(&grid, &[]));
            println!("seed {seed}: {e}");
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
