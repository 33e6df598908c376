//! Wall-row demonstration: a 10×10 grid with a wall segment spanning
//! x = 2..=6 at y = 4, searched corner to corner.

use gridway_core::{Grid, Point};
use gridway_paths::AStar;

fn main() {
    let mut grid = Grid::new(10, 10);
    for x in 2..=6 {
        grid.set_wall(Point::new(x, 4), true);
    }

    let from = Point::new(0, 0);
    let to = Point::new(9, 9);
    let mut astar = AStar::new(grid.bounds());
    let path = match astar.find_path(&grid, from, to) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("search failed: {err}");
            std::process::exit(1);
        }
    };

    if path.is_empty() {
        println!("No path found.");
        return;
    }

    println!("Path found:");
    for p in &path {
        println!("{p}");
    }

    // Overlay the path on the map.
    let mut rows: Vec<Vec<char>> = grid
        .to_string()
        .lines()
        .map(|line| line.chars().collect())
        .collect();
    for p in &path {
        rows[p.y as usize][p.x as usize] = '*';
    }
    rows[from.y as usize][from.x as usize] = 'S';
    rows[to.y as usize][to.x as usize] = 'E';

    println!();
    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }
}
