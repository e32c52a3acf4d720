use colored::Colorize;
use rand::Rng;

use navigator::algorithms::pathfinding::PathfindingAlgorithm;
use navigator::grid::Cell;
use navigator::simulation::NavigationDriver;

/// one text frame: obstacles red, path yellow, robot green, goal blue
pub fn frame<P: PathfindingAlgorithm, R: Rng>(driver: &NavigationDriver<P, R>) -> String {
    let grid = driver.grid();
    let mut out = String::new();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = Cell::new(row, col);
            let glyph = if cell == driver.robot() {
                "R".green().bold()
            } else if cell == driver.goal() {
                "G".blue().bold()
            } else if grid.is_blocked(cell).unwrap_or(false) {
                "#".red()
            } else if driver.path().contains(cell) {
                "*".yellow()
            } else {
                ".".normal()
            };
            out.push_str(&format!("{glyph} "));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "robot {} goal {} | {}",
        driver.robot(),
        driver.goal(),
        driver.state().status()
    ));
    out
}
