use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use stepstar_core::options::DEFAULT_MAX_EXPANSIONS;
use stepstar_core::search::find_path;
use stepstar_core::{Engine, Grid, GridPos, Heuristic, MovementMode, PathResult, SearchOptions};

#[derive(Parser, Debug)]
#[command(name = "stepstar", version, about = "Find a route across a grid file with the caller-driven A* engine")]
pub struct Args {
    /// Grid file: JSON grid spec or ASCII drawing ('#' = obstacle)
    #[arg(long = "grid", value_name = "PATH")]
    pub grid: PathBuf,

    /// Start cell as x,y
    #[arg(long = "start", value_name = "X,Y", allow_hyphen_values = true)]
    pub start: GridPos,

    /// Goal cell as x,y
    #[arg(long = "goal", value_name = "X,Y", allow_hyphen_values = true)]
    pub goal: GridPos,

    /// Distance estimate: manhattan, chebyshev, octile, euclidean, zero
    #[arg(long = "heuristic", value_name = "NAME", default_value_t = Heuristic::Chebyshev)]
    pub heuristic: Heuristic,

    /// Override the grid's movement mode: cardinal or octile
    #[arg(long = "movement", value_name = "MODE")]
    pub movement: Option<MovementMode>,

    /// Give up after this many expansions
    #[arg(long = "max-expansions", value_name = "N", default_value_t = DEFAULT_MAX_EXPANSIONS)]
    pub max_expansions: u64,

    /// Print the result as JSON
    #[arg(long = "json", conflicts_with = "draw")]
    pub json: bool,

    /// Draw the grid with the route marked
    #[arg(long = "draw")]
    pub draw: bool,
}

pub struct Report {
    pub result: PathResult<GridPos>,
    pub text: String,
}

pub fn load_grid(args: &Args) -> Result<Grid> {
    let grid = Grid::load(&args.grid).with_context(|| format!("loading grid {}", args.grid.display()))?;
    Ok(match args.movement {
        Some(mode) => grid.with_movement(mode),
        None => grid,
    })
}

pub fn run(args: &Args) -> Result<Report> {
    let grid = load_grid(args)?;
    for (name, pos) in [("start", args.start), ("goal", args.goal)] {
        anyhow::ensure!(grid.in_bounds(pos), "{name} {pos} is outside the {}x{} grid", grid.width(), grid.height());
    }
    info!(width = grid.width(), height = grid.height(), movement = %grid.movement(), heuristic = %args.heuristic, "searching");

    let mut engine = Engine::new(args.heuristic);
    let options = SearchOptions::with_max_expansions(args.max_expansions);
    let result = find_path(&mut engine, &grid, args.start, args.goal, &options)?;
    info!(expanded = result.expanded, found = result.is_found(), "search finished");

    let text = if args.json {
        serde_json::to_string_pretty(&result)?
    } else {
        render(&grid, &result, args.draw)
    };
    Ok(Report { result, text })
}

fn render(grid: &Grid, result: &PathResult<GridPos>, draw: bool) -> String {
    let mut out = String::new();
    match &result.path {
        Some(path) => {
            if draw {
                out.push_str(&grid.render_path(path));
            }
            let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "cost {} (expanded {}): {}", result.cost, result.expanded, cells.join(" -> "));
        }
        None => {
            if draw {
                out.push_str(&grid.render_path(&[]));
            }
            let reason = result.reason.as_deref().unwrap_or("no-path");
            let _ = writeln!(out, "no route: {reason} (expanded {})", result.expanded);
        }
    }
    out
}
