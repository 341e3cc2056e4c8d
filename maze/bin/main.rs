use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use log::{debug, info};
use serde::Serialize;

use maze::{
    load_maze, render_text, save_image, Config, Direction, Point, SolveError, Solver, Strategy,
};

#[derive(Parser)]
#[command(name = "maze", about = "Find a path from A to B through a text maze")]
struct Args {
    /// Maze file: `A` is the start, `B` the exit, spaces are open and anything else is a wall
    maze: PathBuf,

    /// Exploration order: stack (depth-first) or queue (breadth-first)
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// TOML file with search and render settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a picture of the solved maze to this file
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Also highlight explored cells in the picture
    #[arg(long)]
    show_explored: bool,

    /// Print a JSON report instead of the text rendering
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    strategy: Strategy,
    explored: usize,
    actions: Option<Vec<Direction>>,
    cells: Option<Vec<Point>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(strategy) = args.strategy {
        config.search.strategy = strategy;
    }
    if let Some(image) = args.image {
        config.render.image = Some(image);
    }
    if args.show_explored {
        config.render.options.show_explored = true;
    }
    debug!("{:?}", config);

    let maze = load_maze(&args.maze)?;
    info!(
        "loaded {} ({}x{})",
        args.maze.display(),
        maze.rows(),
        maze.columns()
    );

    let mut solver = Solver::new(&maze, config.search.strategy);

    if !args.json {
        println!("Maze:");
        print!("{}", maze);
        println!("Solving...");
    }

    let result = solver.solve().map(|_| ());

    if args.json {
        let solution = solver.solution();
        let error = result.as_ref().err().map(|_| "no solution");
        let report = Report {
            strategy: solver.strategy(),
            explored: solver.num_explored(),
            actions: solution.map(|s| s.actions().collect()),
            cells: solution.map(|s| s.cells().collect()),
            error,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else {
        println!("States Explored: {}", solver.num_explored());
        if solver.solution().is_some() {
            println!("Solution:");
            print!(
                "{}",
                render_text(&maze, solver.solution(), Some(solver.explored()))
            );
        }
    }

    if let Some(path) = &config.render.image {
        save_image(
            path,
            &maze,
            solver.solution(),
            Some(solver.explored()),
            &config.render.options,
        )?;
        info!("wrote {}", path.display());
    }

    match result {
        Ok(()) => Ok(()),
        Err(SolveError::NoSolution { explored }) => Err(anyhow!(
            "No solution: the exit cannot be reached ({} states explored)",
            explored
        )),
        Err(e) => Err(e.into()),
    }
}
