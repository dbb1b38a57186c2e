use std::{cell::RefCell, path::PathBuf, rc::Rc};

use clap::Parser;
use log::info;
use thiserror::Error;

use gridmaze::{
    controller::MazeController,
    gameboard::algorithms::{GeneratorKind, PassageStats},
    logging,
    settings::{Settings, SettingsError},
    solvers::{SolveOutcome, SolverKind},
    view::TerminalView,
};

#[derive(Debug, Error)]
enum AppError {
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

#[derive(Parser, Debug)]
#[clap(version, about, name = "gridmaze")]
struct Args {
    #[clap(short, long, help = "Passage cells per side, the grid is 2 * size + 1 wide")]
    size: Option<usize>,
    #[clap(short, long, help = "Maze generator")]
    #[arg(value_enum)]
    generator: Option<GeneratorKind>,
    #[clap(long, help = "Path solver")]
    #[arg(value_enum)]
    solver: Option<SolverKind>,
    #[clap(long, help = "Seed for reproducible mazes")]
    seed: Option<u64>,
    #[clap(short, long, help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Only generate, don't solve")]
    no_solve: bool,
    #[clap(long, action, help = "Print without colors")]
    plain: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeatable")]
    verbose: u8,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    better_panic::install();
    logging::init(logging::level_from_verbosity(args.verbose));

    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.show_config_path {
        println!("{}", settings_path.display());
        return Ok(());
    }

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    let mut settings = Settings::load(&settings_path)?;
    if let Some(size) = args.size {
        settings.cells_per_side = size;
    }
    if let Some(generator) = args.generator {
        settings.generator = generator;
    }
    if let Some(solver) = args.solver {
        settings.solver = solver;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    let settings = settings.validate()?;

    let mut controller = MazeController::from_settings(&settings);
    let view = Rc::new(RefCell::new(TerminalView::new()));
    controller.model_mut().add_listener(Box::new(view.clone()));

    controller.generate(settings.generator);
    controller.place_default_endpoints();

    let outcome = (!args.no_solve).then(|| controller.solve(settings.solver));

    let view = view.borrow();
    print!("{}", view.render(!args.plain));

    if let Some(stats) = controller.model().matrix().map(PassageStats::of) {
        info!("Passage graph: {:?}", stats);
    }
    println!(
        "{0}x{0} grid, generator {1}, {2} cell updates",
        controller.size(),
        controller.generator(),
        view.updates()
    );

    match outcome {
        Some(SolveOutcome::PathFound(result)) => println!(
            "{}: path of {} steps, {} cells expanded",
            controller.solver(),
            result.length,
            result.expanded
        ),
        Some(SolveOutcome::NoPathFound) => println!("{}: no path", controller.solver()),
        None => {}
    }

    Ok(())
}
