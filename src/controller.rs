use log::{debug, info, warn};

use crate::{
    dims::Indices,
    gameboard::{
        algorithms::{
            random_from_seed, DepthFirstSearch, GeneratorKind, MazeGenerator, Random, RndKruskals,
        },
        CellState, Model, ParseStateError,
    },
    registry::Registry,
    settings::Settings,
    solvers::{AStarSolver, BfsSolver, MazeSolver, SolveOutcome, SolverKind},
};

/// Builds a solver working on the given model.
pub type SolverProvider = for<'a> fn(&'a mut Model) -> Box<dyn MazeSolver + 'a>;

fn bfs_solver(model: &mut Model) -> Box<dyn MazeSolver + '_> {
    Box::new(BfsSolver::new(model))
}

fn astar_solver(model: &mut Model) -> Box<dyn MazeSolver + '_> {
    Box::new(AStarSolver::new(model))
}

/// Turns pointer input and menu choices into model updates and algorithm runs.
///
/// A view is attached through [`MazeController::model_mut`] and
/// [`Model::add_listener`]; the controller itself never renders.
pub struct MazeController {
    model: Model,
    size: usize,
    dragging: bool,
    selected_state: CellState,
    generators: Registry<Box<dyn MazeGenerator>, GeneratorKind>,
    solvers: Registry<SolverProvider, SolverKind>,
    generator: GeneratorKind,
    solver: SolverKind,
    rng: Random,
}

impl MazeController {
    /// A grid of `cells_per_side` passage cells per side, with walls between and around
    /// them, so `2 * cells_per_side + 1` cells wide.
    pub fn new(cells_per_side: usize, seed: Option<u64>) -> Self {
        let size = 2 * cells_per_side + 1;

        let mut generators: Registry<Box<dyn MazeGenerator>, GeneratorKind> = Registry::new();
        generators.register(GeneratorKind::DepthFirstSearch, Box::new(DepthFirstSearch));
        generators.register(GeneratorKind::Kruskal, Box::new(RndKruskals));

        let mut solvers: Registry<SolverProvider, SolverKind> = Registry::new();
        solvers.register(SolverKind::Bfs, bfs_solver as SolverProvider);
        solvers.register(SolverKind::AStar, astar_solver as SolverProvider);

        Self {
            model: Model::new(size),
            size,
            dragging: false,
            selected_state: CellState::UnvisitedCell,
            generators,
            solvers,
            generator: GeneratorKind::default(),
            solver: SolverKind::default(),
            rng: random_from_seed(seed),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            generator: settings.generator,
            solver: settings.solver,
            ..Self::new(settings.cells_per_side, settings.seed)
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn selected_state(&self) -> CellState {
        self.selected_state
    }

    /// The generator used by the last [`MazeController::generate`] call, or the configured
    /// one before that.
    pub fn generator(&self) -> GeneratorKind {
        self.generator
    }

    pub fn solver(&self) -> SolverKind {
        self.solver
    }

    pub fn generator_kinds(&self) -> impl Iterator<Item = GeneratorKind> + '_ {
        self.generators.keys().copied()
    }

    pub fn solver_kinds(&self) -> impl Iterator<Item = SolverKind> + '_ {
        self.solvers.keys().copied()
    }

    pub fn press(&mut self) {
        self.dragging = true;
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Pointer moved over a cell; paints only while dragging.
    pub fn hover(&mut self, x: i32, y: i32) {
        self.toggle_state(x, y, false);
    }

    /// Pointer pressed on a cell; always paints.
    pub fn press_at(&mut self, x: i32, y: i32) {
        self.toggle_state(x, y, true);
    }

    fn toggle_state(&mut self, x: i32, y: i32, force: bool) {
        if !self.dragging && !force {
            return;
        }

        let Some(current) = self.model.get(Indices::new(x, y)) else {
            return;
        };
        if current.is_endpoint() {
            return;
        }

        if current != self.selected_state {
            self.change_state(x, y, self.selected_state);
        }
    }

    /// Writes `state` if the cell exists and holds something else.
    pub fn change_state(&mut self, x: i32, y: i32, state: CellState) -> bool {
        match self.model.get(Indices::new(x, y)) {
            Some(current) if current != state => self.model.update_model(x, y, state),
            _ => false,
        }
    }

    /// Writes `state` if the cell exists, even when it already holds it.
    pub fn init_state(&mut self, x: i32, y: i32, state: CellState) -> bool {
        if !self.model.is_in_bounds(Indices::new(x, y)) {
            return false;
        }
        self.model.update_model(x, y, state)
    }

    pub fn select_state(&mut self, name: &str) -> Result<CellState, ParseStateError> {
        let state = name.parse()?;
        debug!("Selected {}", state);
        self.selected_state = state;
        Ok(state)
    }

    /// Carves a fresh maze with the given generator.
    pub fn generate(&mut self, kind: GeneratorKind) {
        self.generator = kind;
        let Some(generator) = self.generators.get(&kind) else {
            warn!("No generator registered for {}", kind);
            return;
        };

        info!("Generating {0}x{0} maze with {1}", self.size, kind);
        generator.create(self.size, &mut self.model, &mut self.rng);
    }

    /// Runs the given solver from the begin cell. Without a begin cell there is nothing to
    /// solve.
    pub fn solve(&mut self, kind: SolverKind) -> SolveOutcome {
        self.solver = kind;
        let Some(begin) = self.model.begin() else {
            debug!("No begin cell set, not solving");
            return SolveOutcome::NoPathFound;
        };
        let Some(&provider) = self.solvers.get(&kind) else {
            warn!("No solver registered for {}", kind);
            return SolveOutcome::NoPathFound;
        };

        info!("Solving from {:?} with {}", begin, kind);
        provider(&mut self.model).solve(begin.x, begin.y)
    }

    /// Begin in the top-left passage cell, end in the bottom-right one.
    pub fn place_default_endpoints(&mut self) {
        let far = self.size as i32 - 2;
        self.init_state(1, 1, CellState::Begin);
        self.init_state(far, far, CellState::End);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameboard::{algorithms::PassageStats, EventLog};

    fn generated(cells: usize, kind: GeneratorKind) -> MazeController {
        let mut controller = MazeController::new(cells, Some(4));
        controller.generate(kind);
        controller
    }

    #[test]
    fn size_includes_walls() {
        let controller = MazeController::new(10, None);
        assert_eq!(controller.size(), 21);
        assert_eq!(controller.model().size(), 21);
        assert_eq!(controller.selected_state(), CellState::UnvisitedCell);
        assert_eq!(controller.generator(), GeneratorKind::DepthFirstSearch);
        assert_eq!(controller.solver(), SolverKind::AStar);
    }

    #[test]
    fn hover_paints_only_while_dragging() {
        let mut controller = generated(4, GeneratorKind::DepthFirstSearch);
        controller.select_state("wall").unwrap();

        controller.hover(1, 1);
        assert_eq!(controller.model().get(Indices::new(1, 1)), Some(CellState::UnvisitedCell));

        controller.press();
        controller.hover(1, 1);
        assert_eq!(controller.model().get(Indices::new(1, 1)), Some(CellState::Wall));

        controller.release();
        controller.hover(3, 3);
        assert_eq!(controller.model().get(Indices::new(3, 3)), Some(CellState::UnvisitedCell));
    }

    #[test]
    fn press_at_forces_paint_but_spares_endpoints() {
        let mut controller = generated(4, GeneratorKind::Kruskal);
        controller.place_default_endpoints();
        controller.select_state("maze-visited-cell").unwrap();

        controller.press_at(3, 1);
        controller.press_at(1, 1);
        controller.press_at(7, 7);
        controller.press_at(40, 2);

        let model = controller.model();
        assert_eq!(model.get(Indices::new(3, 1)), Some(CellState::VisitedCell));
        assert_eq!(model.get(Indices::new(1, 1)), Some(CellState::Begin));
        assert_eq!(model.get(Indices::new(7, 7)), Some(CellState::End));
    }

    #[test]
    fn painting_same_state_is_silent() {
        let mut controller = generated(3, GeneratorKind::DepthFirstSearch);
        let log = EventLog::shared();
        controller.model_mut().add_listener(Box::new(log.clone()));

        controller.press_at(1, 1);
        assert!(!controller.change_state(1, 1, CellState::UnvisitedCell));
        assert!(log.borrow().events().is_empty());

        assert!(controller.init_state(1, 1, CellState::UnvisitedCell));
        assert_eq!(log.borrow().updates().count(), 1);
        assert!(!controller.init_state(-1, 0, CellState::Wall));
    }

    #[test]
    fn selecting_begin_moves_it() {
        let mut controller = generated(3, GeneratorKind::DepthFirstSearch);
        controller.place_default_endpoints();
        controller.select_state("begin").unwrap();
        controller.press_at(3, 3);

        assert_eq!(controller.model().begin(), Some(Indices::new(3, 3)));
        assert_eq!(controller.model().get(Indices::new(1, 1)), Some(CellState::UnvisitedCell));
    }

    #[test]
    fn unknown_state_keeps_selection() {
        let mut controller = MazeController::new(2, None);
        controller.select_state("path").unwrap();
        assert!(controller.select_state("lava").is_err());
        assert_eq!(controller.selected_state(), CellState::Path);
    }

    #[test]
    fn generate_and_solve_every_combination() {
        for generator in [GeneratorKind::DepthFirstSearch, GeneratorKind::Kruskal] {
            let mut lengths = Vec::new();
            for solver in [SolverKind::Bfs, SolverKind::AStar] {
                let mut controller = generated(8, generator);
                assert!(PassageStats::of(controller.model().matrix().unwrap()).is_tree());

                controller.place_default_endpoints();
                let outcome = controller.solve(solver);
                assert_eq!(controller.generator(), generator);
                assert_eq!(controller.solver(), solver);
                lengths.push(outcome.path().unwrap().length);
            }
            assert_eq!(lengths[0], lengths[1]);
        }
    }

    #[test]
    fn solve_without_begin() {
        let mut controller = generated(3, GeneratorKind::DepthFirstSearch);
        assert_eq!(controller.solve(SolverKind::Bfs), SolveOutcome::NoPathFound);
    }

    #[test]
    fn from_settings_uses_kinds() {
        let settings =
            Settings::from_ron("(cells_per_side: 5, generator: Kruskal, solver: Bfs)").unwrap();
        let controller = MazeController::from_settings(&settings);
        assert_eq!(controller.size(), 11);
        assert_eq!(controller.generator(), GeneratorKind::Kruskal);
        assert_eq!(controller.solver(), SolverKind::Bfs);

        assert!(Settings::from_ron("(solver: Greedy)").is_err());
    }

    #[test]
    fn every_kind_is_registered() {
        let controller = MazeController::new(1, None);
        let mut generators = controller
            .generator_kinds()
            .map(GeneratorKind::name)
            .collect::<Vec<_>>();
        let mut solvers = controller
            .solver_kinds()
            .map(SolverKind::name)
            .collect::<Vec<_>>();
        generators.sort();
        solvers.sort();
        assert_eq!(generators, vec!["dfs", "kruskal"]);
        assert_eq!(solvers, vec!["astar", "bfs"]);
    }
}
