//! Grid mazes: a shared cell model with change notifications, maze carving generators and
//! path solvers that work through it.
//!
//! ```
//! use gridmaze::{
//!     gameboard::{algorithms::{random_from_seed, MazeGenerator, RndKruskals}, CellState, Model},
//!     solvers::{AStarSolver, MazeSolver},
//! };
//!
//! let mut model = Model::new(11);
//! RndKruskals.create(11, &mut model, &mut random_from_seed(Some(1)));
//! model.update_model(1, 1, CellState::Begin);
//! model.update_model(9, 9, CellState::End);
//!
//! let outcome = AStarSolver::new(&mut model).solve(1, 1);
//! assert!(outcome.is_found());
//! ```

pub mod array;
pub mod controller;
pub mod dims;
pub mod gameboard;
pub mod logging;
pub mod registry;
pub mod settings;
pub mod solvers;
pub mod view;
