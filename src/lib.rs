pub mod config;
pub mod coupling;
pub mod error;
pub mod grid;
pub mod section;
pub mod state;
pub mod topology;
pub mod util;
pub mod vtk;
