pub mod io;
pub mod model;
pub mod repo;
pub mod state;
pub mod store;
pub mod tui;
