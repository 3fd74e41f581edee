pub mod cell;
pub mod dialog;
pub mod home;
pub mod store;

pub use cell::StateCell;
pub use dialog::{DayClear, TaskDialog};
pub use home::HomeState;
pub use store::AppStore;
