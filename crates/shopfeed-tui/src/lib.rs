pub mod app;
pub mod controller;
pub mod events;
pub mod sentinel;
pub mod theme;
pub mod ui;

pub use app::App;
pub use controller::{FeedController, FetchOutcome};
pub use sentinel::Sentinel;
