pub mod app;
pub mod cli;
pub mod errors;
pub mod input;
pub mod logging;
pub mod runner;
pub mod ui;

pub use crate::app::{App, Draft, Focus, ThemeMode, WishList};
pub use crate::errors::WishlistError;
