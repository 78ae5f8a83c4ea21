pub mod core;
pub mod draft;
pub mod settings;
pub mod types;
pub mod wishes;

pub use self::core::App;
pub use draft::Draft;
pub use types::{Focus, ThemeMode};
pub use wishes::WishList;
