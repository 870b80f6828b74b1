mod app;
pub use app::App;

pub mod assets;
pub mod audio;
pub mod events;
pub mod sounds;
pub mod theme;
pub mod views;
pub use views::*;
