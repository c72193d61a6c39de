pub mod configuration;
pub mod error;
pub mod listing;
pub mod models;
pub mod run;

pub use configuration::Settings;
pub use models::{Cli, ComicItem, FavoriteSet};
pub use run::run;
