pub mod cli;
pub mod comic;
pub mod favorites;

pub use cli::Cli;
pub use comic::ComicItem;
pub use favorites::FavoriteSet;
