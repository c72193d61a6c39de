pub mod client;
pub mod extract;
pub mod release_date;

pub use client::ListingClient;
pub use extract::Extractor;
pub use release_date::parse_release_date;
