pub mod chirps;
pub mod users;

pub use chirps::SortOrder;
