pub mod frontier;
pub mod level;
pub mod score;
pub mod summary;
