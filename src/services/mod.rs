pub mod heatmap;
pub mod journal;
pub mod summary;
