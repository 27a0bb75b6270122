pub mod activity;
pub mod heatmap;
pub mod mood;
pub mod summary;
