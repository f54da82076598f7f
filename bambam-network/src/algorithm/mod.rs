pub mod resolution;
pub mod segmentation;
