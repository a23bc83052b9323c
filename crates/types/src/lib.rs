pub mod alignment;
pub mod geometry;

pub use alignment::Alignment;
pub use geometry::{Size, max_width, separated_width, width_of};
