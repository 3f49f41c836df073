pub mod advisory;
pub mod analysis;
pub mod labels;
pub mod terrain_class;
