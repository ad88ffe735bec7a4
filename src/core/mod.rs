pub mod burst;
pub mod color;
pub mod config;
pub mod constants;
pub mod field;
pub mod noise;
pub mod palette;
pub mod shard;
pub mod surface;

pub use color::Hsba;
pub use config::FieldConfig;
pub use field::FieldController;
pub use surface::Surface;
