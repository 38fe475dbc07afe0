pub mod a001_camera;
pub mod a002_part;
pub mod a003_location;
pub mod a004_part_detection;
