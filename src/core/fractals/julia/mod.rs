pub mod algorithm;
pub mod animation;
pub mod julia_config;
pub mod shading;
