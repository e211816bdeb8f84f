pub mod algorithm;
pub mod mandelbrot_config;
pub mod shading;
