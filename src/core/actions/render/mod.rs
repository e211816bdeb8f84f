pub mod errors;
pub mod renderer;
