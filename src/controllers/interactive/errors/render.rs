/// A frame that could not be produced, tagged with the generation that asked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}
