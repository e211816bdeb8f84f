//! Interactive controller for real-time fractal rendering.
//!
//! Input adapters turn window events into [`ViewerIntent`]s and feed them to a
//! [`ViewerState`]. Once per event-loop tick the state yields at most one
//! [`RenderRequest`], which the [`InteractiveController`] renders on its worker
//! thread and hands to an [`InteractiveControllerPresenterPort`].

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
pub mod state;

pub use controller::InteractiveController;
pub use data::intent::ViewerIntent;
pub use data::render_request::RenderRequest;
pub use ports::presenter::InteractiveControllerPresenterPort;
pub use state::ViewerState;
