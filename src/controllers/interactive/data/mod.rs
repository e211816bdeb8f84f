pub mod frame_data;
pub mod intent;
pub mod render_request;
