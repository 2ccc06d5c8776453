mod resize_handle;

pub use resize_handle::{Corner, ResizeHandle};
