pub mod header;
pub mod mobile_drawer;

pub use header::Header;
pub use mobile_drawer::MobileDrawer;
