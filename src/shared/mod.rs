pub mod errors;
pub mod config;
pub mod layout;
pub mod logging;

// Available in fullstack mode (both client and server)
pub mod hooks;
