// Custom Dioxus hooks
pub mod use_adaptive_truncation;
pub mod use_header_config;

pub use use_adaptive_truncation::use_adaptive_truncation;
pub use use_header_config::use_header_config;
