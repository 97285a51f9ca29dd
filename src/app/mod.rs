pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the storefront App
pub use pages::storefront::App;
