pub mod utils;
pub mod view;

pub use view::SiteHeader;
