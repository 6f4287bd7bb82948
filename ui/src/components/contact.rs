pub mod form;
pub mod view;

pub use view::ContactSection;
