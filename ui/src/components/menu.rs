pub mod view;

pub use view::{MenuGrid, MenuSection};
