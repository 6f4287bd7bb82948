pub mod contact;
pub mod menu;
pub mod nav;
