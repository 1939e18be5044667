pub mod app;
pub mod catalogue;
pub mod components;
pub mod events;
pub mod footer;
pub mod header;
pub mod home;
pub mod input;
pub mod inventory;
pub mod layout;
pub mod load;
pub mod mvi;
pub mod product;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

pub use app::Route;
