pub mod consts;
pub mod error;
pub mod geometry;
pub mod input;
pub mod io;
pub mod overlay;
pub mod selection;
pub mod session;
pub mod settings;
pub mod viewport;
