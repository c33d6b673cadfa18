pub mod logging;
pub mod platform;
pub mod pointer;
pub mod settings;
pub mod surface;
pub mod travel;
pub mod world;
