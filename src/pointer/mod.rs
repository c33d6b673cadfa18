mod buttons;
mod fade;
mod region;
mod tracker;

pub use buttons::{ButtonGate, PointerButton};
pub use fade::{FadePolicy, FadeState};
pub use region::Region;
pub use tracker::PointerTracker;
