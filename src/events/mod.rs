pub mod click;
pub mod contact;
pub mod keyboard;
pub mod pointer;

pub use click::{wire_modal, wire_nav_anchors};
pub use contact::{wire_contact_form, ContactWiring};
pub use keyboard::wire_global_keydown;
pub use pointer::{wire_pointermove, wire_wheel};
