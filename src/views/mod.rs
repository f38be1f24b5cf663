mod background;
mod contact;
mod content;
mod cursor;
mod hero;
mod modal;
mod nav;
mod skills;

pub use background::BackgroundView;
pub use contact::{element_center, ContactState, ContactView};
pub use content::{ContentView, PinnedCarousel, Timeline};
pub use cursor::CursorView;
pub use hero::HeroView;
pub use modal::{ModalDom, ModalView};
pub use nav::NavView;
pub use skills::{NetworkView, SolarView};
