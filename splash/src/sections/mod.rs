// Splash page sections
// Developed with 💀 by The Loctree Team (c)2025

mod floating_cta;
mod footer;
mod hero;
mod nav;
mod products;
mod video_modal;

pub use floating_cta::FloatingCta;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use products::ProductCards;
pub use video_modal::VideoModal;
