//! Section components for the Atelier Flo M landing page.

/// Online gallery, opened in the system browser.
pub const GALLERY_URL: &str = "https://floplasticienne.wixsite.com/flom?lang=en";

/// Online shop, opened in the system browser.
pub const SHOP_URL: &str = "https://flo-m.sumupstore.com/";

mod explorer;
mod features;
mod footer;
mod hero;
pub mod icons;
mod navbar;
mod philosophy;
mod protocol;

pub use explorer::Explorer;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use philosophy::Philosophy;
pub use protocol::Protocol;
