//! Page sections, rendered top to bottom by `HomePage`.

mod about;
mod bestsellers;
mod blog;
mod contact;
mod footer;
mod header;
mod hero;
mod icons;
mod product_card;
mod promo;
mod shop;

pub use about::AboutSection;
pub use bestsellers::BestsellersSection;
pub use blog::BlogSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use header::{Header, NAV_LINKS};
pub use hero::HomeSection;
pub use product_card::ProductCard;
pub use promo::PromoBannersSection;
pub use shop::ShopSection;
