//! UI Components
//!
//! Dashboard chrome and one component per feature card.

pub mod icon;
mod header;
mod sidebar;
mod landing;
mod toaster;
mod chat_section;
mod weather_section;
mod schemes_section;
mod tips_section;
mod mandi_section;

pub use header::Header;
pub use sidebar::Sidebar;
pub use landing::Landing;
pub use toaster::Toaster;
pub use chat_section::ChatSection;
pub use weather_section::WeatherSection;
pub use schemes_section::SchemesSection;
pub use tips_section::TipsSection;
pub use mandi_section::MandiSection;
