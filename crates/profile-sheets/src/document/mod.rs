//! Document description and the profile sheet layout.

mod builder;
mod model;


pub use builder::{FILLER_TEXT, PROFILE_URL_PREFIX, build_profile_document, profile_url};
pub use model::{Col, Document, FontFamily, FontWeight, GRID_COLUMNS, Row, TextBlock, TextStyle};
