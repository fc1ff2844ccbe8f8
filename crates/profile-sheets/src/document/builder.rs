use super::model::{Document, Row, TextBlock, TextStyle};
use crate::Login;

/// Prefix of the canonical profile URL; the login is appended verbatim.
pub const PROFILE_URL_PREFIX: &str = "https://www.github.com/";

/// Static body copy printed on every sheet.
pub const FILLER_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

const HEADER_ROW_MM: f32 = 20.0;
const HEADER_SPAN: u8 = 4;
const HEADER_SIZE_PT: f32 = 20.0;
const BODY_ROW_MM: f32 = 30.0;
const BODY_SPAN: u8 = 12;
const REFERENCE_ROW_MM: f32 = 10.0;
const REFERENCE_SPAN: u8 = 4;

/// Returns the canonical profile URL for `login`.
pub fn profile_url(login: &Login) -> String {
    format!("{PROFILE_URL_PREFIX}{login}")
}

/// Composes the one-page profile sheet for `login`.
///
/// The layout is fixed: a bold header naming the login, a filler paragraph,
/// and the profile URL. The function is pure; equal logins produce equal
/// documents.
pub fn build_profile_document(login: &Login) -> Document {
    Document::new(login.as_str())
        .row(Row::new(HEADER_ROW_MM).col(
            HEADER_SPAN,
            TextBlock::new(login.as_str(), TextStyle::bold(HEADER_SIZE_PT)),
        ))
        .row(Row::new(BODY_ROW_MM).col(BODY_SPAN, TextBlock::plain(FILLER_TEXT)))
        .row(Row::new(REFERENCE_ROW_MM).col(REFERENCE_SPAN, TextBlock::plain(profile_url(login))))
}
