//! Government Scheme Endpoints

use crate::models::{Language, Scheme};
use super::{client, path_segment, ApiError};

pub async fn get_schemes(language: Language, active_only: bool) -> Result<Vec<Scheme>, ApiError> {
    let active = active_only.to_string();
    client()
        .get("/schemes/", &[("language", language.code()), ("active_only", active.as_str())])
        .await
}

/// Single scheme; `language` asks for the same translation as the list
pub async fn get_scheme(id: &str, language: Language) -> Result<Scheme, ApiError> {
    let endpoint = format!("/schemes/{}", path_segment(id));
    client().get(&endpoint, &[("language", language.code())]).await
}
