//! Farming Tip Endpoints

use crate::models::{Language, Tip};
use super::{client, path_segment, ApiError};

/// Optional narrowing for the tips list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TipFilter {
    pub category: Option<String>,
    pub season: Option<String>,
}

/// Query pairs in backend order; empty filters are left out
pub fn tip_query(language: Language, filter: &TipFilter, active_only: bool) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("language", language.code().to_string()),
        ("active_only", active_only.to_string()),
    ];
    if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
        query.push(("category", category.to_string()));
    }
    if let Some(season) = filter.season.as_deref().filter(|s| !s.is_empty()) {
        query.push(("season", season.to_string()));
    }
    query
}

pub async fn get_tips(language: Language, filter: &TipFilter, active_only: bool) -> Result<Vec<Tip>, ApiError> {
    let query = tip_query(language, filter, active_only);
    client().get("/tips/", &query).await
}

pub async fn get_tip(id: &str, language: Language) -> Result<Tip, ApiError> {
    let endpoint = format!("/tips/{}", path_segment(id));
    client().get(&endpoint, &[("language", language.code())]).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_query_defaults() {
        let query = tip_query(Language::Gu, &TipFilter::default(), true);
        assert_eq!(
            query,
            vec![("language", "gu".to_string()), ("active_only", "true".to_string())]
        );
    }

    #[test]
    fn test_tip_query_filters() {
        let filter = TipFilter {
            category: Some("pest".to_string()),
            season: Some(String::new()),
        };
        let query = tip_query(Language::En, &filter, false);
        assert_eq!(query.len(), 3);
        assert_eq!(query[2], ("category", "pest".to_string()));
    }
}
