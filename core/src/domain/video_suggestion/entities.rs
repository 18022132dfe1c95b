use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::flow::ModelReply;

pub const VIDEO_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoSuggestionRequest {
    /// Age, fitness level, equipment, health conditions.
    pub user_profile: String,
    pub fitness_goals: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VideoSuggestionResult {
    pub search_queries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VideoLink {
    pub query: String,
    pub url: String,
}

impl VideoLink {
    pub fn for_query(query: &str) -> Self {
        Self {
            query: query.to_string(),
            url: format!("{VIDEO_SEARCH_URL}{}", urlencoding::encode(query)),
        }
    }
}

impl VideoSuggestionResult {
    /// One search link per query, in reply order.
    pub fn links(&self) -> Vec<VideoLink> {
        self.search_queries
            .iter()
            .map(|query| VideoLink::for_query(query))
            .collect()
    }
}

impl ModelReply for VideoSuggestionResult {
    fn check(&self) -> Result<(), String> {
        if let Some(index) = self.search_queries.iter().position(|q| q.trim().is_empty()) {
            return Err(format!("searchQueries[{index}] is empty"));
        }
        Ok(())
    }
}
