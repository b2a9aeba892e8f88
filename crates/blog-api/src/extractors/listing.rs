//! List query extractor
//!
//! Reads `pageNumber`, `pageSize`, `sortBy`, `sortDirection` and the search
//! terms. Values that do not parse fall back to their defaults instead of
//! rejecting the request.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_core::value_objects::DEFAULT_PAGE_SIZE;
use blog_core::{
    BlogQuery, BlogSortField, CommentQuery, CommentSortField, PageRequest, PostQuery,
    PostSortField, SortDirection,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::response::ApiError;

/// Raw list query parameters, kept as strings so bad values can fall back
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub search_name_term: Option<String>,
    pub search_title_term: Option<String>,
}

fn positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).filter(|n| *n > 0)
}

fn search_term(raw: Option<&String>) -> Option<String> {
    raw.map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl ListParams {
    /// Page window with defaults applied
    pub fn page(&self) -> PageRequest {
        let direction = self
            .sort_direction
            .as_deref()
            .and_then(|s| s.parse::<SortDirection>().ok())
            .unwrap_or_default();

        PageRequest::new(
            positive(self.page_number.as_deref()).unwrap_or(1),
            positive(self.page_size.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE),
            direction,
        )
    }

    pub fn blog_query(&self) -> BlogQuery {
        BlogQuery {
            search_name_term: search_term(self.search_name_term.as_ref()),
            sort_by: self
                .sort_by
                .as_deref()
                .and_then(BlogSortField::from_param)
                .unwrap_or_default(),
            page: self.page(),
        }
    }

    pub fn post_query(&self) -> PostQuery {
        PostQuery {
            blog_id: None,
            search_title_term: search_term(self.search_title_term.as_ref()),
            sort_by: self
                .sort_by
                .as_deref()
                .and_then(PostSortField::from_param)
                .unwrap_or_default(),
            page: self.page(),
        }
    }

    pub fn comment_query(&self, post_id: Uuid) -> CommentQuery {
        CommentQuery {
            post_id,
            sort_by: self
                .sort_by
                .as_deref()
                .and_then(CommentSortField::from_param)
                .unwrap_or_default(),
            page: self.page(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Only a query string that is not url-encoded at all can fail here
        Ok(Query::<ListParams>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| params)
            .unwrap_or_default())
    }
}
