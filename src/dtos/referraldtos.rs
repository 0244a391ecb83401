use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::referralmodel::{ReferralFilter, SortBy, StatusFilter};
use crate::service::error::ReferralError;

pub const MAX_ITEMS_PER_PAGE: i64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub total_pages: usize,
    pub start_index: usize,
    pub total_items: usize,
}

// Query string sent by the referrals table: ?search=&status=&sort=&page=&limit=
#[derive(Validate, Debug, Default, Clone, Deserialize)]
pub struct ReferralQueryDto {
    #[validate(length(max = 100, message = "Search must be at most 100 characters"))]
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: Option<i64>,
    // max must stay equal to MAX_ITEMS_PER_PAGE
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1-100"))]
    pub limit: Option<i64>,
}

impl ReferralQueryDto {
    pub fn from_query_str(query: &str) -> Result<Self, ReferralError> {
        let dto: ReferralQueryDto = serde_urlencoded::from_str(query.trim_start_matches('?'))
            .map_err(|e| ReferralError::Validation(e.to_string()))?;
        dto.validate()?;
        Ok(dto)
    }

    pub fn to_filter(&self) -> ReferralFilter {
        ReferralFilter {
            search_query: self.search.clone().unwrap_or_default(),
            status: self
                .status
                .as_deref()
                .map(StatusFilter::from_query)
                .unwrap_or_default(),
            sort_by: self
                .sort
                .as_deref()
                .map(SortBy::from_query)
                .unwrap_or_default(),
        }
    }

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    pub fn limit_or(&self, default_limit: i64) -> i64 {
        self.limit.unwrap_or(default_limit)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReferralPageResponse<T> {
    pub status: String,
    pub data: Vec<T>,
    pub total: usize,
    pub page: i64,
    pub limit: i64,
    pub total_pages: usize,
    pub start_index: usize,
}

impl<T> ReferralPageResponse<T> {
    pub fn new(page_result: PageResult<T>, page: i64, limit: i64) -> Self {
        Self {
            status: "success".to_string(),
            data: page_result.data,
            total: page_result.total_items,
            page,
            limit,
            total_pages: page_result.total_pages,
            start_index: page_result.start_index,
        }
    }
}
