pub mod config;
pub mod dtos;
pub mod models;
pub mod service;

pub use dtos::referraldtos::{PageResult, ReferralPageResponse, ReferralQueryDto};
pub use models::referralmodel::{
    ReferralFilter, ReferralOwner, ReferralRecord, ReferralSummary, SortBy, StatusFilter,
};
pub use service::error::ReferralError;
pub use service::referral_list::{filter_and_sort, paginate, summarize};
