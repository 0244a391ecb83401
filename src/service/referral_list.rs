use chrono::{DateTime, Utc};
use icu_collator::{Collator, CollatorError, CollatorOptions};
use tracing::{debug, warn};

use crate::dtos::referraldtos::PageResult;
use crate::models::referralmodel::{
    ReferralFilter, ReferralRecord, ReferralSummary, SortBy, StatusFilter,
};
use crate::service::error::ReferralError;

/// Applies the search box, the status dropdown and the sort dropdown, in that order.
///
/// `now` is the instant `expires_at` is compared against for the `expired` status.
/// The input slice is left untouched.
pub fn filter_and_sort(
    referrals: &[ReferralRecord],
    filter: &ReferralFilter,
    now: DateTime<Utc>,
) -> Vec<ReferralRecord> {
    let query = filter.search_query.to_lowercase();

    let mut filtered: Vec<ReferralRecord> = referrals
        .iter()
        .filter(|referral| query.is_empty() || matches_search(referral, &query))
        .filter(|referral| matches_status(referral, filter.status, now))
        .cloned()
        .collect();

    sort_referrals(&mut filtered, filter.sort_by);

    debug!(
        input = referrals.len(),
        output = filtered.len(),
        status = filter.status.to_str(),
        sort = filter.sort_by.to_str(),
        "filtered referrals"
    );

    filtered
}

fn matches_search(referral: &ReferralRecord, query: &str) -> bool {
    let contains = |field: Option<&str>| {
        field
            .map(|value| value.to_lowercase().contains(query))
            .unwrap_or(false)
    };

    contains(Some(referral.code.as_str()))
        || contains(referral.owner_name())
        || contains(referral.owner_email())
}

fn matches_status(referral: &ReferralRecord, status: StatusFilter, now: DateTime<Utc>) -> bool {
    match status {
        StatusFilter::Active => referral.is_active,
        StatusFilter::Inactive => !referral.is_active,
        StatusFilter::Expired => referral.is_expired(now),
        StatusFilter::All => true,
    }
}

// sort_by is stable, ties keep their filtered order
fn sort_referrals(referrals: &mut [ReferralRecord], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => referrals.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Oldest => referrals.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortBy::Usage => referrals.sort_by(|a, b| b.usage().cmp(&a.usage())),
        SortBy::Code => match code_collator() {
            Ok(collator) => referrals.sort_by(|a, b| collator.compare(&a.code, &b.code)),
            Err(err) => {
                warn!("code collator unavailable, sorting by code point: {}", err);
                referrals.sort_by(|a, b| a.code.cmp(&b.code));
            }
        },
        SortBy::Unsorted => {}
    }
}

/// Root-locale collator with default strength, the ordering browsers use for `localeCompare`.
pub fn code_collator() -> Result<Collator, CollatorError> {
    Collator::try_new(&Default::default(), CollatorOptions::new())
}

/// Slices one 1-based page out of `data`.
///
/// Pages outside `1..=total_pages` come back empty with the same totals.
pub fn paginate<T: Clone>(
    data: &[T],
    current_page: i64,
    items_per_page: i64,
) -> Result<PageResult<T>, ReferralError> {
    if items_per_page <= 0 {
        return Err(ReferralError::InvalidPageSize(items_per_page));
    }

    let per_page = items_per_page as usize;
    let total_items = data.len();
    let total_pages = total_items.div_ceil(per_page);

    let (start_index, page) = if current_page < 1 {
        (0, Vec::new())
    } else {
        let start = ((current_page - 1) as usize).saturating_mul(per_page);
        let page = data.iter().skip(start).take(per_page).cloned().collect();
        (start, page)
    };

    Ok(PageResult {
        data: page,
        total_pages,
        start_index,
        total_items,
    })
}

pub fn summarize(referrals: &[ReferralRecord], now: DateTime<Utc>) -> ReferralSummary {
    referrals
        .iter()
        .fold(ReferralSummary::default(), |mut summary, referral| {
            summary.total += 1;
            if referral.is_active {
                summary.active += 1;
            } else {
                summary.inactive += 1;
            }
            if referral.is_expired(now) {
                summary.expired += 1;
            }
            summary.total_usage += referral.usage();
            summary
        })
}
