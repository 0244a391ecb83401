use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReferralOwner {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRecord {
    pub code: String,
    #[serde(default)]
    pub whose: Option<ReferralOwner>,
    pub is_active: bool,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub usage_count: Option<i64>,
}

impl ReferralRecord {
    pub fn usage(&self) -> i64 {
        self.usage_count.unwrap_or(0)
    }

    /// A record without `expires_at` never expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(expires_at) if expires_at < now)
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.whose.as_ref().and_then(|w| w.name.as_deref())
    }

    pub fn owner_email(&self) -> Option<&str> {
        self.whose.as_ref().and_then(|w| w.email.as_deref())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
    Expired,
}

impl StatusFilter {
    pub fn to_str(&self) -> &str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
            StatusFilter::Expired => "expired",
        }
    }

    /// Unknown values keep every record.
    pub fn from_query(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            "expired" => StatusFilter::Expired,
            _ => StatusFilter::All,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Newest,
    Oldest,
    Usage,
    Code,
    #[default]
    Unsorted,
}

impl SortBy {
    pub fn to_str(&self) -> &str {
        match self {
            SortBy::Newest => "newest",
            SortBy::Oldest => "oldest",
            SortBy::Usage => "usage",
            SortBy::Code => "code",
            SortBy::Unsorted => "",
        }
    }

    /// Unknown values leave the filtered order untouched.
    pub fn from_query(value: &str) -> Self {
        match value {
            "newest" => SortBy::Newest,
            "oldest" => SortBy::Oldest,
            "usage" => SortBy::Usage,
            "code" => SortBy::Code,
            _ => SortBy::Unsorted,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReferralFilter {
    pub search_query: String,
    pub status: StatusFilter,
    pub sort_by: SortBy,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReferralSummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub expired: usize,
    pub total_usage: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_deserializes_with_missing_optionals() {
        let record: ReferralRecord = serde_json::from_value(json!({
            "code": "AB1",
            "isActive": true,
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(record.usage(), 0);
        assert!(record.whose.is_none());
        assert!(record.expires_at.is_none());
        assert_eq!(record.owner_name(), None);
    }

    #[test]
    fn record_accepts_null_expiry_and_partial_owner() {
        let record: ReferralRecord = serde_json::from_value(json!({
            "code": "CD2",
            "whose": { "email": "bob@example.com" },
            "isActive": false,
            "expiresAt": null,
            "createdAt": "2024-02-01T00:00:00Z",
            "usageCount": 2
        }))
        .unwrap();

        assert_eq!(record.owner_name(), None);
        assert_eq!(record.owner_email(), Some("bob@example.com"));
        assert_eq!(record.usage(), 2);
    }

    #[test]
    fn expiry_is_strictly_before_now() {
        let now: DateTime<Utc> = "2024-06-01T00:00:00Z".parse().unwrap();
        let mut record: ReferralRecord = serde_json::from_value(json!({
            "code": "EF3",
            "isActive": true,
            "createdAt": "2024-01-01T00:00:00Z",
            "expiresAt": "2024-06-01T00:00:00Z"
        }))
        .unwrap();

        assert!(!record.is_expired(now));
        record.expires_at = Some("2024-05-31T23:59:59Z".parse().unwrap());
        assert!(record.is_expired(now));
        record.expires_at = None;
        assert!(!record.is_expired(now));
    }

    #[test]
    fn demo_file_deserializes() {
        let records: Vec<ReferralRecord> =
            serde_json::from_str(include_str!("../../demos/referrals.json")).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].owner_email(), Some("alice@example.com"));
        assert_eq!(records[2].usage(), 0);
    }

    #[test]
    fn unknown_query_values_fall_back() {
        assert_eq!(StatusFilter::from_query("archived"), StatusFilter::All);
        assert_eq!(StatusFilter::from_query("expired"), StatusFilter::Expired);
        assert_eq!(SortBy::from_query("popular"), SortBy::Unsorted);
        assert_eq!(SortBy::from_query(""), SortBy::Unsorted);
        assert_eq!(SortBy::from_query("code"), SortBy::Code);
    }
}
