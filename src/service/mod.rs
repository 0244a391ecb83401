pub mod error;
pub mod referral;
pub mod referral_list;
