use std::fs;

use anyhow::Context;
use chrono::Utc;
use dotenv::dotenv;
use serde_json::json;
use tracing::info;

use referral_desk::config::Config;
use referral_desk::service::referral::{generate_referral_code, generate_referral_link};
use referral_desk::{
    filter_and_sort, paginate, summarize, ReferralPageResponse, ReferralQueryDto, ReferralRecord,
};

const USAGE: &str = "usage: referral-desk <referrals.json> [query]\n       referral-desk new-code";

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::init()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let source = args.next().context(USAGE)?;

    if source == "new-code" {
        let code = generate_referral_code();
        let link = generate_referral_link(&config.app_url, &code);
        info!(%code, "issued referral code");
        println!("{}", serde_json::to_string_pretty(&json!({ "code": code, "link": link }))?);
        return Ok(());
    }

    let query = args.next().unwrap_or_default();
    let dto = ReferralQueryDto::from_query_str(&query)?;

    let raw = fs::read_to_string(&source)
        .with_context(|| format!("failed to read referrals from {}", source))?;
    let referrals: Vec<ReferralRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of referrals", source))?;

    let now = Utc::now();
    let page = dto.page();
    let limit = dto.limit_or(config.items_per_page);

    let filtered = filter_and_sort(&referrals, &dto.to_filter(), now);
    let page_result = paginate(&filtered, page, limit)?;

    info!(
        loaded = referrals.len(),
        matched = filtered.len(),
        page,
        total_pages = page_result.total_pages,
        "referral page ready"
    );

    let output = json!({
        "summary": summarize(&referrals, now),
        "referrals": ReferralPageResponse::new(page_result, page, limit),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
