use rand::{distr::Alphanumeric, Rng};

pub const REFERRAL_CODE_LENGTH: usize = 8;

pub fn generate_referral_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(REFERRAL_CODE_LENGTH)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}

pub fn generate_referral_link(base_url: &str, code: &str) -> String {
    format!(
        "{}/register?ref={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(code)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_referral_code() {
        let code = generate_referral_code();
        assert_eq!(code.len(), REFERRAL_CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generate_referral_link() {
        assert_eq!(
            generate_referral_link("https://events.example.com/", "AB12CD34"),
            "https://events.example.com/register?ref=AB12CD34"
        );
        assert_eq!(
            generate_referral_link("http://localhost:5173", "a b&c"),
            "http://localhost:5173/register?ref=a%20b%26c"
        );
    }
}
