
/// How referral submissions leave the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    /// POST to `{backend}/api/referrals`.
    Live,
    /// No backend: wait `SIMULATED_DELAY_MS` and report success.
    Simulated,
}

pub const REFERRALS_PATH: &str = "/api/referrals";

pub const SIMULATED_DELAY_MS: u32 = 1_500;

pub const TOAST_DURATION_MS: u32 = 5_000;

#[cfg(debug_assertions)]
const DEFAULT_BACKEND_URL: &str = "http://localhost:3001"; // Development URL when running locally

#[cfg(not(debug_assertions))]
const DEFAULT_BACKEND_URL: &str = ""; // Same origin in production

/// Base URL for API calls. `REFERRAL_API_URL` at build time overrides the default;
/// an empty value means same-origin.
pub fn get_backend_url() -> &'static str {
    option_env!("REFERRAL_API_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

pub fn referrals_url() -> String {
    join_url(get_backend_url(), REFERRALS_PATH)
}

pub fn submit_mode() -> SubmitMode {
    parse_submit_mode(option_env!("REFERRAL_SIMULATE"))
}

fn parse_submit_mode(flag: Option<&str>) -> SubmitMode {
    match flag.map(str::trim) {
        Some("1") | Some("true") | Some("yes") => SubmitMode::Simulated,
        _ => SubmitMode::Live,
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_is_same_origin() {
        assert_eq!(join_url("", REFERRALS_PATH), "/api/referrals");
    }

    #[test]
    fn trailing_slash_on_base_is_dropped() {
        assert_eq!(
            join_url("https://api.earnify.io/", REFERRALS_PATH),
            "https://api.earnify.io/api/referrals"
        );
    }

    #[test]
    fn simulate_flag_is_opt_in() {
        assert_eq!(parse_submit_mode(None), SubmitMode::Live);
        assert_eq!(parse_submit_mode(Some("0")), SubmitMode::Live);
        assert_eq!(parse_submit_mode(Some("")), SubmitMode::Live);
        assert_eq!(parse_submit_mode(Some("1")), SubmitMode::Simulated);
        assert_eq!(parse_submit_mode(Some(" true ")), SubmitMode::Simulated);
    }
}
