#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Lead capture endpoint, relative to [`get_backend_url`].
pub const LEADS_PATH: &str = "/api/leads";

pub fn leads_url() -> String {
    format!("{}{}", get_backend_url(), LEADS_PATH)
}
