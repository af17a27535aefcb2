use std::time::Duration;

pub const RANDOM_ORG_ENDPOINT: &str = "https://www.random.org";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
}

/// A single draw from the Random.org integer generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomOrgRequest {
    pub method: Method,
    pub url: String,
    pub timeout: Duration,
}

impl RandomOrgRequest {
    pub fn integer(min: i64, max: i64) -> RandomOrgRequest {
        RandomOrgRequest::integer_at(RANDOM_ORG_ENDPOINT, min, max)
    }

    /// `rnd=new` asks for a fresh draw instead of a cached sequence.
    pub fn integer_at(endpoint: &str, min: i64, max: i64) -> RandomOrgRequest {
        RandomOrgRequest {
            method: Method::Get,
            url: format!(
                "{}/integers/?num=1&min={}&max={}&col=1&base=10&format=plain&rnd=new",
                endpoint.trim_end_matches('/'),
                min,
                max
            ),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis().try_into().unwrap_or(u64::MAX)
    }
}
