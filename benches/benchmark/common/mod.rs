use criterion::Criterion;
use field_rail::validator::{avoid_script_tag, limitation, presence, regexp};
use field_rail::Rules;
use regex::Regex;
use std::time::Duration;

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[derive(Debug, Clone)]
pub struct SignupForm {
    pub email: String,
    pub nickname: String,
    pub bio: String,
}

impl SignupForm {
    pub fn valid(id: u64) -> Self {
        Self {
            email: format!("user{id}@company.com"),
            nickname: format!("user_{id}"),
            bio: "Backend developer based in Seoul.".to_string(),
        }
    }

    pub fn invalid() -> Self {
        Self {
            email: "not-an-email".to_string(),
            nickname: " ".to_string(),
            bio: "<script>document.cookie</script>".to_string(),
        }
    }
}

pub fn signup_rules() -> Rules<'static, SignupForm> {
    let email = Regex::new(r"^[^@\s]+@[^@\s]+\.[a-z]{2,}$").unwrap();

    Rules::new()
        .with(presence(|f: &SignupForm| f.email.as_str(), "email_presence", "Email is required"))
        .with(regexp(|f: &SignupForm| f.email.as_str(), email, "email_format", "Invalid email"))
        .with(presence(|f: &SignupForm| f.nickname.as_str(), "nickname_presence", "Nickname is required"))
        .with(limitation(|f: &SignupForm| f.nickname.as_str(), 2, 16, "nickname_length", "2 to 16 characters"))
        .with(avoid_script_tag(|f: &SignupForm| f.bio.as_str(), "bio_html", "No markup"))
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
