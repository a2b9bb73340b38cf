use field_rail::prelude::*;
use field_rail::FieldError;

struct Signup {
    email: String,
    nickname: String,
    password: String,
    bio: String,
}

fn signup_rules() -> Result<Rules<'static, Signup>, regex::Error> {
    Ok(Rules::new()
        .with(presence(|s: &Signup| s.email.as_str(), "email_presence", "Email is required"))
        .with(regexp_pattern(
            |s: &Signup| s.email.as_str(),
            r"^[^@\s]+@[^@\s]+$",
            "email_format",
            "Email looks wrong",
        )?)
        .with(limitation(|s: &Signup| s.nickname.as_str(), 2, 16, "nickname_length", "2 to 16 characters"))
        .with(prohibition(|s: &Signup| s.password.as_str(), 0, 7, "password_length", "At least 8 characters"))
        .with(dynamic_message(|s: &Signup| {
            if s.password.eq_ignore_ascii_case(&s.nickname) {
                Err(FieldError::new("password_nickname", "Password must differ from nickname"))
            } else {
                Ok(())
            }
        }))
        .with(avoid_script_tag(|s: &Signup| s.bio.as_str(), "bio_html", "Markup is not allowed")))
}

fn css_class(errors: &Errors, name: &str) -> &'static str {
    errors.if_has_then(name, "field is-invalid")
}

fn main() -> Result<(), regex::Error> {
    let rules = signup_rules()?;

    let input = Signup {
        email: "ann.example.com".into(),
        nickname: "ann".into(),
        password: "ANN".into(),
        bio: "hi <img src=x onerror=alert(1)>".into(),
    };

    let report = rules.validate(&input);
    if !report.has_error() {
        println!("signup accepted");
        return Ok(());
    }

    let errors = report.errors();
    for name in errors.names() {
        println!("[{}] {}: {}", css_class(errors, name), name, errors.on(name));
    }
    Ok(())
}
