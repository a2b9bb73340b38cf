use super::Account;
use field_rail::validator::{
    avoid_normal_html_tag, avoid_script_tag, is_free_of_normal_tags, is_tag_free, Validator,
    FORBIDDEN_TAGS, NORMAL_FORBIDDEN_TAGS,
};

fn bio(a: &Account) -> &str {
    &a.bio
}

#[test]
fn script_guard_rejects_script_tags() {
    let v = avoid_script_tag(bio, "bio_html", "No markup");
    let errors = v.validate(&Account::with_bio("hello <script>alert(1)</script>"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].name(), "bio_html");
}

#[test]
fn script_guard_is_case_insensitive() {
    assert!(!is_tag_free("<ScRiPt src=//evil>"));
    assert!(!is_tag_free("<IFRAME"));
    assert!(!is_tag_free("x </Object> y"));
}

#[test]
fn script_guard_rejects_unclosed_denylisted_tags() {
    // no closing '>' so only the denylist catches it
    assert!(!is_tag_free("<img src=x onerror=alert(1)"));
}

#[test]
fn script_guard_rejects_any_tag_shape() {
    assert!(!is_tag_free("hello <b>bold</b>"));
    assert!(!is_tag_free("<div class=\"x\">"));
    assert!(!is_tag_free("</p>"));
}

#[test]
fn script_guard_allows_plain_text_and_blank() {
    let v = avoid_script_tag(bio, "bio_html", "No markup");
    assert!(v.validate(&Account::with_bio("")).is_empty());
    assert!(v.validate(&Account::with_bio("   ")).is_empty());
    assert!(v.validate(&Account::with_bio("I like 1 < 2 and 3 > 2")).is_empty());
    assert!(v.validate(&Account::with_bio("email me: ann@example.com")).is_empty());
}

#[test]
fn normal_guard_rejects_denylisted_tags() {
    let v = avoid_normal_html_tag(bio, "bio_html", "No scripts");
    assert_eq!(
        v.validate(&Account::with_bio("hello <script>alert(1)</script>")).len(),
        1
    );
    assert_eq!(v.validate(&Account::with_bio("<STYLE>body{}</STYLE>")).len(), 1);
    assert_eq!(v.validate(&Account::with_bio("<embed src=x>")).len(), 1);
}

#[test]
fn normal_guard_is_intentionally_narrow() {
    let v = avoid_normal_html_tag(bio, "bio_html", "No scripts");
    assert!(v.validate(&Account::with_bio("hello <b>bold</b>")).is_empty());
    assert!(is_free_of_normal_tags("<iframe src=x></iframe>"));
}

#[test]
fn denylists_cover_open_and_close_forms() {
    assert_eq!(FORBIDDEN_TAGS.len(), 30);
    assert_eq!(NORMAL_FORBIDDEN_TAGS.len(), 8);
    for tag in NORMAL_FORBIDDEN_TAGS {
        assert!(FORBIDDEN_TAGS.contains(tag));
    }
}

#[test]
fn script_guard_allows_non_ascii_bracketed_text() {
    assert!(is_tag_free("<注意> 明日は休みです"));
    assert!(is_tag_free("<é>"));
    assert!(!is_tag_free("<注意> <b>bold</b>"));
}
