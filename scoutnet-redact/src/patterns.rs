//! Sensitive substring patterns and their placeholders
//!
//! No placeholder matches any pattern, which is what keeps redaction
//! idempotent.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const EMAIL_PLACEHOLDER: &str = "*******@*******.***";
pub const PHONE_PLACEHOLDER: &str = " (**) *****-**** ";
pub const HANDLE_PLACEHOLDER: &str = "@*********";
pub const URL_PLACEHOLDER: &str = "[LINK PROTEGIDO]";

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}").expect("valid email pattern")
});

// Optional country code, optional (area code), then two 4-5 digit groups.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?[0-9]{1,3}[ .-]?)?(?:\([0-9]{2,3}\)[ .-]?)?[0-9]{4,5}[ .-]?[0-9]{4,5}")
        .expect("valid phone pattern")
});

static HANDLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@[\w.]+").expect("valid handle pattern"));

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("valid url pattern"));

/// Category of sensitive content, in pass order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitiveKind {
    Email,
    Phone,
    Handle,
    Url,
}

impl SensitiveKind {
    /// Pass order. Emails must be masked before handles.
    pub const PASS_ORDER: [SensitiveKind; 4] = [Self::Email, Self::Phone, Self::Handle, Self::Url];

    pub fn pattern(&self) -> &'static Regex {
        match self {
            Self::Email => &EMAIL,
            Self::Phone => &PHONE,
            Self::Handle => &HANDLE,
            Self::Url => &URL,
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Email => EMAIL_PLACEHOLDER,
            Self::Phone => PHONE_PLACEHOLDER,
            Self::Handle => HANDLE_PLACEHOLDER,
            Self::Url => URL_PLACEHOLDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_placeholders_match_no_pattern() {
        for kind in SensitiveKind::PASS_ORDER {
            for pattern in SensitiveKind::PASS_ORDER {
                assert!(
                    !pattern.pattern().is_match(kind.placeholder()),
                    "{pattern:?} matches {kind:?} placeholder"
                );
            }
        }
    }

    #[rstest]
    #[case("contato@exemplo.com")]
    #[case("first.last+tag@mail.clube.com.br")]
    #[case("x_9@sub-domain.io")]
    fn test_email_matches(#[case] input: &str) {
        let m = SensitiveKind::Email.pattern().find(input).unwrap();
        assert_eq!(m.as_str(), input);
    }

    #[rstest]
    #[case("user@localhost")]
    #[case("user@host.c")]
    #[case("user@host.123")]
    fn test_email_rejects(#[case] input: &str) {
        assert!(!SensitiveKind::Email.pattern().is_match(input));
    }

    #[rstest]
    #[case("(11) 91234-5678")]
    #[case("+55 (11) 91234-5678")]
    #[case("+351 91234.5678")]
    #[case("9123 45678")]
    #[case("912345678")]
    fn test_phone_matches(#[case] input: &str) {
        let m = SensitiveKind::Phone.pattern().find(input).unwrap();
        assert_eq!(m.as_str(), input);
    }

    #[rstest]
    #[case("1234")]
    #[case("123-456")]
    #[case("ano 2024")]
    fn test_phone_rejects(#[case] input: &str) {
        assert!(!SensitiveKind::Phone.pattern().is_match(input));
    }

    #[test]
    fn test_url_stops_at_whitespace() {
        let m = SensitiveKind::Url
            .pattern()
            .find("veja https://site.com/x?a=1 agora")
            .unwrap();
        assert_eq!(m.as_str(), "https://site.com/x?a=1");
    }
}
