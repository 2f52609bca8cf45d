//! Redaction passes over free text

use std::borrow::Cow;

use regex::NoExpand;

use crate::patterns::SensitiveKind;

/// Mask sensitive substrings unless the consumer is entitled to the raw text.
///
/// With `bypass` set, or for empty input, the input is returned borrowed.
/// Otherwise each pass in [`SensitiveKind::PASS_ORDER`] runs on the output of
/// the previous one, so text consumed by an earlier pass is not seen by a
/// later one. Never fails.
pub fn redact(text: &str, bypass: bool) -> Cow<'_, str> {
    if bypass || text.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut masked = Cow::Borrowed(text);
    for kind in SensitiveKind::PASS_ORDER {
        let replaced = match kind
            .pattern()
            .replace_all(&masked, NoExpand(kind.placeholder()))
        {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        if let Some(s) = replaced {
            masked = Cow::Owned(s);
        }
    }
    masked
}

/// Whether [`redact`] without bypass would change `text`
pub fn contains_sensitive(text: &str) -> bool {
    SensitiveKind::PASS_ORDER
        .iter()
        .any(|kind| kind.pattern().is_match(text))
}

/// Text paired with the consumer's entitlement to see it raw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedactableText<'a> {
    text: &'a str,
    bypass: bool,
}

impl<'a> RedactableText<'a> {
    pub fn new(text: &'a str, bypass: bool) -> Self {
        Self { text, bypass }
    }

    pub fn raw(&self) -> &'a str {
        self.text
    }

    pub fn bypass(&self) -> bool {
        self.bypass
    }

    /// Text as the consumer may see it
    pub fn render(&self) -> Cow<'a, str> {
        redact(self.text, self.bypass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{EMAIL_PLACEHOLDER, PHONE_PLACEHOLDER};
    use proptest::prelude::*;

    fn longest_digit_run(text: &str) -> usize {
        text.split(|c: char| !c.is_ascii_digit())
            .map(str::len)
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_email() {
        assert_eq!(redact("contato@exemplo.com", false), EMAIL_PLACEHOLDER);
    }

    #[test]
    fn test_phone() {
        let out = redact("Me chama (11) 91234-5678", false);
        assert!(out.contains(PHONE_PLACEHOLDER));
        assert!(longest_digit_run(&out) < 4, "{out}");
    }

    #[test]
    fn test_handle() {
        assert_eq!(redact("segue @meuinsta", false), "segue @*********");
    }

    #[test]
    fn test_url() {
        assert_eq!(
            redact("veja https://site.com/x", false),
            "veja [LINK PROTEGIDO]"
        );
    }

    #[test]
    fn test_email_not_reported_as_handle() {
        let out = redact("fala com joao.silva@clube.com.br ou @joaosilva", false);
        assert_eq!(out, "fala com *******@*******.*** ou @*********");
    }

    #[test]
    fn test_mixed_message() {
        let input = "Oi! Email: scout@agencia.com, zap +55 11 98765-4321, insta @scout.br, site http://agencia.com";
        let out = redact(input, false);

        assert!(!out.contains("scout@agencia.com"));
        assert!(!out.contains("@scout.br"));
        assert!(!out.contains("http://"));
        assert!(longest_digit_run(&out) < 4, "{out}");
        assert!(out.starts_with("Oi! Email: *******@*******.***,"));
    }

    #[test]
    fn test_clean_text_is_borrowed() {
        let out = redact("treino amanhã às 9h", false);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_empty_and_bypass_are_borrowed() {
        assert!(matches!(redact("", false), Cow::Borrowed("")));
        let raw = "contato@exemplo.com";
        assert!(matches!(redact(raw, true), Cow::Borrowed(s) if s == raw));
    }

    #[test]
    fn test_odd_input() {
        for input in ["@", "@@", "(((", "(11", "+", "http://", "a@b", "@.", "((11)) 1234-"] {
            let once = redact(input, false);
            assert_eq!(redact(&once, false), once, "{input}");
        }
        assert_eq!(redact("@", false), "@");
        assert_eq!(redact("http://", false), "http://");
    }

    #[test]
    fn test_contains_sensitive() {
        assert!(contains_sensitive("me liga 91234-5678"));
        assert!(contains_sensitive("@perfil"));
        assert!(!contains_sensitive("bom jogo ontem"));
    }

    #[test]
    fn test_redactable_text() {
        let text = RedactableText::new("segue @meuinsta", false);
        assert_eq!(text.render(), "segue @*********");
        assert_eq!(text.raw(), "segue @meuinsta");

        assert!(!text.bypass());

        let entitled = RedactableText::new("segue @meuinsta", true);
        assert!(entitled.bypass());
        assert_eq!(entitled.render(), "segue @meuinsta");
    }

    #[test]
    fn test_unseparated_digit_run_is_a_phone() {
        assert_eq!(redact("ligue 20242025", false), "ligue  (**) *****-**** ");
    }

    #[test]
    fn test_country_code_before_bare_area_code() {
        // only a parenthesized area code joins the country code to the number
        assert_eq!(
            redact("+55 11 98765-4321", false),
            "+55  (**) *****-**** "
        );
        assert_eq!(
            redact("+55 (11) 98765-4321", false),
            PHONE_PLACEHOLDER
        );
    }

    fn fragment() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z0-9._%+-]{1,8}@[a-z0-9-]{1,6}\\.[a-z]{2,3}",
            "\\+?[0-9]{0,3} ?(\\([0-9]{2,3}\\) ?)?[0-9]{4,5}[ .-]?[0-9]{4,5}",
            "@[a-zA-Z0-9._]{1,10}",
            "https?://[a-z./?=0-9]{1,12}",
            "[ a-zA-Z0-9@().+-]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn prop_idempotent_arbitrary(text in "\\PC{0,64}") {
            let once = redact(&text, false).into_owned();
            prop_assert_eq!(redact(&once, false), once.as_str());
        }

        #[test]
        fn prop_idempotent_fragments(parts in prop::collection::vec(fragment(), 0..8)) {
            let text = parts.concat();
            let once = redact(&text, false).into_owned();
            prop_assert_eq!(redact(&once, false), once.as_str());
        }

        #[test]
        fn prop_bypass_is_identity(text in "\\PC{0,64}") {
            prop_assert_eq!(redact(&text, true), text.as_str());
        }

        #[test]
        fn prop_no_email_survives(parts in prop::collection::vec(fragment(), 1..6)) {
            let once = redact(&parts.join(" "), false).into_owned();
            prop_assert!(!SensitiveKind::Email.pattern().is_match(&once));
            prop_assert!(!SensitiveKind::Url.pattern().is_match(&once));
        }
    }
}
