//! Share link encoding and decoding
//!
//! A share link carries only the text fields of a card:
//! `<origin>/?name=<..>&phone=<..>&msg=<..>`. Images are never included.

use crate::error::LinkError;
use crate::state::CardDraft;
use url::Url;

const NAME_PARAM: &str = "name";
const PHONE_PARAM: &str = "phone";
const MESSAGE_PARAM: &str = "msg";

/// Text fields recovered from a share link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkFields {
    pub name: String,
    pub phone: String,
    pub message: String,
}

/// Build a share link for a draft on top of `base_url`'s origin
pub fn encode_link(draft: &CardDraft, base_url: &str) -> Result<Url, LinkError> {
    if !draft.has_required_fields() {
        return Err(LinkError::MissingRequiredFields);
    }

    let mut url = Url::parse(base_url).map_err(|source| LinkError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(LinkError::CannotBeABase(base_url.to_string()));
    }

    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);
    url.query_pairs_mut()
        .append_pair(NAME_PARAM, &draft.name)
        .append_pair(PHONE_PARAM, &draft.phone_number)
        .append_pair(MESSAGE_PARAM, &draft.message);

    Ok(url)
}

/// Read the card fields from a link.
///
/// Returns `None` unless at least one of the three parameters is present and
/// non-empty. Missing parameters decode to empty strings, and the first
/// occurrence of a repeated parameter is used.
pub fn decode_link(url: &Url) -> Option<LinkFields> {
    let mut fields = LinkFields::default();
    let mut seen = [false; 3];
    for (key, value) in url.query_pairs() {
        let (index, slot) = match key.as_ref() {
            NAME_PARAM => (0, &mut fields.name),
            PHONE_PARAM => (1, &mut fields.phone),
            MESSAGE_PARAM => (2, &mut fields.message),
            _ => continue,
        };
        // First occurrence wins, even when it is empty
        if !seen[index] {
            seen[index] = true;
            *slot = value.into_owned();
        }
    }

    if fields.name.is_empty() && fields.phone.is_empty() && fields.message.is_empty() {
        None
    } else {
        Some(fields)
    }
}

/// Parse a link as typed on the command line: a full URL, `?name=..`, or a
/// bare `name=..` query string.
pub fn parse_link(input: &str) -> Result<Url, url::ParseError> {
    let input = input.trim();
    match Url::parse(input) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let query = input.trim_start_matches('?');
            Url::parse(&format!("http://localhost/?{query}"))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "https://salami-qr.app";

    fn draft(name: &str, phone: &str, message: &str) -> CardDraft {
        CardDraft {
            name: name.to_string(),
            phone_number: phone.to_string(),
            message: message.to_string(),
            ..Default::default()
        }
    }

    mod encode {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_encodes_all_three_params() {
            let url = encode_link(&draft("Alice", "017xxxxxxx", "Eid Mubarak"), BASE).unwrap();
            assert_eq!(
                url.as_str(),
                "https://salami-qr.app/?name=Alice&phone=017xxxxxxx&msg=Eid+Mubarak"
            );
        }

        #[test]
        fn test_empty_message_still_present() {
            let url = encode_link(&draft("Alice", "017", ""), BASE).unwrap();
            assert_eq!(url.query(), Some("name=Alice&phone=017&msg="));
        }

        #[test]
        fn test_special_characters_are_escaped() {
            let url = encode_link(&draft("A&B", "+880 17", "100% = yes"), BASE).unwrap();
            assert_eq!(
                url.query(),
                Some("name=A%26B&phone=%2B880+17&msg=100%25+%3D+yes")
            );
        }

        #[test]
        fn test_uses_origin_only() {
            let url = encode_link(
                &draft("Alice", "017", ""),
                "https://salami-qr.app/some/page?x=1#top",
            )
            .unwrap();
            assert_eq!(
                url.as_str(),
                "https://salami-qr.app/?name=Alice&phone=017&msg="
            );
        }

        #[test]
        fn test_requires_name() {
            let err = encode_link(&draft("", "017", "hi"), BASE).unwrap_err();
            assert!(matches!(err, LinkError::MissingRequiredFields));
        }

        #[test]
        fn test_requires_phone() {
            let err = encode_link(&draft("Alice", "", "hi"), BASE).unwrap_err();
            assert!(matches!(err, LinkError::MissingRequiredFields));
        }

        #[test]
        fn test_invalid_base_url() {
            let err = encode_link(&draft("Alice", "017", ""), "not a url").unwrap_err();
            assert!(matches!(err, LinkError::InvalidBaseUrl { .. }));
        }

        #[test]
        fn test_cannot_be_a_base() {
            let err = encode_link(&draft("Alice", "017", ""), "mailto:a@b.c").unwrap_err();
            assert!(matches!(err, LinkError::CannotBeABase(_)));
        }
    }

    mod decode {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_decodes_example_link() {
            let url = parse_link("?name=Alice&phone=017xxxxxxx&msg=Eid+Mubarak").unwrap();
            assert_eq!(
                decode_link(&url),
                Some(LinkFields {
                    name: "Alice".to_string(),
                    phone: "017xxxxxxx".to_string(),
                    message: "Eid Mubarak".to_string(),
                })
            );
        }

        #[test]
        fn test_missing_params_default_to_empty() {
            let url = parse_link("https://salami-qr.app/?phone=017").unwrap();
            assert_eq!(
                decode_link(&url),
                Some(LinkFields {
                    phone: "017".to_string(),
                    ..Default::default()
                })
            );
        }

        #[test]
        fn test_no_params_is_none() {
            let url = parse_link("https://salami-qr.app/").unwrap();
            assert_eq!(decode_link(&url), None);
        }

        #[test]
        fn test_empty_params_is_none() {
            let url = parse_link("?name=&phone=&msg=").unwrap();
            assert_eq!(decode_link(&url), None);
        }

        #[test]
        fn test_unrelated_params_ignored() {
            let url = parse_link("?utm_source=x&name=Alice&image=abc").unwrap();
            let fields = decode_link(&url).unwrap();
            assert_eq!(fields.name, "Alice");
            assert_eq!(fields.phone, "");
        }

        #[test]
        fn test_first_occurrence_wins() {
            let url = parse_link("?name=Alice&name=Bob").unwrap();
            assert_eq!(decode_link(&url).unwrap().name, "Alice");
        }

        #[test]
        fn test_empty_first_occurrence_wins() {
            let url = parse_link("?name=&name=Bob&phone=017&phone=018").unwrap();
            let fields = decode_link(&url).unwrap();
            assert_eq!(fields.name, "");
            assert_eq!(fields.phone, "017");
        }

        #[test]
        fn test_only_empty_first_occurrences_is_not_a_link() {
            let url = parse_link("?name=&name=Bob").unwrap();
            assert_eq!(decode_link(&url), None);
        }

        #[test]
        fn test_decode_is_idempotent() {
            let url = parse_link("?name=Alice&phone=017").unwrap();
            assert_eq!(decode_link(&url), decode_link(&url));
        }

        #[test]
        fn test_parse_bare_query() {
            let url = parse_link("name=Alice").unwrap();
            assert_eq!(decode_link(&url).unwrap().name, "Alice");
        }
    }

    #[test]
    fn test_round_trip_preserves_text_fields() {
        let original = draft("Alice Rahman", "017xxxxxxx", "ঈদ মোবারক & more");
        let url = encode_link(&original, BASE).unwrap();
        let fields = decode_link(&url).unwrap();

        assert_eq!(fields.name, original.name);
        assert_eq!(fields.phone, original.phone_number);
        assert_eq!(fields.message, original.message);
    }

    #[test]
    fn test_images_never_in_link() {
        let mut with_image = draft("Alice", "017", "");
        with_image.qr_image = Some(crate::state::ImagePayload {
            bytes: vec![1, 2, 3],
            encoding: crate::state::ImageEncoding::Png,
            file_name: "qr.png".to_string(),
            width: 1,
            height: 1,
        });
        let url = encode_link(&with_image, BASE).unwrap();
        assert_eq!(url.query_pairs().count(), 3);
    }
}
