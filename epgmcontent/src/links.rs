//! Contact link builders
//!
//! Turn raw directory data into the URL schemes the platform hands to the
//! OS: `tel:`, `mailto:`, WhatsApp deep links, and Google Maps searches.
//! Phone numbers are kept human-readable in the directory and normalized
//! here.

/// Build a `tel:` URL from a display number. Spaces are stripped; the
/// leading `+` is kept.
pub fn tel_url(number: &str) -> String {
    let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

/// Build a WhatsApp deep link. The wa.me form wants digits only, without
/// the leading `+`. An optional pre-filled message is percent-encoded.
pub fn whatsapp_url(number: &str, text: Option<&str>) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    match text {
        Some(text) if !text.is_empty() => {
            format!("https://wa.me/{digits}?text={}", urlencoding::encode(text))
        }
        _ => format!("https://wa.me/{digits}"),
    }
}

/// Build a `mailto:` URL with an optional subject
pub fn mailto_url(address: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) if !subject.is_empty() => {
            format!("mailto:{address}?subject={}", urlencoding::encode(subject))
        }
        _ => format!("mailto:{address}"),
    }
}

/// Build a Google Maps search URL for an address or GPS digital address
pub fn maps_search_url(query: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(query)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_url_strips_spaces() {
        assert_eq!(tel_url("+233 24 456 2322"), "tel:+233244562322");
    }

    #[test]
    fn test_whatsapp_url_digits_only() {
        assert_eq!(
            whatsapp_url("+39 389 540 3600", None),
            "https://wa.me/393895403600"
        );
    }

    #[test]
    fn test_whatsapp_url_with_text() {
        let url = whatsapp_url("+233 24 849 0953", Some("Prayer Topic: Healing"));
        assert_eq!(
            url,
            "https://wa.me/233248490953?text=Prayer%20Topic%3A%20Healing"
        );
    }

    #[test]
    fn test_mailto_url() {
        assert_eq!(
            mailto_url("info@example.org", Some("Hello there")),
            "mailto:info@example.org?subject=Hello%20there"
        );
        assert_eq!(mailto_url("info@example.org", None), "mailto:info@example.org");
    }

    #[test]
    fn test_maps_search_url() {
        assert_eq!(
            maps_search_url("GS-0137-9154"),
            "https://www.google.com/maps/search/?api=1&query=GS-0137-9154"
        );
    }
}
