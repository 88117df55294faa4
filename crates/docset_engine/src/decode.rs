use chardetng::EncodingDetector;
use docset_logging::docset_warn;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
    /// Some bytes were not valid in the chosen encoding and were replaced.
    pub lossy: bool,
}

/// Decode stored page bytes into UTF-8 using: BOM -> chardetng detection.
///
/// Never fails; malformed sequences become U+FFFD, matching the permissive
/// HTML parse that follows.
pub fn decode_stored(bytes: &[u8]) -> DecodedHtml {
    // 1) BOM aware decode using encoding_rs helper
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    // 2) chardetng detection over the full document, UTF-8 allowed
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedHtml {
    let (text, _, had_errors) = enc.decode(bytes);
    if had_errors {
        docset_warn!(
            "Stored page is not valid {}; malformed bytes were replaced",
            enc.name()
        );
    }
    DecodedHtml {
        html: text.into_owned(),
        encoding_label: enc.name().to_string(),
        lossy: had_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::decode_stored;

    #[test]
    fn utf8_bom_is_honoured_and_stripped() {
        let decoded = decode_stored(b"\xEF\xBB\xBF<p>hello</p>");
        assert_eq!(decoded.html, "<p>hello</p>");
        assert_eq!(decoded.encoding_label, "UTF-8");
        assert!(!decoded.lossy);
    }

    #[test]
    fn plain_utf8_round_trips() {
        let decoded = decode_stored("<h2>Café</h2>".as_bytes());
        assert_eq!(decoded.html, "<h2>Café</h2>");
    }

    #[test]
    fn legacy_single_byte_pages_are_detected() {
        let decoded = decode_stored(b"<p>caf\xe9 cr\xe8me br\xfbl\xe9e</p>");
        assert!(decoded.html.starts_with("<p>caf"));
        assert!(!decoded.html.contains('\u{FFFD}'));
        assert_ne!(decoded.encoding_label, "UTF-8");
    }
}
