#[cfg(test)]
mod tests {
    use crate::decode_entities;

    #[test]
    fn named_entities_decode() {
        assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(decode_entities("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
        assert_eq!(decode_entities("&quot;quoted&quot;"), "\"quoted\"");
    }

    #[test]
    fn numeric_entities_decode() {
        assert_eq!(decode_entities("It&#8217;s here"), "It\u{2019}s here");
        assert_eq!(decode_entities("&#x27;single&#x27;"), "'single'");
        assert_eq!(decode_entities("&#65;"), "A");
    }

    #[test]
    fn malformed_entities_pass_through() {
        assert_eq!(decode_entities("AT&T"), "AT&T");
        assert_eq!(decode_entities("a &bogus; b"), "a &bogus; b");
        assert_eq!(decode_entities("tail &amp"), "tail &amp");
        assert_eq!(decode_entities(""), "");
    }
}
