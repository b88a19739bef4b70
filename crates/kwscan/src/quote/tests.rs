use super::*;

#[test]
fn recognizes_all_three_marks() {
    assert_eq!(Quote::from_byte(b'`'), Some(Quote::Backtick));
    assert_eq!(Quote::from_byte(b'"'), Some(Quote::Double));
    assert_eq!(Quote::from_byte(b'\''), Some(Quote::Single));
}

#[test]
fn rejects_other_bytes() {
    for byte in [b' ', b'|', b'x', b'\\', 0, 0xE2] {
        assert_eq!(Quote::from_byte(byte), None, "byte {byte:#04x}");
    }
}

#[test]
fn byte_roundtrip() {
    for quote in Quote::ALL {
        assert_eq!(Quote::from_byte(quote.as_byte()), Some(quote));
        assert_eq!(quote.as_char() as u32, u32::from(quote.as_byte()));
    }
}

#[test]
fn display_names_the_mark() {
    assert_eq!(Quote::Double.to_string(), "double quote `\"`");
    assert_eq!(Quote::Backtick.to_string(), "backtick ```");
}

#[test]
fn delimiter_is_not_a_quote() {
    assert_eq!(Quote::from_byte(DELIMITER), None);
}
