/// Percent-encoding mínimo para valores de query string.
/// Suficiente para los filtros de esta capa (búsquedas, estados, fechas);
/// los caracteres no reservados pasan tal cual.
pub fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Decodificación inversa; `+` cuenta como espacio (forma application/x-www-form-urlencoded,
/// que es lo que llega en el callback de OAuth).
pub fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if let (Some(hi), Some(lo)) = (
                    bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16)),
                    bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16)),
                ) {
                    out.push((hi * 16 + lo) as u8);
                    i += 3;
                    continue;
                }
                out.push(b'%');
                i += 1;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_passes_unreserved() {
        assert_eq!(percent_encode("DELIVERED"), "DELIVERED");
        assert_eq!(percent_encode("rider-42_x.y~z"), "rider-42_x.y~z");
    }

    #[test]
    fn encode_escapes_specials() {
        assert_eq!(percent_encode("calle mayor 5"), "calle%20mayor%205");
        assert_eq!(percent_encode("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn decode_roundtrip() {
        let input = "búsqueda con ñ & símbolos=?";
        assert_eq!(percent_decode(&percent_encode(input)), input);
    }

    #[test]
    fn decode_handles_plus_and_bad_escapes() {
        assert_eq!(percent_decode("a+b"), "a b");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }
}
