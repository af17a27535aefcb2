/// Reads the leading base-10 integer of a plain-text response.
///
/// Surrounding whitespace is ignored and an optional sign is accepted. Text
/// after the leading digits is ignored, so `"12\n"` and `"12 "` both read as 12.
/// Returns `None` when there are no leading digits or the value does not fit
/// in an `i64`.
pub fn parse_integer(body: &str) -> Option<i64> {
    let body = body.trim();
    let sign_len = usize::from(body.starts_with(['+', '-']));
    let digits_len = body[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len() - sign_len);
    if digits_len == 0 {
        return None;
    }
    body[..sign_len + digits_len].parse().ok()
}
