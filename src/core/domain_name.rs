/// Returns the text after the last `@`, or the whole input when there is none.
///
/// This is a plain string transform with no notion of email validity, so it
/// never fails: `"notanemail"` maps to itself and `""` maps to `""`.
pub fn extract_domain(email: &str) -> &str {
    match email.rsplit_once('@') {
        Some((_, domain)) => domain,
        None => email,
    }
}
