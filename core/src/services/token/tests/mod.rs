mod builder_tests;

/// Replaces the first character of the signature segment with another
/// base64url character, so the decoded signature bytes change.
pub(super) fn tamper_signature(token: &str) -> String {
    let sig_start = token.rfind('.').unwrap() + 1;
    let mut tampered = token.to_string();
    let first = &token[sig_start..sig_start + 1];
    let replacement = if first == "A" { "B" } else { "A" };
    tampered.replace_range(sig_start..sig_start + 1, replacement);
    tampered
}
