//! BearerToken - The caller's credential, forwarded verbatim upstream

/// A non-empty bearer token taken from an Authorization header
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Extract the token from a raw header value.
    ///
    /// A leading "Bearer " is stripped when present. Missing, empty or
    /// blank values yield `None`.
    pub fn from_authorization(header: Option<&str>) -> Option<Self> {
        let raw = header?.trim();
        let token = match raw.split_once(' ') {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
            // A bare scheme whose token was trimmed away
            _ if raw.eq_ignore_ascii_case("bearer") => "",
            _ => raw,
        };

        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the secret itself
impl core::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BearerToken(***)")
    }
}
