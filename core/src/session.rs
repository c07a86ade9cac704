//! Session cookie captured from the probe response.

use std::fmt;

/// Joined `set-cookie` fragments, replayed verbatim as the `cookie` header.
///
/// Built once per client and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    cookie: String,
}

impl Session {
    /// Join fragments with `;` in the given order. `None` when there are none.
    pub fn from_set_cookie<'a, I>(fragments: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fragments: Vec<&str> = fragments.into_iter().collect();
        if fragments.is_empty() {
            return None;
        }
        Some(Self {
            cookie: fragments.join(";"),
        })
    }

    pub fn cookie(&self) -> &str {
        &self.cookie
    }

    /// `(name, value)` pair ready to push into `HttpRequest::headers`.
    pub(crate) fn header(&self) -> (String, String) {
        ("cookie".to_string(), self.cookie.clone())
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cookie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_fragment_is_kept_verbatim() {
        let session = Session::from_set_cookie(["a=1"]).unwrap();
        assert_eq!(session.cookie(), "a=1");
    }

    #[test]
    fn fragments_are_joined_in_order_without_spaces() {
        let session =
            Session::from_set_cookie(["JSESSIONID=abc; Path=/api", "theme=dark", "x=y"]).unwrap();
        assert_eq!(session.cookie(), "JSESSIONID=abc; Path=/api;theme=dark;x=y");
    }

    #[test]
    fn no_fragments_means_no_session() {
        assert!(Session::from_set_cookie(std::iter::empty::<&str>()).is_none());
    }

    #[test]
    fn header_pair_uses_cookie_name() {
        let session = Session::from_set_cookie(["a=1", "b=2"]).unwrap();
        assert_eq!(session.header(), ("cookie".to_string(), "a=1;b=2".to_string()));
        assert_eq!(session.to_string(), "a=1;b=2");
    }
}
