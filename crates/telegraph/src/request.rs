// ABOUTME: API request description: endpoint, access-token requirement, form params and headers.
// ABOUTME: RequestOption closures let callers adjust a request (e.g. headers) before it is sent.

use std::fmt::Display;

/// A request to a single API method.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub(crate) endpoint: String,
    pub(crate) secured: bool,
    pub(crate) form: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
}

impl Request {
    pub(crate) fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Mark the request as needing the client's access token.
    pub(crate) fn secured(mut self) -> Self {
        self.secured = true;
        self
    }

    /// Set a form param, replacing an earlier value for the same key.
    pub(crate) fn set_form_param(&mut self, key: &str, value: impl Display) {
        let value = value.to_string();
        match self.form.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.form.push((key.to_string(), value)),
        }
    }

    /// Set a form param only when the value is non-empty.
    pub(crate) fn set_form_param_if(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.set_form_param(key, value);
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn form(&self) -> &[(String, String)] {
        &self.form
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the value of a form param.
    pub fn form_param(&self, key: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Adjusts a request before it is sent.
pub type RequestOption = Box<dyn Fn(&mut Request) + Send + Sync>;

/// Add a header to the request. With `replace`, earlier values of the same
/// header (case-insensitive) are removed first.
pub fn with_header(
    key: impl Into<String>,
    value: impl Into<String>,
    replace: bool,
) -> RequestOption {
    let key = key.into();
    let value = value.into();
    Box::new(move |req: &mut Request| {
        if replace {
            req.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&key));
        }
        req.headers.push((key.clone(), value.clone()));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_form_param_replaces() {
        let mut req = Request::new("getViews/Sample-Page-12-15");
        req.set_form_param("year", 2016);
        req.set_form_param("year", 2017);
        assert_eq!(req.form(), &[("year".to_string(), "2017".to_string())]);
    }

    #[test]
    fn set_form_param_if_skips_empty() {
        let mut req = Request::new("createAccount");
        req.set_form_param_if("author_name", "");
        req.set_form_param_if("author_url", "https://t.me/x");
        assert_eq!(req.form_param("author_name"), None);
        assert_eq!(req.form_param("author_url"), Some("https://t.me/x"));
    }

    #[test]
    fn with_header_add_and_replace() {
        let mut req = Request::new("getPage/x");
        with_header("X-Tag", "a", false)(&mut req);
        with_header("X-Tag", "b", false)(&mut req);
        assert_eq!(req.headers().len(), 2);

        with_header("x-tag", "c", true)(&mut req);
        assert_eq!(req.headers(), &[("x-tag".to_string(), "c".to_string())]);
    }
}
