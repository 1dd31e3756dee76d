use anyhow::{anyhow, Result};
use hyper::http::Uri;
use serde_json::Value;
use std::fmt;

/// Represents a validated URL
#[derive(Debug, Clone, PartialEq)]
pub struct Url(pub Uri);

impl Url {
    /// Creates a new Url with validation
    ///
    /// # Arguments
    /// * `url` - The URL string to parse
    ///
    /// # Returns
    /// * `Ok(Url)` - Validated URL
    /// * `Err(anyhow::Error)` - If the URL is invalid or is not an absolute http(s) URL
    pub fn new(url: &str) -> Result<Self> {
        let uri = url.parse::<Uri>().map_err(|e| anyhow!("Invalid URL: {}", e))?;
        match uri.scheme_str() {
            Some("http") | Some("https") => Ok(Url(uri)),
            _ => Err(anyhow!("URL must start with http:// or https://")),
        }
    }

    /// Returns the URL as a string
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    /// Appends a path segment, keeping any existing path
    pub fn join_segment(&self, segment: &str) -> Result<Self> {
        let base = self.as_str();
        Url::new(&format!("{}/{}", base.trim_end_matches('/'), segment))
    }

    /// Replaces the query string with the given key/value pairs, each
    /// percent-encoded
    pub fn with_query(&self, params: &[(String, String)]) -> Result<Self> {
        if params.is_empty() {
            return Ok(self.clone());
        }
        let base = self.as_str();
        let path = base.split('?').next().unwrap_or_default();
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&");
        Url::new(&format!("{}?{}", path, query))
    }
}

/// Percent-encodes everything outside the RFC 3986 unreserved set
fn encode_component(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a validated JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub String);

impl JsonBody {
    /// Creates a new JsonBody with validation
    ///
    /// # Arguments
    /// * `json` - The JSON string to validate
    ///
    /// # Returns
    /// * `Ok(JsonBody)` - Validated JSON
    /// * `Err(anyhow::Error)` - If the JSON is invalid
    pub fn new(json: &str) -> Result<Self> {
        serde_json::from_str::<Value>(json).map_err(|e| anyhow!("Invalid JSON: {}", e))?;
        Ok(JsonBody(json.to_string()))
    }

    /// Serializes a value into a JSON body
    pub fn from_value<T: serde::Serialize>(value: &T) -> Result<Self> {
        let json = serde_json::to_string(value).map_err(|e| anyhow!("Invalid JSON: {}", e))?;
        Ok(JsonBody(json))
    }
}

/// An integer strictly greater than zero (page, limit, todo id)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveInt(u64);

impl PositiveInt {
    pub fn new(value: u64, name: &str) -> Result<Self> {
        if value == 0 {
            return Err(anyhow!("{} should be a positive integer", name));
        }
        Ok(PositiveInt(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PositiveInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The characters of one input line, surrounding whitespace removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSequence(Vec<char>);

impl CharacterSequence {
    pub fn from_line(line: &str) -> Self {
        CharacterSequence(line.trim().chars().collect())
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_rejects_relative_and_unknown_schemes() {
        assert!(Url::new("/todos").is_err());
        assert!(Url::new("ftp://example.com/todos").is_err());
        assert!(Url::new("http://example.com/todos").is_ok());
    }

    #[test]
    fn join_segment_appends_without_doubling_slashes() {
        let url = Url::new("http://example.com/todos/").unwrap();
        assert_eq!(
            url.join_segment("7").unwrap().as_str(),
            "http://example.com/todos/7"
        );
    }

    #[test]
    fn with_query_keeps_parameter_order() {
        let url = Url::new("http://example.com/todos").unwrap();
        let params = vec![
            ("_page".to_string(), "2".to_string()),
            ("_limit".to_string(), "10".to_string()),
        ];
        assert_eq!(
            url.with_query(&params).unwrap().as_str(),
            "http://example.com/todos?_page=2&_limit=10"
        );
    }

    #[test]
    fn with_query_encodes_reserved_characters() {
        let url = Url::new("http://example.com/todos").unwrap();
        let params = vec![
            ("title".to_string(), "New todo&x=1".to_string()),
            ("q".to_string(), "é/?".to_string()),
        ];
        assert_eq!(
            url.with_query(&params).unwrap().as_str(),
            "http://example.com/todos?title=New%20todo%26x%3D1&q=%C3%A9%2F%3F"
        );
    }

    #[test]
    fn json_body_validates_input() {
        assert!(JsonBody::new("{\"a\": 1}").is_ok());
        assert!(JsonBody::new("{a: 1}").is_err());
    }

    #[test]
    fn positive_int_rejects_zero() {
        let err = PositiveInt::new(0, "id").unwrap_err();
        assert_eq!(err.to_string(), "id should be a positive integer");
        assert_eq!(PositiveInt::new(3, "id").unwrap().get(), 3);
    }

    #[test]
    fn character_sequence_strips_surrounding_whitespace() {
        let seq = CharacterSequence::from_line("  a b\t\r");
        assert_eq!(seq.chars(), &['a', ' ', 'b']);
        assert!(CharacterSequence::from_line(" \t ").is_empty());
    }
}
