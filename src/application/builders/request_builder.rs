use crate::domain::entities::{Method, NewTodo, Request, TodoCommand};
use crate::domain::value_objects::{JsonBody, Url};
use anyhow::{Result, anyhow};

pub struct RequestBuilder {
    method: Option<Method>,
    url: Option<Url>,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<JsonBody>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            url: None,
            segments: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Starts a request for `command` against the todos collection at `endpoint`
    pub fn for_command(command: &TodoCommand, endpoint: &Url) -> Result<Self> {
        let builder = Self::new()
            .method(command.method())
            .url(endpoint.clone())
            .header("Accept", "application/json");

        match command {
            TodoCommand::List { page, limit } => Ok(builder
                .query("_page", page)
                .query("_limit", limit)
                // no date field upstream, so newest-first paging goes by id
                .query("_sort", "id")
                .query("_order", "desc")),
            TodoCommand::Create => {
                builder.body(JsonBody::from_value(&NewTodo::default())?)
            }
            TodoCommand::Delete { id } => Ok(builder.segment(id)),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    pub fn segment(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: JsonBody) -> Result<Self> {
        if self.method == Some(Method::Get) {
            return Err(anyhow!("GET requests should not have a body"));
        }
        self.body = Some(body);
        Ok(self)
    }

    pub fn build(self) -> Result<Request> {
        let method = self.method.ok_or_else(|| anyhow!("Method is required"))?;
        let mut url = self.url.ok_or_else(|| anyhow!("URL is required"))?;
        for segment in &self.segments {
            url = url.join_segment(segment)?;
        }
        let url = url.with_query(&self.query)?;

        Ok(Request {
            method,
            url,
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
