use crate::application::builders::request_builder::RequestBuilder;
use crate::domain::entities::{Method, Request, Response, TodoCommand};
use crate::domain::permutation::PermutationSet;
use crate::domain::value_objects::{CharacterSequence, Url};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Trait for HTTP clients to enable mocking and dependency inversion
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response>;
}

/// Supplies the stripped lines of a file, all of them or none
#[cfg_attr(test, mockall::automock)]
pub trait LineSource {
    fn read_lines(&self, path: &Path) -> Result<Vec<CharacterSequence>>;
}

/// Injected logging sink
#[cfg_attr(test, mockall::automock)]
pub trait Logger {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Application service for the todos endpoint: builds, sends and checks requests
pub struct TodoService {
    http_client: Box<dyn HttpClient>,
    endpoint: Url,
}

impl TodoService {
    pub fn new(http_client: Box<dyn HttpClient>, endpoint: Url) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }

    /// Runs `command` and returns the parsed JSON the endpoint answered with
    pub async fn execute(&self, command: &TodoCommand) -> Result<Value> {
        let request = RequestBuilder::for_command(command, &self.endpoint)?.build()?;
        let response = self.send_request(request).await?;

        if !response.is_accepted() {
            return Err(anyhow!(
                "Bad response returned from API: {}",
                response.status
            ));
        }

        serde_json::from_str::<Value>(&response.body)
            .map_err(|e| anyhow!("Response body is not valid JSON: {}", e))
    }

    /// Sends a validated request through the underlying client
    pub async fn send_request(&self, request: Request) -> Result<Response> {
        RequestValidator::validate(&request)?;
        self.http_client.send(request).await
    }
}

/// Domain rules a request must satisfy before it goes on the wire
pub struct RequestValidator;

impl RequestValidator {
    pub fn validate(request: &Request) -> Result<()> {
        Self::validate_url(&request.url)?;
        Self::validate_method_body_combination(request)?;
        Ok(())
    }

    fn validate_url(url: &Url) -> Result<()> {
        match url.0.host() {
            Some(host) if !host.is_empty() => Ok(()),
            _ => Err(anyhow!("URL must have a host")),
        }
    }

    fn validate_method_body_combination(request: &Request) -> Result<()> {
        match (&request.method, &request.body) {
            (Method::Get, Some(_)) => Err(anyhow!("GET requests should not have a body")),
            (Method::Delete, Some(_)) => Err(anyhow!("DELETE requests should not have a body")),
            _ => Ok(()),
        }
    }
}

/// Writes the permutations of every line of a file
pub struct PermutationService {
    line_source: Box<dyn LineSource>,
    logger: Box<dyn Logger>,
}

impl PermutationService {
    pub fn new(line_source: Box<dyn LineSource>, logger: Box<dyn Logger>) -> Self {
        Self {
            line_source,
            logger,
        }
    }

    /// Writes one output line per non-empty input line and returns how many
    /// were written.
    ///
    /// A file that cannot be read is logged and yields no output; only a
    /// failing writer is reported as an error.
    pub fn permute_file<W: Write>(&self, path: &Path, out: &mut W) -> Result<usize> {
        let lines = match self.line_source.read_lines(path) {
            Ok(lines) => lines,
            Err(err) => {
                self.logger.error(&format!("Failed to read file: {:#}", err));
                return Ok(0);
            }
        };

        let mut written = 0;
        for line in &lines {
            if let Some(rendered) = PermutationSet::generate(line).output_line() {
                writeln!(out, "{}", rendered).context("Failed to write permutations")?;
                written += 1;
            }
        }
        out.flush().context("Failed to write permutations")?;
        Ok(written)
    }
}
