//! Scripted collaborators for unit tests.

use crate::error::{ReconError, ReconResult};
use crate::runner::ToolRunner;
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use vulnscout_core::{LookupOutcome, VulnerabilitySource, Vulnerability};

struct Script {
    target: Option<String>,
    output: Result<String, i32>,
    delay: Duration,
}

/// Scanner stand-in answering from canned output, keyed on the last argument
pub struct FakeRunner {
    scripts: Vec<Script>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeRunner {
    pub fn ok(output: &str) -> Self {
        Self::with_fallback(Ok(output.to_string()))
    }

    pub fn failing(status: i32) -> Self {
        Self::with_fallback(Err(status))
    }

    fn with_fallback(output: Result<String, i32>) -> Self {
        Self {
            scripts: vec![Script {
                target: None,
                output,
                delay: Duration::ZERO,
            }],
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer `target` with `output` after `delay`
    pub fn target(mut self, target: &str, output: Result<&str, i32>, delay: Duration) -> Self {
        self.scripts.insert(
            0,
            Script {
                target: Some(target.to_string()),
                output: output.map(str::to_string),
                delay,
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ToolRunner for FakeRunner {
    fn name(&self) -> &str {
        "fake-nmap"
    }

    async fn run(&self, args: &[String]) -> ReconResult<String> {
        self.calls.lock().unwrap().push(args.to_vec());
        let last = args.last().map(String::as_str);
        let script = self
            .scripts
            .iter()
            .find(|s| s.target.is_none() || s.target.as_deref() == last)
            .expect("fallback script");

        tokio::time::sleep(script.delay).await;
        script.output.clone().map_err(|status| ReconError::ToolFailed {
            tool: "fake-nmap".to_string(),
            status: Some(status),
            stderr: "scripted failure".to_string(),
        })
    }
}

/// Vulnerability source answering from a fixed table of `service version` keys
#[derive(Default)]
pub struct FakeSource {
    answers: Vec<(String, LookupOutcome)>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeSource {
    pub fn answer(mut self, service: &str, version: &str, ids: &[&str]) -> Self {
        let records = ids.iter().map(|id| Vulnerability::new(*id, format!("{id} summary"))).collect();
        self.answers
            .push((format!("{service} {version}"), LookupOutcome::Found(records)));
        self
    }

    pub fn fail(mut self, service: &str, version: &str) -> Self {
        self.answers.push((
            format!("{service} {version}"),
            LookupOutcome::Failed {
                reason: "HTTP 500".to_string(),
            },
        ));
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VulnerabilitySource for FakeSource {
    async fn lookup(&self, service: &str, version: &str) -> LookupOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((service.to_string(), version.to_string()));
        let key = format!("{service} {version}");
        self.answers
            .iter()
            .find(|(k, _)| *k == key)
            .map_or_else(|| LookupOutcome::Found(Vec::new()), |(_, outcome)| outcome.clone())
    }
}
