use std::{cell::RefCell, collections::HashMap, io};

use super::runner::{CommandRunner, RunnerError};

/// Canned runner for tests, keyed by the space joined argument list
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, Result<String, String>>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `args` with the given stdout
    pub fn with_output(mut self, args: &str, stdout: &str) -> Self {
        self.responses
            .insert(args.to_owned(), Ok(stdout.to_owned()));
        self
    }

    /// Respond to `args` with an io error
    pub fn with_error(mut self, args: &str, message: &str) -> Self {
        self.responses
            .insert(args.to_owned(), Err(message.to_owned()));
        self
    }

    /// Every argument list run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, args: &str) -> usize {
        self.calls.borrow().iter().filter(|i| *i == args).count()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, args: &[&str]) -> Result<Vec<u8>, RunnerError> {
        let key = args.join(" ");
        self.calls.borrow_mut().push(key.clone());
        match self.responses.get(&key) {
            Some(Ok(stdout)) => Ok(stdout.as_bytes().to_vec()),
            Some(Err(message)) => Err(RunnerError::Io(io::Error::other(message.clone()))),
            None => Err(RunnerError::NotFound(format!("mock response for `{key}`"))),
        }
    }
}
