use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// How long a request manager waits for the worker to answer before
    /// giving up on the request
    pub request_timeout: Duration,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl StoreOptions {
    pub fn set_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(2),
        }
    }
}

#[cfg(test)]
impl StoreOptions {
    pub fn new_test() -> Self {
        // CI machines can stall for seconds at a time
        StoreOptions::default().set_request_timeout(Duration::from_secs(10))
    }
}
