use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::listers::SponsorLister;
use crate::utils::{
    error::{ListerError, ListerResult},
    types::{Sponsor, User},
};

/// Deterministic lister backed by in-memory data, for tests and demos
#[derive(Debug, Clone, Default)]
pub struct MockSponsorLister {
    stubbed_sponsors: HashMap<User, Vec<Sponsor>>,
    stubbed_error: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MockSponsorLister {
    /// Create a lister that knows no users
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lister that fails every lookup with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            stubbed_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Register the sponsors returned for `user`
    pub fn with_sponsors(mut self, user: &str, sponsors: &[&str]) -> Self {
        self.stubbed_sponsors.insert(
            User::from(user),
            sponsors.iter().map(|s| Sponsor::from(*s)).collect(),
        );
        self
    }

    /// How many times `list_sponsors` has been called, across clones
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Shared counter, readable after the lister has been boxed away
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl SponsorLister for MockSponsorLister {
    async fn list_sponsors(&self, user: &User) -> ListerResult<Vec<Sponsor>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.stubbed_error {
            return Err(ListerError::Message(message.clone()));
        }

        // Unknown users have no sponsors
        Ok(self.stubbed_sponsors.get(user).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_lister_returns_stubbed_sponsors_in_order() {
        let lister = MockSponsorLister::new().with_sponsors("testusername", &["zed", "amy", "zed"]);

        let sponsors = lister.list_sponsors(&User::from("testusername")).await.unwrap();
        let names: Vec<&str> = sponsors.iter().map(|s| s.as_str()).collect();

        assert_eq!(names, vec!["zed", "amy", "zed"]);
        assert_eq!(lister.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_lister_unknown_user_is_empty() {
        let lister = MockSponsorLister::new().with_sponsors("someone", &["sponsor1"]);

        let sponsors = lister.list_sponsors(&User::from("nobody")).await.unwrap();
        assert!(sponsors.is_empty());
    }

    #[test]
    fn test_mock_lister_failure() {
        let lister = MockSponsorLister::failing("expected test error");
        let counter = lister.call_counter();

        let result = tokio_test::block_on(lister.list_sponsors(&User::from("testusername")));

        match result {
            Err(ListerError::Message(msg)) => assert_eq!(msg, "expected test error"),
            other => panic!("Expected Message error, got {:?}", other),
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
