use async_trait::async_trait;

use crate::utils::{
    error::ListerResult,
    types::{Sponsor, User},
};

/// Capability that resolves a user to the logins of their sponsors.
///
/// Implementations must return sponsors in the order the source produced
/// them; callers render that order as-is.
#[async_trait]
pub trait SponsorLister: Send + Sync {
    /// Fetch the sponsors of `user`
    async fn list_sponsors(&self, user: &User) -> ListerResult<Vec<Sponsor>>;
}

