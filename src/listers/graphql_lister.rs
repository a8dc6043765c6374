use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::listers::{ApiClient, SponsorLister};
use crate::utils::{
    error::{ListerError, ListerResult},
    types::{Sponsor, User},
};

/// Sponsors of a user; the first page is the whole answer
pub const LIST_SPONSORS_QUERY: &str = r#"query ListSponsors($login: String!) {
  user(login: $login) {
    sponsors(first: 30) {
      nodes {
        ... on User { login }
        ... on Organization { login }
      }
    }
  }
}"#;

#[derive(Debug, Deserialize)]
struct ListSponsorsData {
    user: Option<SponsorableUser>,
}

#[derive(Debug, Deserialize)]
struct SponsorableUser {
    sponsors: SponsorConnection,
}

#[derive(Debug, Deserialize)]
struct SponsorConnection {
    #[serde(default)]
    nodes: Vec<Option<SponsorNode>>,
}

#[derive(Debug, Deserialize)]
struct SponsorNode {
    login: Option<String>,
}

/// Lister that asks the GitHub GraphQL API
#[derive(Debug, Clone)]
pub struct GraphQlSponsorClient {
    pub hostname: String,
    pub api_client: ApiClient,
}

impl GraphQlSponsorClient {
    pub fn new(hostname: &str, api_client: ApiClient) -> Self {
        Self {
            hostname: hostname.to_string(),
            api_client,
        }
    }
}

#[async_trait]
impl SponsorLister for GraphQlSponsorClient {
    async fn list_sponsors(&self, user: &User) -> ListerResult<Vec<Sponsor>> {
        debug!(user = %user, host = %self.hostname, "listing sponsors");

        let data: ListSponsorsData = self
            .api_client
            .graphql(
                &self.hostname,
                LIST_SPONSORS_QUERY,
                json!({ "login": user.as_str() }),
            )
            .await?;

        let sponsors = sponsors_from_data(data, user)?;
        debug!(count = sponsors.len(), "sponsors fetched");
        Ok(sponsors)
    }
}

fn sponsors_from_data(data: ListSponsorsData, user: &User) -> ListerResult<Vec<Sponsor>> {
    let sponsorable = data
        .user
        .ok_or_else(|| ListerError::UserNotFound(user.to_string()))?;

    let mut sponsors = Vec::with_capacity(sponsorable.sponsors.nodes.len());
    for node in sponsorable.sponsors.nodes {
        match node.and_then(|n| n.login) {
            Some(login) => sponsors.push(Sponsor::from(login)),
            None => warn!(user = %user, "skipping sponsor without a login"),
        }
    }

    Ok(sponsors)
}
