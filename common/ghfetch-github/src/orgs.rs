//! Organization API operations
//!
//! Some of these are direct pass-throughs of GitHub endpoints, others
//! summarize the data those endpoints return.

use crate::client::GitHubClient;
use crate::error::Result;
use crate::paginate::Item;
use crate::util::{first_item, stringify_values, values_for_key};

impl GitHubClient {
    /// Pass-through for `GET /orgs/:org`
    pub async fn org(&self, org: &str) -> Result<Item> {
        let query = format!("orgs/{}", org);
        let items = self.get_all(&query).await?;
        first_item(&query, items)
    }

    /// Pass-through for `GET /orgs/:org/members`, across all pages
    pub async fn org_members(&self, org: &str) -> Result<Vec<Item>> {
        self.get_all(&format!("orgs/{}/members", org)).await
    }

    /// GitHub handles of every member of `org`, in API order
    ///
    /// Useful for iterating over all members and fetching more detailed stats.
    pub async fn org_member_handles(&self, org: &str) -> Result<Vec<String>> {
        let members = self.org_members(org).await?;
        let logins = values_for_key("login", &members)?;
        stringify_values("login", &logins)
    }
}
