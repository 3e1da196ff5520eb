//! User API operations

use crate::client::GitHubClient;
use crate::error::Result;
use crate::paginate::Item;
use crate::util::first_item;

impl GitHubClient {
    /// Pass-through for `GET /users/:user`
    pub async fn user(&self, user: &str) -> Result<Item> {
        let query = format!("users/{}", user);
        let items = self.get_all(&query).await?;
        first_item(&query, items)
    }

    /// Public repositories owned by `user`, across all pages
    pub async fn user_repos(&self, user: &str) -> Result<Vec<Item>> {
        self.get_all(&format!("users/{}/repos", user)).await
    }
}
