//! Repository-related operations

use crate::client::GitHubClient;
use crate::error::{GitHubError, Result};
use crate::paginate::Item;
use crate::util::first_item;
use std::collections::BTreeMap;

impl GitHubClient {
    /// Pass-through for `GET /repos/:owner/:repo`
    pub async fn repository(&self, owner: &str, repo: &str) -> Result<Item> {
        let query = format!("repos/{}/{}", owner, repo);
        let items = self.get_all(&query).await?;
        first_item(&query, items)
    }

    /// Bytes of code per language for a repository
    ///
    /// The endpoint answers with a single object keyed by language name, which
    /// the fetch loop wraps into a one-element sequence.
    pub async fn repository_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<BTreeMap<String, u64>> {
        let query = format!("repos/{}/{}/languages", owner, repo);
        let items = self.get_all(&query).await?;
        let languages = first_item(&query, items)?;

        languages
            .into_iter()
            .map(|(language, bytes)| match bytes.as_u64() {
                Some(bytes) => Ok((language, bytes)),
                None => Err(GitHubError::UnexpectedType {
                    field: language,
                    expected: "a byte count",
                }),
            })
            .collect()
    }
}
