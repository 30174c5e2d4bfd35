//! Name-to-id resolution: free-text store and category names to the numeric
//! identifiers the catalog endpoints require.

use std::sync::LazyLock;

use regex::Regex;

use crate::client::NeweggClient;
use crate::error::NeweggError;
use crate::matching;
use crate::types::{Category, Store};

/// Rewrites "notebook"-style phrasing to the "laptop" terminology the
/// catalog's own store titles use. First occurrence only, case-insensitive,
/// trailing characters preserved ("Notebooks" becomes "laptops").
static NOTEBOOK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)notebook*").expect("valid regex"));

/// Topical buckets for store-title matching. A query sharing a bucket with a
/// store title outscores candidates with no bucket affinity; buckets never
/// exclude a candidate. Helps disambiguate titles with similar substrings.
static STORE_GROUPINGS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)hardware",
        r"(?i)ultrabook",
        r"(?i)pc",
        r"(?i)laptop",
        r"(?i)notebook",
        r"(?i)electronic",
        r"(?i)software",
        r"(?i)gam",
        r"(?i)cell",
        r"(?i)phone",
        r"(?i)home",
        r"(?i)outdoor",
        r"(?i)auto",
        r"(?i)office",
        r"(?i)accessories",
        r"(?i)services",
        r"(?i)market",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});

impl NeweggClient {
    /// Returns the store whose title best matches `name`, or `None` when
    /// `name` is absent or nothing matches.
    ///
    /// An absent `name` returns `Ok(None)` without any network call.
    ///
    /// # Errors
    ///
    /// Propagates any [`NeweggError`] from [`NeweggClient::stores`].
    pub async fn store_by_name(&self, name: Option<&str>) -> Result<Option<Store>, NeweggError> {
        let Some(name) = name else {
            return Ok(None);
        };
        let normalized = NOTEBOOK_RE.replace(name, "laptop");
        let stores = self.stores().await?;
        Ok(matching::resolve(Some(normalized.as_ref()), stores, &STORE_GROUPINGS).cloned())
    }

    /// Same as [`NeweggClient::store_by_name`], projected to the store id.
    ///
    /// # Errors
    ///
    /// Propagates any [`NeweggError`] from [`NeweggClient::stores`].
    pub async fn store_id_by_name(&self, name: Option<&str>) -> Result<Option<i64>, NeweggError> {
        Ok(self.store_by_name(name).await?.map(|store| store.store_id))
    }

    /// Returns the category (within `store_id`) whose description best
    /// matches `name`, or `None` when `name` is absent or nothing matches.
    ///
    /// An absent `name` returns `Ok(None)` without any network call; an
    /// absent `store_id` yields an empty candidate list (see
    /// [`NeweggClient::categories`]), so the result is also `None`.
    ///
    /// # Errors
    ///
    /// Propagates any [`NeweggError`] from [`NeweggClient::categories`].
    pub async fn category_by_name(
        &self,
        name: Option<&str>,
        store_id: Option<i64>,
    ) -> Result<Option<Category>, NeweggError> {
        if name.is_none() {
            return Ok(None);
        }
        let categories = self.categories(store_id).await?;
        Ok(matching::resolve(name, &categories, &[]).cloned())
    }

    /// Same as [`NeweggClient::category_by_name`], projected to the
    /// category id.
    ///
    /// # Errors
    ///
    /// Propagates any [`NeweggError`] from [`NeweggClient::categories`].
    pub async fn category_id_by_name(
        &self,
        name: Option<&str>,
        store_id: Option<i64>,
    ) -> Result<Option<i64>, NeweggError> {
        Ok(self
            .category_by_name(name, store_id)
            .await?
            .map(|category| category.category_id))
    }
}
