//! Newegg catalog wire types.
//!
//! [`Store`] and [`Category`] model the JSON records returned by the
//! `Stores.egg` endpoints. [`SearchOptions`] is the caller-facing option set
//! for advanced search; [`SearchRequest`] is the exact body the
//! `Search.egg/Advanced` endpoint expects.

use serde::{Deserialize, Serialize};

use crate::matching::MatchText;

/// A top-level catalog division ("store department"), e.g. "Computer Hardware".
///
/// Decoded once from the stores listing and never mutated; identity is
/// [`Store::store_id`].
#[derive(Debug, Clone, Deserialize)]
pub struct Store {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "StoreDepa")]
    pub department: String,
    #[serde(rename = "StoreID")]
    pub store_id: i64,
    #[serde(rename = "ShowSeeAllDeals", default)]
    pub show_see_all_deals: bool,
}

impl MatchText for Store {
    fn match_text(&self) -> &str {
        &self.title
    }
}

/// A subdivision within a store, keyed by description and numeric id.
///
/// `store_id` references the owning [`Store`]; it is a foreign relation,
/// not ownership.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "CategoryType")]
    pub category_type: String,
    #[serde(rename = "CategoryID")]
    pub category_id: i64,
    #[serde(rename = "StoreID")]
    pub store_id: i64,
    #[serde(rename = "ShowSeeAllDeals", default)]
    pub show_see_all_deals: bool,
    #[serde(rename = "NodeId", default)]
    pub node_id: String,
}

impl MatchText for Category {
    fn match_text(&self) -> &str {
        &self.description
    }
}

/// Caller-supplied options for [`crate::NeweggClient::search`].
///
/// Every field is optional and `None` means "use the default"
/// (`store_id`/`category_id`/`sub_category_id`/`node_id` default to `-1`,
/// `page_number` to `1`, `sort` to `"FEATURED"`, `keywords` to `""`), so an
/// explicitly unset option and an omitted one produce the same wire request.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub store_id: Option<i64>,
    pub category_id: Option<i64>,
    pub sub_category_id: Option<i64>,
    pub node_id: Option<i64>,
    pub page_number: Option<u32>,
    pub sort: Option<String>,
    pub keywords: Option<String>,
}

/// Wire body for `POST /Search.egg/Advanced/`.
///
/// Field names match the endpoint's expected keys exactly, including the
/// lowercase `isGuideAdvanceSearch` oddity. `IsSubCategorySearch` is derived
/// from the defaulted `sub_category_id`, never hardcoded.
#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct SearchRequest {
    #[serde(rename = "IsUPCCodeSearch")]
    pub(crate) is_upc_code_search: bool,
    #[serde(rename = "IsSubCategorySearch")]
    pub(crate) is_sub_category_search: bool,
    #[serde(rename = "isGuideAdvanceSearch")]
    pub(crate) is_guide_advance_search: bool,
    #[serde(rename = "StoreDepaId")]
    pub(crate) store_depa_id: i64,
    #[serde(rename = "CategoryId")]
    pub(crate) category_id: i64,
    #[serde(rename = "SubCategoryId")]
    pub(crate) sub_category_id: i64,
    #[serde(rename = "NodeId")]
    pub(crate) node_id: i64,
    #[serde(rename = "BrandId")]
    pub(crate) brand_id: i64,
    #[serde(rename = "NValue")]
    pub(crate) n_value: String,
    #[serde(rename = "Keyword")]
    pub(crate) keyword: String,
    #[serde(rename = "Sort")]
    pub(crate) sort: String,
    #[serde(rename = "PageNumber")]
    pub(crate) page_number: u32,
}

impl From<&SearchOptions> for SearchRequest {
    fn from(options: &SearchOptions) -> Self {
        let sub_category_id = options.sub_category_id.unwrap_or(-1);
        Self {
            is_upc_code_search: false,
            is_sub_category_search: sub_category_id > 0,
            is_guide_advance_search: false,
            store_depa_id: options.store_id.unwrap_or(-1),
            category_id: options.category_id.unwrap_or(-1),
            sub_category_id,
            node_id: options.node_id.unwrap_or(-1),
            brand_id: -1,
            n_value: String::new(),
            keyword: options.keywords.clone().unwrap_or_default(),
            sort: options
                .sort
                .clone()
                .unwrap_or_else(|| "FEATURED".to_owned()),
            page_number: options.page_number.unwrap_or(1),
        }
    }
}
