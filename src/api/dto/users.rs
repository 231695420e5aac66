//! DTOs for the Users endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{DisplayFromStr, serde_as};
use url::form_urlencoded;

use crate::domain::entities::{DEFAULT_PAGE_SIZE, UserQuery};

/// Query parameters for `GET /users`.
///
/// Parameter names follow the Backendless REST conventions so callers can
/// reuse the same query strings against either service.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, rename = "pageSize")]
    pub page_size: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<i64>,

    #[serde(default, rename = "where")]
    pub where_clause: Option<String>,

    #[serde(default, rename = "sortBy")]
    pub sort_by: Option<String>,
}

impl ListUsersParams {
    /// Parses a raw query string. When a key repeats, its first value wins.
    ///
    /// # Errors
    ///
    /// Returns an error if `pageSize` or `offset` is not an integer.
    pub fn from_query(raw: Option<&str>) -> Result<Self, serde_json::Error> {
        let mut fields = Map::new();
        for (key, value) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            fields
                .entry(key.into_owned())
                .or_insert(Value::String(value.into_owned()));
        }

        serde_json::from_value(Value::Object(fields))
    }
}

impl From<ListUsersParams> for UserQuery {
    fn from(params: ListUsersParams) -> Self {
        UserQuery::new(
            params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            params.offset.unwrap_or(0),
        )
        .with_where(params.where_clause)
        .with_sort_by(params.sort_by)
    }
}

/// Confirmation returned by `DELETE /users/{id}`.
///
/// Backendless answers deletes with differing bodies depending on plan, so the
/// proxy always replies with this shape instead.
#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub deleted: bool,
    #[serde(rename = "objectId")]
    pub object_id: String,
}
