use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::request::Pagination;

#[derive(Deserialize, ToSchema, IntoParams)]
pub struct GetCategoryPostsParam {
    #[serde(flatten)]
    pub pagination: Pagination,
}
