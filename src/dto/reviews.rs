use serde::Serialize;

use crate::domain::review::Review;
use crate::dto::listing::ListPage;

#[derive(Debug, Clone, Serialize)]
pub struct ReviewsPageData {
    pub reviews: ListPage<Review>,
}
