use serde::Serialize;

use crate::domain::customer::Customer;
use crate::dto::listing::ListPage;

#[derive(Debug, Clone, Serialize)]
pub struct CustomersPageData {
    pub customers: ListPage<Customer>,
}
