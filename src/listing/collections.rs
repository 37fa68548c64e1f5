//! Per-collection descriptors: searchable fields, filter field, page size and
//! where pagination happens.

use std::borrow::Cow;

use crate::domain::customer::Customer;
use crate::domain::order::Order;
use crate::domain::product::Product;
use crate::domain::review::Review;
use crate::domain::variant::Variant;
use crate::listing::controller::{CollectionDescriptor, FilterPolicy, PaginationMode};
use crate::listing::search::FieldAccessor;

fn customer_name(c: &Customer) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(c.name.as_str()))
}

fn customer_email(c: &Customer) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(c.email.as_str()))
}

fn customer_id(c: &Customer) -> Option<Cow<'_, str>> {
    Some(Cow::Owned(c.id.to_string()))
}

const CUSTOMER_FIELDS: &[FieldAccessor<Customer>] = &[customer_name, customer_email, customer_id];

/// Customers: searched by name, email and id; five per page.
pub const CUSTOMERS: CollectionDescriptor<Customer> = CollectionDescriptor {
    name: "customers",
    fields: CUSTOMER_FIELDS,
    filter_field: None,
    pagination_mode: PaginationMode::Client,
    page_size: 5,
    filter_policy: FilterPolicy::ClearsSearch,
};

fn review_user(r: &Review) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(r.user_name.as_str()))
}

fn review_product(r: &Review) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(r.product_name.as_str()))
}

fn review_comment(r: &Review) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(r.comment.as_str()))
}

const REVIEW_FIELDS: &[FieldAccessor<Review>] = &[review_user, review_product, review_comment];

/// Reviews: searched by user, product and comment; five per page.
pub const REVIEWS: CollectionDescriptor<Review> = CollectionDescriptor {
    name: "reviews",
    fields: REVIEW_FIELDS,
    filter_field: None,
    pagination_mode: PaginationMode::Client,
    page_size: 5,
    filter_policy: FilterPolicy::ClearsSearch,
};

fn variant_name(v: &Variant) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(v.name.as_str()))
}

fn variant_size(v: &Variant) -> Option<Cow<'_, str>> {
    v.size.as_deref().map(Cow::Borrowed)
}

fn variant_product(v: &Variant) -> Option<Cow<'_, str>> {
    Some(Cow::Owned(v.product_id.to_string()))
}

const VARIANT_FIELDS: &[FieldAccessor<Variant>] = &[variant_name, variant_size];

/// Variants: filtered by product id, ten per page. Picking a product clears
/// the search box.
pub const VARIANTS: CollectionDescriptor<Variant> = CollectionDescriptor {
    name: "variants",
    fields: VARIANT_FIELDS,
    filter_field: Some(variant_product),
    pagination_mode: PaginationMode::Client,
    page_size: 10,
    filter_policy: FilterPolicy::ClearsSearch,
};

fn product_category(p: &Product) -> Option<Cow<'_, str>> {
    p.category_id.map(|id| Cow::Owned(id.to_string()))
}

/// Products: filtered by category and paginated by the backend, ten per page.
/// The backend has no product search, so there are no searchable fields.
pub const PRODUCTS: CollectionDescriptor<Product> = CollectionDescriptor {
    name: "products",
    fields: &[],
    filter_field: Some(product_category),
    pagination_mode: PaginationMode::Server,
    page_size: 10,
    filter_policy: FilterPolicy::ClearsSearch,
};

fn order_customer(o: &Order) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(o.customer_name.as_str()))
}

fn order_status(o: &Order) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(o.status.as_str()))
}

const ORDER_FIELDS: &[FieldAccessor<Order>] = &[order_customer];

/// Orders: searched by customer name and filtered by fulfillment status, five
/// per page. The status filter and the search box combine.
pub const ORDERS: CollectionDescriptor<Order> = CollectionDescriptor {
    name: "orders",
    fields: ORDER_FIELDS,
    filter_field: Some(order_status),
    pagination_mode: PaginationMode::Client,
    page_size: 5,
    filter_policy: FilterPolicy::KeepsSearch,
};
