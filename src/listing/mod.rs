//! Filtered, paginated collection views shared by every list page.

pub mod collections;
pub mod controller;
pub mod pages;
pub mod search;

pub use controller::{
    CollectionDescriptor, CollectionView, FetchParams, FilterPolicy, PaginationMode, QueryState,
    RecordSet,
};
pub use pages::PageResult;
