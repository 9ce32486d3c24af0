//! Property catalog: aggregation of a property's entities and classification of
//! rule components.

pub mod aggregate;
pub mod classify;

pub use aggregate::{fetch_details, filter_by_name, filter_by_publish_status, PropertyDetails};
pub use classify::{bucket_tags, classify, Bucket, ComponentBuckets};
