pub mod content;
pub mod coupons;
pub mod sanity_client;
