pub mod admin_sessions;
pub mod admin_users;
pub mod blogs;
pub mod content;
pub mod coupons;
pub mod leads;
pub mod packages;
pub mod payment_trackings;
pub mod testimonials;
