pub mod admin_sessions;
pub mod admin_users;
pub mod blogs;
pub mod leads;
pub mod packages;
pub mod payment_trackings;
pub mod testimonials;
