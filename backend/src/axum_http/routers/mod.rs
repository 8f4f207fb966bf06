pub mod admin_auth;
pub mod blogs;
pub mod checkout;
pub mod content;
pub mod coupons;
pub mod leads;
pub mod packages;
pub mod payment_trackings;
pub mod testimonials;
