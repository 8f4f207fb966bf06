pub mod admin;
pub mod blogs;
pub mod checkout;
pub mod coupons;
pub mod enums;
pub mod leads;
pub mod packages;
pub mod payment_trackings;
pub mod testimonials;
