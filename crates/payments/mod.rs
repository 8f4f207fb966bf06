pub mod razorpay_client;
pub mod upi;
