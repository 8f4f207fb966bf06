pub mod discount_types;
pub mod lead_sources;
pub mod payment_channels;
pub mod payment_statuses;
