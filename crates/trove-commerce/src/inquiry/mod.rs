//! Inquiry types submitted from the shop front.

mod order;
mod wish;

pub use order::OrderRequest;
pub use wish::WishRequest;
