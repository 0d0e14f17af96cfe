mod client;
mod records;

pub use client::{ApiClient, Endpoint};
pub use records::{Expense, Invoice};
