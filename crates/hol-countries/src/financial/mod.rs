//! Financial-market holiday entities.

mod ecb;
mod nyse;

pub use ecb::EuropeanCentralBank;
pub use nyse::NewYorkStockExchange;
