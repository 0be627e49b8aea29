//! Clients for the three external collaborators: the ENS resolver (via an
//! Ethereum RPC), the Coinbase Exchange product catalog, and the CDP SQL
//! API (plus its per-call JWT auth).

pub mod auth;
pub mod ens;
pub mod price;
pub mod sql;

pub use ens::EnsClient;
pub use price::PriceClient;
pub use sql::SqlClient;
