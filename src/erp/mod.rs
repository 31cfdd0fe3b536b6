//! ERP API access.
//!
//! The data path is fetch first, interpret later: [`ErpClient`] pulls
//! raw JSON into a [`RawSnapshot`] and the `normalize` module turns
//! that into typed models.

mod client;
mod snapshot;

pub use client::ErpClient;
pub use snapshot::RawSnapshot;
