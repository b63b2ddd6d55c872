//! Static reference data

pub mod countries;
