//! JSON payloads exchanged with the backend.
//!
//! Entity rows come straight from the database, so each DTO types the columns the client
//! relies on and keeps everything else in a flattened map.

pub mod api;
pub mod frete;
pub mod localidade;
pub mod transporte;
pub mod user;
