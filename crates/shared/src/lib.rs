//! Types shared by the portfolio catalog, the HTTP server and the clients.

pub mod contact;
pub mod domain;
pub mod error;
pub mod protocol;
pub mod route;
