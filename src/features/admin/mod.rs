//! Moderator view of every report regardless of state. Read-only: state
//! transitions are made outside this service.

pub mod dtos;
pub mod handlers;
pub mod routes;
