//! Server-rendered public pages.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Counts, latest approved reports, featured documents |
//! | GET | `/denuncias` | Most recent approved reports |
//! | GET | `/denunciar` | Submission form |
//! | POST | `/denunciar` | Submit, then redirect back with `gracias=1` or `error=1` |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod state;

pub use state::PageState;
