// Order relay: recomputes the advisory price and forwards the order to the
// external order backend. All backend calls go through `client`.

pub mod client;
pub mod handlers;
pub mod relay;
