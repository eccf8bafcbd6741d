//! Common library exports shared by the frontend.

extern crate serde;


pub mod tag;
pub mod filter_state;
pub mod product_card;
