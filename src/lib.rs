//! FieldLine: informational services for feature phones over a short-code
//! menu channel and a freeform message channel.

pub mod api;
pub mod catalog;
pub mod error;
pub mod gateway;
pub mod intent;
pub mod menu;
pub mod models;
