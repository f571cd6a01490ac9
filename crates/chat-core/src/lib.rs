//! Client-side chat logic: the view model, its synchronization with the
//! backend, and the pieces they share.

pub mod event_bus;
pub mod ports;
pub mod markdown;
pub mod requests;
pub mod view_model;
pub mod controller;
