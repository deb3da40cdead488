//! Eventing - Service to UI Events

pub mod app_event;
