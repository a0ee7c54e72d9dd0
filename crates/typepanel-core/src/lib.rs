#![forbid(unsafe_code)]

//! Core: pointer events and geometry shared by the panel runtime and its hosts.

pub mod event;
pub mod geometry;
