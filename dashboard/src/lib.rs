#![deny(clippy::all, clippy::cargo)]
#![warn(clippy::nursery, clippy::pedantic)]
#![allow(clippy::cargo_common_metadata, clippy::multiple_crate_versions)]

pub mod refresh_loop;
pub mod refresher;
pub mod telemetry;
pub mod text_surface;
