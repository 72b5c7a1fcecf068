//! Dart-facing bindings for cxbridge, generated through flutter_rust_bridge.

pub mod api;
