//! Ids zur Identifikation von Gleisen und Zügen.
//!
//! Es wird immer die kleinste, aktuell nicht verwendete positive Zahl vergeben.
//! Nach dem Entfernen eines Elements wird seine Id wieder frei.

// Erlaube id::{Id, KeineIdVerfügbar, Repräsentation}
#![allow(clippy::pub_use)]

pub mod eindeutig;

pub use eindeutig::{Id, KeineIdVerfügbar, Repräsentation};
