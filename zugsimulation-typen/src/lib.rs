//! Geometrische Grundtypen auf dem ganzzahligen Raster.

// Erlaube typen::{Punkt, Richtung, Ausrichtung, ZugPosition}
#![allow(clippy::pub_use)]

pub mod ausrichtung;
pub mod position;
pub mod punkt;
pub mod richtung;

pub use self::{
    ausrichtung::Ausrichtung, position::ZugPosition, punkt::Punkt, richtung::Richtung,
};
