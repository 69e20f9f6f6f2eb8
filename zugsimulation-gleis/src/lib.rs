//! Gleise, Weichen und das daraus zusammengesetzte Gleisnetz.

// Erlaube gleis::{Gleis, GleisId, Gleisnetz, ...}
#![allow(clippy::pub_use)]

pub mod gleis;
pub mod netz;

pub use self::{
    gleis::{Gleis, GleisId},
    netz::{EntfernenFehler, Gleisnetz, WeicheStellenFehler},
};
