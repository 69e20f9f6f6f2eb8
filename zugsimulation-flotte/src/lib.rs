//! Fahrzeuge (Loks und Wagen) und die daraus zusammengestellten Züge.

// Erlaube flotte::{Flotte, Fuhrpark, Zug, ...}
#![allow(clippy::pub_use)]

use zugsimulation_typen::ZugPosition;

pub mod fahrzeug;
pub mod flotte;
pub mod zug;

pub use self::{
    fahrzeug::{
        Fahrzeug, FahrzeugArt, FahrzeugFehler, FahrzeugName, LokArt, UngültigeFahrzeugArt,
        UngültigerFahrzeugName, WagenArt,
    },
    flotte::{AnkuppelnFehler, Flotte},
    zug::{Zug, ZugId},
};

/// Zugriff auf alle Züge, ihre Länge und aktuelle Position.
///
/// Die Simulation liest und schreibt Züge ausschließlich über dieses Trait.
pub trait Fuhrpark {
    /// Alle Züge, unabhängig davon ob sie auf den Gleisen stehen.
    fn züge(&self) -> Vec<ZugId>;

    /// Die Länge eines Zuges, falls er existiert.
    fn länge(&self, zug: &ZugId) -> Option<u64>;

    /// Die aktuelle Position eines Zuges, [`None`] falls er nicht auf den Gleisen steht.
    fn position(&self, zug: &ZugId) -> Option<ZugPosition>;

    /// Setze die aktuelle Position eines Zuges. Unbekannte Züge werden ignoriert.
    fn setze_position(&mut self, zug: &ZugId, position: Option<ZugPosition>);

    /// Alle Züge, die aktuell auf den Gleisen stehen.
    fn auf_gleisen(&self) -> Vec<ZugId> {
        self.züge().into_iter().filter(|zug| self.position(zug).is_some()).collect()
    }
}
