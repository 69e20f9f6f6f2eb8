//! Ein Zug als nicht-leere Folge von Fahrzeugen.

use nonempty::NonEmpty;

use zugsimulation_id::Id;
use zugsimulation_typen::ZugPosition;

use crate::fahrzeug::FahrzeugName;

/// Eindeutige Id eines [`Zuges`](Zug).
pub type ZugId = Id<Zug>;

/// Ein Zug besitzt seine Fahrzeuge in Fahrtrichtung sortiert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zug {
    /// Die Fahrzeuge, beginnend an der Zugspitze.
    pub(crate) fahrzeuge: NonEmpty<FahrzeugName>,
    /// Die aktuelle Position, [`None`] wenn der Zug nicht auf den Gleisen steht.
    pub(crate) position: Option<ZugPosition>,
}

impl Zug {
    /// Die Fahrzeuge, beginnend an der Zugspitze.
    #[must_use]
    pub const fn fahrzeuge(&self) -> &NonEmpty<FahrzeugName> {
        &self.fahrzeuge
    }

    /// Die aktuelle Position.
    #[must_use]
    pub const fn position(&self) -> Option<ZugPosition> {
        self.position
    }

    /// Ein Zug kann nur platziert werden, wenn an einem Ende eine Lok steht.
    #[must_use]
    pub fn ist_gültig(&self) -> bool {
        self.fahrzeuge.first().ist_lok() || self.fahrzeuge.last().ist_lok()
    }
}
