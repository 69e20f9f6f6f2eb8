//! Ausrichtung zweier Punkte zueinander.

use crate::punkt::Punkt;

/// Ausrichtung entlang einer Koordinaten-Achse.
///
/// Identische oder nicht achsenparallele Punkt-Paare haben keine Ausrichtung,
/// was durch [`None`] dargestellt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ausrichtung {
    /// Parallel zur x-Achse.
    Horizontal,
    /// Parallel zur y-Achse.
    Vertikal,
}

impl Ausrichtung {
    /// Bestimme die Ausrichtung der Verbindung zwischen zwei Punkten.
    #[must_use]
    pub fn zwischen(punkt0: &Punkt, punkt1: &Punkt) -> Option<Ausrichtung> {
        if punkt0 == punkt1 {
            None
        } else if punkt0.y == punkt1.y {
            Some(Ausrichtung::Horizontal)
        } else if punkt0.x == punkt1.x {
            Some(Ausrichtung::Vertikal)
        } else {
            None
        }
    }
}
