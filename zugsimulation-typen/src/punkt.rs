//! Punkte auf dem ganzzahligen Raster.

use std::fmt::{self, Display, Formatter};

use crate::{ausrichtung::Ausrichtung, richtung::Richtung};


/// Ein Punkt auf dem ganzzahligen Raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Punkt {
    /// x-Koordinate.
    pub x: i32,
    /// y-Koordinate.
    pub y: i32,
}

impl Punkt {
    /// Erzeuge einen neuen [`Punkt`].
    #[must_use]
    pub const fn neu(x: i32, y: i32) -> Punkt {
        Punkt { x, y }
    }

    /// Der um eine Einheit in `richtung` verschobene Punkt.
    ///
    /// Gibt [`None`] zurück, wenn der Punkt den darstellbaren Bereich verlassen würde.
    #[must_use]
    pub fn verschoben(&self, richtung: Richtung) -> Option<Punkt> {
        let Punkt { x, y } = *self;
        let (dx, dy) = richtung.delta();
        Some(Punkt { x: x.checked_add(dx)?, y: y.checked_add(dy)? })
    }

    /// Der um eine Einheit entgegen `richtung` verschobene Punkt.
    #[must_use]
    pub fn zurück(&self, richtung: Richtung) -> Option<Punkt> {
        self.verschoben(richtung.gegenteil())
    }

    /// Abstand entlang der gemeinsamen Achse.
    ///
    /// Gibt [`None`] zurück, wenn die Punkte keine [`Ausrichtung`] zueinander haben.
    #[must_use]
    pub fn abstand(&self, other: &Punkt) -> Option<u32> {
        match Ausrichtung::zwischen(self, other)? {
            Ausrichtung::Horizontal => Some(self.x.abs_diff(other.x)),
            Ausrichtung::Vertikal => Some(self.y.abs_diff(other.y)),
        }
    }

    /// Liegt der Punkt im (geschlossenen) Rechteck zwischen `ecke0` und `ecke1`?
    ///
    /// Für achsenparallele Ecken entspricht das der Strecke zwischen beiden Punkten.
    #[must_use]
    pub fn liegt_zwischen(&self, ecke0: &Punkt, ecke1: &Punkt) -> bool {
        /// Liegt `wert` zwischen `grenze0` und `grenze1`, unabhängig von der Reihenfolge der Grenzen.
        fn zwischen(grenze0: i32, grenze1: i32, wert: i32) -> bool {
            (grenze0.min(grenze1)..=grenze0.max(grenze1)).contains(&wert)
        }
        zwischen(ecke0.x, ecke1.x, self.x) && zwischen(ecke0.y, ecke1.y, self.y)
    }
}

impl Display for Punkt {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "({},{})", self.x, self.y)
    }
}
