//! Die vier achsenparallelen Einheits-Richtungen.

use enum_iterator::Sequence;

use crate::ausrichtung::Ausrichtung;


/// Eine achsenparallele Einheits-Richtung.
///
/// Die Reihenfolge der Varianten bestimmt die Reihenfolge von [`enum_iterator::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum Richtung {
    /// (0,1)
    Oben,
    /// (1,0)
    Rechts,
    /// (0,-1)
    Unten,
    /// (-1,0)
    Links,
}

impl Richtung {
    /// Die Verschiebung (dx, dy) einer Einheit in diese Richtung.
    #[must_use]
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Richtung::Oben => (0, 1),
            Richtung::Rechts => (1, 0),
            Richtung::Unten => (0, -1),
            Richtung::Links => (-1, 0),
        }
    }

    /// Die entgegengesetzte Richtung.
    #[must_use]
    pub const fn gegenteil(&self) -> Richtung {
        match self {
            Richtung::Oben => Richtung::Unten,
            Richtung::Rechts => Richtung::Links,
            Richtung::Unten => Richtung::Oben,
            Richtung::Links => Richtung::Rechts,
        }
    }

    /// Die [`Ausrichtung`] einer Bewegung in diese Richtung.
    #[must_use]
    pub const fn ausrichtung(&self) -> Ausrichtung {
        match self {
            Richtung::Oben | Richtung::Unten => Ausrichtung::Vertikal,
            Richtung::Rechts | Richtung::Links => Ausrichtung::Horizontal,
        }
    }

    /// Bestimme die Richtung aus einer Verschiebung, nur das Vorzeichen ist relevant.
    ///
    /// Gibt [`None`] zurück, wenn die Verschiebung nicht achsenparallel ist oder (0,0) beträgt.
    #[must_use]
    pub fn aus_delta(dx: i32, dy: i32) -> Option<Richtung> {
        match (dx.signum(), dy.signum()) {
            (0, 1) => Some(Richtung::Oben),
            (1, 0) => Some(Richtung::Rechts),
            (0, -1) => Some(Richtung::Unten),
            (-1, 0) => Some(Richtung::Links),
            _ => None,
        }
    }
}
