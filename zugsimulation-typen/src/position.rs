//! Aktuelle Position eines Zuges.

use std::fmt::{self, Display, Formatter};

use crate::{punkt::Punkt, richtung::Richtung};

/// Position der Zugspitze und die Fahrtrichtung.
///
/// Die Richtung zeigt immer weg vom Gleis, von dem der Zug zuletzt gekommen ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZugPosition {
    /// Der Punkt der Zugspitze.
    pub punkt: Punkt,
    /// Die Fahrtrichtung.
    pub richtung: Richtung,
}

impl ZugPosition {
    /// Erzeuge eine neue [`ZugPosition`].
    #[must_use]
    pub const fn neu(punkt: Punkt, richtung: Richtung) -> ZugPosition {
        ZugPosition { punkt, richtung }
    }
}

impl Display for ZugPosition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} -> {:?}", self.punkt, self.richtung)
    }
}
