//! Gerade Gleise und Weichen.

use enum_iterator::all;

use zugsimulation_id::Id;
use zugsimulation_typen::{Ausrichtung, Punkt, Richtung};

#[cfg(test)]
mod test;

/// Eindeutige Id eines [`Gleises`](Gleis) im [`Gleisnetz`](crate::netz::Gleisnetz).
pub type GleisId = Id<Gleis>;

/// Ein achsenparalleles Gleisstück.
///
/// Die Anschlüsse eines Gleises ändern sich nicht. Bei einer Weiche bestimmt das aktive Ende,
/// welche Punkte zum Gleis gehören.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gleis {
    /// Ein gerades Gleis mit zwei Anschlüssen.
    Gerade {
        /// Der Anfang des Gleises.
        anfang: Punkt,
        /// Das Ende des Gleises.
        ende: Punkt,
    },
    /// Eine Weiche mit einem gemeinsamen Anfang und zwei möglichen Enden.
    Weiche {
        /// Der gemeinsame Anfang.
        anfang: Punkt,
        /// Das erste mögliche Ende.
        ende0: Punkt,
        /// Das zweite mögliche Ende.
        ende1: Punkt,
        /// Das aktuell aktive Ende, anfangs nicht gestellt.
        aktiv: Option<Punkt>,
    },
}

impl Gleis {
    /// Erzeuge ein neues gerades Gleis.
    #[must_use]
    pub const fn gerade(anfang: Punkt, ende: Punkt) -> Gleis {
        Gleis::Gerade { anfang, ende }
    }

    /// Erzeuge eine neue, noch nicht gestellte Weiche.
    #[must_use]
    pub const fn weiche(anfang: Punkt, ende0: Punkt, ende1: Punkt) -> Gleis {
        Gleis::Weiche { anfang, ende0, ende1, aktiv: None }
    }

    /// Ist das Gleis eine Weiche?
    #[must_use]
    pub const fn ist_weiche(&self) -> bool {
        matches!(self, Gleis::Weiche { .. })
    }

    /// Der Anfang des Gleises.
    #[must_use]
    pub const fn anfang(&self) -> Punkt {
        match self {
            Gleis::Gerade { anfang, .. } | Gleis::Weiche { anfang, .. } => *anfang,
        }
    }

    /// Das effektive Ende des Gleises.
    ///
    /// Eine nicht gestellte Weiche hat kein Ende.
    #[must_use]
    pub const fn ende(&self) -> Option<Punkt> {
        match self {
            Gleis::Gerade { ende, .. } => Some(*ende),
            Gleis::Weiche { aktiv, .. } => *aktiv,
        }
    }

    /// Alle Anschlüsse des Gleises, unabhängig von der Stellung einer Weiche.
    pub fn anschlüsse(&self) -> impl Iterator<Item = Punkt> {
        let (anfang, ende0, ende1) = match self {
            Gleis::Gerade { anfang, ende } => (*anfang, *ende, None),
            Gleis::Weiche { anfang, ende0, ende1, .. } => (*anfang, *ende0, Some(*ende1)),
        };
        [Some(anfang), Some(ende0), ende1].into_iter().flatten()
    }

    /// Alle festen Strecken des Gleises, bei einer Weiche beide Zweige.
    pub fn strecken(&self) -> impl Iterator<Item = (Punkt, Punkt)> {
        let (anfang, ende0, ende1) = match self {
            Gleis::Gerade { anfang, ende } => (*anfang, *ende, None),
            Gleis::Weiche { anfang, ende0, ende1, .. } => (*anfang, *ende0, Some(*ende1)),
        };
        [Some((anfang, ende0)), ende1.map(|ende1| (anfang, ende1))].into_iter().flatten()
    }

    /// Ist `punkt` ein Anschluss des Gleises?
    #[must_use]
    pub fn hat_anschluss(&self, punkt: &Punkt) -> bool {
        self.anschlüsse().any(|anschluss| anschluss == *punkt)
    }

    /// Liegt `punkt` auf dem Gleis (einschließlich der Enden)?
    ///
    /// Eine nicht gestellte Weiche enthält keine Punkte.
    #[must_use]
    pub fn enthält(&self, punkt: &Punkt) -> bool {
        self.ende().is_some_and(|ende| punkt.liegt_zwischen(&self.anfang(), &ende))
    }

    /// Ist `punkt` der Anfang oder das effektive Ende des Gleises?
    #[must_use]
    pub fn ist_ende(&self, punkt: &Punkt) -> bool {
        self.anfang() == *punkt || self.ende() == Some(*punkt)
    }

    /// Alle Richtungen, in die man sich von `punkt` aus einen Schritt auf dem Gleis bewegen kann.
    pub fn verfügbare_richtungen<'t>(
        &'t self,
        punkt: &'t Punkt,
    ) -> impl 't + Iterator<Item = Richtung> {
        all::<Richtung>().filter(move |richtung| {
            self.enthält(punkt)
                && punkt.verschoben(*richtung).is_some_and(|nächster| self.enthält(&nächster))
        })
    }

    /// Die [`Ausrichtung`] zwischen Anfang und effektivem Ende.
    #[must_use]
    pub fn ausrichtung(&self) -> Option<Ausrichtung> {
        Ausrichtung::zwischen(&self.anfang(), &self.ende()?)
    }

    /// Die Länge zwischen Anfang und effektivem Ende.
    ///
    /// Eine nicht gestellte Weiche hat keine Länge.
    #[must_use]
    pub fn länge(&self) -> Option<u32> {
        self.anfang().abstand(&self.ende()?)
    }

    /// Ist `punkt` eines der beiden möglichen Enden einer Weiche?
    #[must_use]
    pub fn ist_weichen_ende(&self, punkt: &Punkt) -> bool {
        match self {
            Gleis::Gerade { .. } => false,
            Gleis::Weiche { ende0, ende1, .. } => ende0 == punkt || ende1 == punkt,
        }
    }

    /// Stelle die Weiche auf das gewünschte Ende.
    ///
    /// Gibt `false` zurück und verändert nichts,
    /// wenn das Gleis keine Weiche oder `ende` keines ihrer Enden ist.
    pub(crate) fn stellen(&mut self, ende: Punkt) -> bool {
        let ist_ende = self.ist_weichen_ende(&ende);
        match self {
            Gleis::Weiche { aktiv, .. } if ist_ende => {
                *aktiv = Some(ende);
                true
            },
            Gleis::Gerade { .. } | Gleis::Weiche { .. } => false,
        }
    }
}
