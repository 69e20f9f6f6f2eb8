//! Bewegung von Zügen auf dem Gleisnetz, Entgleisungen und Zusammenstöße.

// Erlaube simulation::{Simulation, Zusammenstöße, ...}
#![allow(clippy::pub_use)]

use std::collections::BTreeSet;

use itertools::Itertools;

use zugsimulation_flotte::{Flotte, Fuhrpark, ZugId};
use zugsimulation_gleis::{GleisId, Gleisnetz};
use zugsimulation_typen::{Punkt, ZugPosition};

#[path = "hinzufügen_entfernen.rs"]
pub mod hinzufügen_entfernen;
pub mod schritt;
pub mod zusammenstoss;

pub use self::{
    hinzufügen_entfernen::{HinzufügenFehler, PlatzierenFehler},
    zusammenstoss::Zusammenstöße,
};


/// Das Gleisnetz und alle Züge, die darauf fahren können.
#[derive(Debug, Clone, Default)]
pub struct Simulation<F = Flotte> {
    /// Alle Gleise.
    netz: Gleisnetz,
    /// Alle Züge.
    fuhrpark: F,
}

impl<F: Fuhrpark> Simulation<F> {
    /// Erzeuge eine neue Simulation mit leerem Gleisnetz.
    #[must_use]
    pub fn neu(fuhrpark: F) -> Simulation<F> {
        Simulation { netz: Gleisnetz::neu(), fuhrpark }
    }

    /// Das Gleisnetz.
    #[must_use]
    pub fn netz(&self) -> &Gleisnetz {
        &self.netz
    }

    /// Alle Züge.
    #[must_use]
    pub fn fuhrpark(&self) -> &F {
        &self.fuhrpark
    }

    /// Alle Züge, veränderlich.
    ///
    /// Positionen sollten nur über die Methoden der [`Simulation`] gesetzt werden.
    pub fn fuhrpark_mut(&mut self) -> &mut F {
        &mut self.fuhrpark
    }

    /// Sind alle Weichen gestellt?
    #[must_use]
    pub fn alle_weichen_gestellt(&self) -> bool {
        self.netz.alle_weichen_gestellt()
    }

    /// Die Punkte, die ein Zug der Länge `länge` mit Spitze bei `position` belegt,
    /// beginnend mit der Spitze.
    ///
    /// Gibt [`None`] zurück, wenn der Zug nicht auf die Gleise passt:
    /// ein Schritt rückwärts entgleist, oder der Zug überschneidet sich selbst.
    #[must_use]
    pub fn belegung(&self, position: ZugPosition, länge: u64) -> Option<Vec<Punkt>> {
        let mut punkte = vec![position.punkt];
        let mut besucht = BTreeSet::from([position.punkt]);
        let mut aktuell = position;
        for _ in 1..länge {
            aktuell = self.netz.rückwärts(aktuell)?;
            if !besucht.insert(aktuell.punkt) {
                return None;
            }
            punkte.push(aktuell.punkt);
        }
        Some(punkte)
    }

    /// Die aktuell von einem Zug belegten Punkte.
    ///
    /// Leer, wenn der Zug nicht auf den Gleisen steht.
    #[must_use]
    pub fn belegte_punkte(&self, zug: &ZugId) -> Vec<Punkt> {
        self.fuhrpark
            .position(zug)
            .zip(self.fuhrpark.länge(zug))
            .and_then(|(position, länge)| self.belegung(position, länge))
            .unwrap_or_default()
    }

    /// Passt ein Zug der Länge `länge` mit Spitze bei `position` auf die Gleise?
    #[must_use]
    pub fn passt_auf_gleis(&self, länge: u64, position: ZugPosition) -> bool {
        self.belegung(position, länge).is_some()
    }

    /// Kann der Zug mit Spitze bei `position` platziert werden?
    ///
    /// Zusätzlich zu [`passt_auf_gleis`](Simulation::passt_auf_gleis) darf kein Punkt
    /// und kein Gleis-Innenbereich von einem anderen Zug belegt sein.
    #[must_use]
    pub fn passt_zum_platzieren(&self, zug: &ZugId, länge: u64, position: ZugPosition) -> bool {
        let Some(punkte) = self.belegung(position, länge) else {
            return false;
        };
        let andere = self.fuhrpark.auf_gleisen().into_iter().filter(|andere| andere != zug);
        let mut belegte_punkte = BTreeSet::new();
        let mut belegte_gleise = BTreeSet::new();
        for anderer in andere {
            for punkt in self.belegte_punkte(&anderer) {
                let _ = belegte_punkte.insert(punkt);
                if let Some(gleis) = self.innen_gleis(&punkt) {
                    let _ = belegte_gleise.insert(gleis);
                }
            }
        }
        punkte.iter().all(|punkt| {
            !belegte_punkte.contains(punkt)
                && self.innen_gleis(punkt).map_or(true, |gleis| !belegte_gleise.contains(&gleis))
        })
    }

    /// Das einzige Gleis, in dessen Innenbereich (ohne Enden) `punkt` liegt.
    ///
    /// Anschluss-Punkte gehören zu keinem Innenbereich.
    fn innen_gleis(&self, punkt: &Punkt) -> Option<GleisId> {
        let (id, gleis) = self.netz.gleise_bei(punkt).exactly_one().ok()?;
        (!gleis.ist_ende(punkt)).then_some(id)
    }

    /// Belegt ein Zug einen Punkt im Innenbereich (ohne Enden) des Gleises?
    ///
    /// Unbekannte Gleise sind nie belegt.
    #[must_use]
    pub fn belegt(&self, gleis_id: &GleisId) -> bool {
        let Some(gleis) = self.netz.gleis(gleis_id) else {
            return false;
        };
        self.fuhrpark.auf_gleisen().iter().any(|zug| {
            self.belegte_punkte(zug)
                .iter()
                .any(|punkt| gleis.enthält(punkt) && !gleis.ist_ende(punkt))
        })
    }

    /// Belegt ein Zug den Punkt?
    #[must_use]
    pub fn punkt_belegt(&self, punkt: &Punkt) -> bool {
        self.fuhrpark
            .auf_gleisen()
            .iter()
            .any(|zug| self.belegte_punkte(zug).contains(punkt))
    }
}
