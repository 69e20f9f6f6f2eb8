//! Geprüftes Hinzufügen und Entfernen von Gleisen und Zügen.

use log::{info, warn};
use thiserror::Error;

use zugsimulation_flotte::{Flotte, Fuhrpark, Zug, ZugId};
use zugsimulation_gleis::{EntfernenFehler, Gleis, GleisId};
use zugsimulation_id::KeineIdVerfügbar;
use zugsimulation_typen::{Ausrichtung, Punkt, Richtung, ZugPosition};

use crate::Simulation;

#[cfg(test)]
#[path = "hinzufügen_entfernen/test.rs"]
mod test;

/// Fehler beim Hinzufügen eines Gleises.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HinzufügenFehler {
    /// Anfang und Ende liegen nicht auf einer achsenparallelen Linie.
    #[error("{anfang} und {ende} liegen nicht auf einer achsenparallelen Linie.")]
    NichtAusgerichtet {
        /// Der Anfang.
        anfang: Punkt,
        /// Das Ende.
        ende: Punkt,
    },
    /// Anfang und Ende sind identisch.
    #[error("Ein Gleis kann nicht bei {0} beginnen und enden.")]
    Entartet(Punkt),
    /// Beide Enden einer Weiche sind identisch oder überschneiden sich.
    #[error("Die Enden der Weiche bei {0} überschneiden sich.")]
    WeichenEnden(Punkt),
    /// An dem Anschluss treffen sich bereits zwei Gleise.
    #[error("Bei {0} treffen sich bereits zwei Gleise.")]
    AnschlussBelegt(Punkt),
    /// Das Gleis ist nicht mit dem bestehenden Gleisnetz verbunden.
    #[error("Das Gleis ist nicht mit dem bestehenden Gleisnetz verbunden.")]
    NichtVerbunden,
    /// Das Gleis überschneidet sich mit einem bestehenden Gleis.
    #[error("Das Gleis überschneidet sich mit Gleis {0}.")]
    Überschneidung(GleisId),
    /// Alle Gleis-Ids sind vergeben.
    #[error("{0}")]
    KeineIdVerfügbar(KeineIdVerfügbar),
}

/// Fehler beim Platzieren eines Zuges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatzierenFehler {
    /// Es gibt keinen Zug mit der Id.
    #[error("Zug {0} existiert nicht.")]
    ZugNichtGefunden(ZugId),
    /// Der Zug hat an keinem Ende eine Lok.
    #[error("Zug {0} hat an keinem Ende eine Lok.")]
    Ungültig(ZugId),
    /// Der Zug steht bereits auf den Gleisen.
    #[error("Zug {0} steht bereits auf den Gleisen.")]
    AufGleisen(ZugId),
    /// Bei dem Punkt liegt kein Gleis.
    #[error("Bei {0} liegt kein Gleis.")]
    KeinGleis(Punkt),
    /// Die Richtung passt zu keinem Gleis bei dem Punkt.
    #[error("Kein Gleis bei {punkt} verläuft in Richtung {richtung:?}.")]
    FalscheRichtung {
        /// Der gewünschte Punkt.
        punkt: Punkt,
        /// Die gewünschte Richtung.
        richtung: Richtung,
    },
    /// Der Zug passt nicht auf die Gleise, oder die Gleise sind bereits belegt.
    #[error("Zug {0} kann dort nicht platziert werden.")]
    PasstNicht(ZugId),
}

/// Die Schnittmenge zweier achsenparalleler Strecken als Rechteck (min, max).
///
/// Gibt [`None`] zurück, wenn sich die Strecken nicht berühren.
fn schnitt(strecke0: (Punkt, Punkt), strecke1: (Punkt, Punkt)) -> Option<(Punkt, Punkt)> {
    /// Schnitt zweier geschlossener Intervalle, Grenzen in beliebiger Reihenfolge.
    fn intervall(grenzen0: (i32, i32), grenzen1: (i32, i32)) -> Option<(i32, i32)> {
        let min = grenzen0.0.min(grenzen0.1).max(grenzen1.0.min(grenzen1.1));
        let max = grenzen0.0.max(grenzen0.1).min(grenzen1.0.max(grenzen1.1));
        (min <= max).then_some((min, max))
    }
    let ((a0, a1), (b0, b1)) = (strecke0, strecke1);
    let (min_x, max_x) = intervall((a0.x, a1.x), (b0.x, b1.x))?;
    let (min_y, max_y) = intervall((a0.y, a1.y), (b0.y, b1.y))?;
    Some((Punkt::neu(min_x, min_y), Punkt::neu(max_x, max_y)))
}

impl<F: Fuhrpark> Simulation<F> {
    /// Füge ein gerades Gleis hinzu.
    ///
    /// ## Errors
    ///
    /// Das Gleis ist nicht achsenparallel, hat Länge 0, berührt das bestehende Gleisnetz nicht,
    /// überschneidet sich mit einem bestehenden Gleis, oder an einem Anschluss treffen sich
    /// bereits zwei Gleise.
    pub fn gleis_hinzufügen(
        &mut self,
        anfang: Punkt,
        ende: Punkt,
    ) -> Result<GleisId, HinzufügenFehler> {
        Self::prüfe_strecke(anfang, ende)?;
        self.prüfe_und_registriere(Gleis::gerade(anfang, ende))
    }

    /// Füge eine (noch nicht gestellte) Weiche hinzu.
    ///
    /// ## Errors
    ///
    /// Wie [`gleis_hinzufügen`](Simulation::gleis_hinzufügen) für beide Zweige,
    /// zusätzlich dürfen sich die Zweige nur am Anfang berühren.
    pub fn weiche_hinzufügen(
        &mut self,
        anfang: Punkt,
        ende0: Punkt,
        ende1: Punkt,
    ) -> Result<GleisId, HinzufügenFehler> {
        Self::prüfe_strecke(anfang, ende0)?;
        Self::prüfe_strecke(anfang, ende1)?;
        if let Some(berührung) = schnitt((anfang, ende0), (anfang, ende1)) {
            if berührung != (anfang, anfang) {
                return Err(HinzufügenFehler::WeichenEnden(anfang));
            }
        }
        self.prüfe_und_registriere(Gleis::weiche(anfang, ende0, ende1))
    }

    /// Prüfe, ob eine einzelne Strecke achsenparallel und nicht entartet ist.
    fn prüfe_strecke(anfang: Punkt, ende: Punkt) -> Result<(), HinzufügenFehler> {
        if anfang == ende {
            Err(HinzufügenFehler::Entartet(anfang))
        } else if Ausrichtung::zwischen(&anfang, &ende).is_none() {
            Err(HinzufügenFehler::NichtAusgerichtet { anfang, ende })
        } else {
            Ok(())
        }
    }

    /// Prüfe das Gleis gegen das bestehende Gleisnetz und füge es hinzu.
    fn prüfe_und_registriere(&mut self, gleis: Gleis) -> Result<GleisId, HinzufügenFehler> {
        let mut verbunden = false;
        for anschluss in gleis.anschlüsse() {
            match self.netz.gleise_mit_anschluss_bei(&anschluss).count() {
                0 => {},
                1 => verbunden = true,
                _ => return Err(HinzufügenFehler::AnschlussBelegt(anschluss)),
            }
        }
        if !verbunden && !self.netz.ist_leer() {
            return Err(HinzufügenFehler::NichtVerbunden);
        }
        for (id, bestehend) in self.netz.gleise() {
            for strecke in gleis.strecken() {
                for bestehende_strecke in bestehend.strecken() {
                    let Some((min, max)) = schnitt(strecke, bestehende_strecke) else {
                        continue;
                    };
                    let gemeinsamer_anschluss =
                        min == max && gleis.hat_anschluss(&min) && bestehend.hat_anschluss(&min);
                    if !gemeinsamer_anschluss {
                        warn!("Neues Gleis {gleis:?} überschneidet sich mit Gleis {id}.");
                        return Err(HinzufügenFehler::Überschneidung(id));
                    }
                }
            }
        }
        self.netz.registrieren(gleis).map_err(HinzufügenFehler::KeineIdVerfügbar)
    }

    /// Entferne ein Gleis.
    ///
    /// ## Errors
    ///
    /// Es gibt kein Gleis mit der Id, ein Zug belegt das Gleis,
    /// oder das Gleisnetz würde ohne das Gleis zerteilt.
    pub fn gleis_entfernen(&mut self, id: GleisId) -> Result<Gleis, EntfernenFehler> {
        if self.netz.gleis(&id).is_none() {
            return Err(EntfernenFehler::GleisNichtGefunden(id));
        }
        if self.belegt(&id) {
            warn!("Gleis {id} ist belegt und wird nicht entfernt.");
            return Err(EntfernenFehler::Belegt(id));
        }
        self.netz.entfernen(id)
    }

    /// Setze einen Zug mit der Spitze bei `punkt` in Fahrtrichtung `richtung` auf die Gleise.
    ///
    /// An einer Kurve wird die Richtung vorher
    /// [`normalisiert`](zugsimulation_gleis::Gleisnetz::normalisiere_richtung).
    ///
    /// ## Errors
    ///
    /// Der Zug existiert nicht oder steht bereits auf den Gleisen, bei `punkt` liegt kein Gleis
    /// in Richtung `richtung`, oder der Zug passt dort nicht auf die Gleise.
    pub fn platzieren(
        &mut self,
        zug: ZugId,
        punkt: Punkt,
        richtung: Richtung,
    ) -> Result<(), PlatzierenFehler> {
        let länge = self.fuhrpark.länge(&zug).ok_or(PlatzierenFehler::ZugNichtGefunden(zug))?;
        if self.fuhrpark.position(&zug).is_some() {
            return Err(PlatzierenFehler::AufGleisen(zug));
        }
        let mut gleise = self.netz.gleise_bei(&punkt).peekable();
        if gleise.peek().is_none() {
            return Err(PlatzierenFehler::KeinGleis(punkt));
        }
        if !gleise.any(|(_id, gleis)| gleis.ausrichtung() == Some(richtung.ausrichtung())) {
            return Err(PlatzierenFehler::FalscheRichtung { punkt, richtung });
        }
        let richtung = self.netz.normalisiere_richtung(&punkt, richtung);
        let position = ZugPosition::neu(punkt, richtung);
        if !self.passt_zum_platzieren(&zug, länge, position) {
            warn!("Zug {zug} passt nicht bei {position}.");
            return Err(PlatzierenFehler::PasstNicht(zug));
        }
        info!("Zug {zug} platziert bei {position}.");
        self.fuhrpark.setze_position(&zug, Some(position));
        Ok(())
    }
}

impl Simulation<Flotte> {
    /// Setze einen gültigen Zug (mit einer Lok an einem Ende) auf die Gleise,
    /// siehe [`platzieren`](Simulation::platzieren).
    ///
    /// ## Errors
    ///
    /// Der Zug hat an keinem Ende eine Lok, oder [`platzieren`](Simulation::platzieren) schlägt fehl.
    pub fn zug_platzieren(
        &mut self,
        zug: ZugId,
        punkt: Punkt,
        richtung: Richtung,
    ) -> Result<(), PlatzierenFehler> {
        let daten = self.fuhrpark.zug(&zug).ok_or(PlatzierenFehler::ZugNichtGefunden(zug))?;
        if !daten.ist_gültig() {
            return Err(PlatzierenFehler::Ungültig(zug));
        }
        self.platzieren(zug, punkt, richtung)
    }

    /// Entferne einen Zug, auch wenn er auf den Gleisen steht.
    ///
    /// Gibt [`None`] zurück, wenn es keinen Zug mit der Id gibt.
    pub fn zug_entfernen(&mut self, zug: &ZugId) -> Option<Zug> {
        self.fuhrpark.zug_entfernen(zug)
    }
}
