//! Das Gleisnetz: Verwaltung aller Gleise und Berechnung einzelner Fahr-Schritte.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use itertools::Itertools;
use log::{debug, error, info, warn};
use thiserror::Error;

use zugsimulation_id::{Id, KeineIdVerfügbar};
use zugsimulation_typen::{Punkt, Richtung, ZugPosition};

use crate::gleis::{Gleis, GleisId};


/// Alle Gleise, die zusammen ein zusammenhängendes Gleisnetz bilden.
///
/// Gültigkeit neuer Gleise (Ausrichtung, höchstens zwei Gleise pro Anschluss,
/// Zusammenhang) wird vom Aufrufer vor dem [`Registrieren`](Gleisnetz::registrieren) geprüft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gleisnetz {
    /// Alle Gleise, sortiert nach ihrer Id.
    gleise: BTreeMap<GleisId, Gleis>,
}

/// Fehler beim Entfernen eines Gleises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntfernenFehler {
    /// Es gibt kein Gleis mit der Id.
    #[error("Gleis {0} existiert nicht.")]
    GleisNichtGefunden(GleisId),
    /// Ein Zug steht auf dem Gleis.
    #[error("Gleis {0} ist durch einen Zug belegt.")]
    Belegt(GleisId),
    /// Ohne das Gleis würde das Gleisnetz in mehrere Teile zerfallen.
    #[error("Entfernen von Gleis {0} würde das Gleisnetz zerteilen.")]
    Zerteilt(GleisId),
}

/// Fehler beim Stellen einer Weiche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeicheStellenFehler {
    /// Es gibt kein Gleis mit der Id.
    #[error("Gleis {0} existiert nicht.")]
    GleisNichtGefunden(GleisId),
    /// Das Gleis ist keine Weiche.
    #[error("Gleis {0} ist keine Weiche.")]
    KeineWeiche(GleisId),
    /// Der Punkt ist keines der beiden Enden der Weiche.
    #[error("{punkt} ist kein Ende der Weiche {id}.")]
    KeinEnde {
        /// Die Id der Weiche.
        id: GleisId,
        /// Der gewünschte Punkt.
        punkt: Punkt,
    },
}

impl Gleisnetz {
    /// Erzeuge ein leeres Gleisnetz.
    #[must_use]
    pub fn neu() -> Gleisnetz {
        Gleisnetz::default()
    }

    /// Enthält das Gleisnetz keine Gleise?
    #[must_use]
    pub fn ist_leer(&self) -> bool {
        self.gleise.is_empty()
    }

    /// Erhalte das Gleis mit der gewünschten Id.
    #[must_use]
    pub fn gleis(&self, id: &GleisId) -> Option<&Gleis> {
        self.gleise.get(id)
    }

    /// Alle Gleise, sortiert nach ihrer Id.
    pub fn gleise(&self) -> impl Iterator<Item = (GleisId, &Gleis)> {
        self.gleise.iter().map(|(id, gleis)| (*id, gleis))
    }

    /// Alle Gleise mit einem Anschluss bei `punkt`, unabhängig von der Stellung von Weichen.
    pub fn gleise_mit_anschluss_bei<'t>(
        &'t self,
        punkt: &'t Punkt,
    ) -> impl 't + Iterator<Item = (GleisId, &'t Gleis)> {
        self.gleise().filter(move |(_id, gleis)| gleis.hat_anschluss(punkt))
    }

    /// Alle Gleise, die `punkt` (unter Berücksichtigung der Weichen-Stellung) enthalten.
    pub fn gleise_bei<'t>(
        &'t self,
        punkt: &'t Punkt,
    ) -> impl 't + Iterator<Item = (GleisId, &'t Gleis)> {
        self.gleise().filter(move |(_id, gleis)| gleis.enthält(punkt))
    }

    /// Sind alle Weichen gestellt?
    #[must_use]
    pub fn alle_weichen_gestellt(&self) -> bool {
        self.gleise.values().all(|gleis| gleis.ende().is_some())
    }

    /// Füge ein neues Gleis mit der kleinsten freien Id hinzu.
    ///
    /// Die Gültigkeit des Gleises wird nicht geprüft, Verstöße werden nur protokolliert.
    ///
    /// ## Errors
    ///
    /// Alle Ids sind bereits vergeben.
    pub fn registrieren(&mut self, gleis: Gleis) -> Result<GleisId, KeineIdVerfügbar> {
        let id = Id::kleinste_freie(self.gleise.keys())?;
        for anschluss in gleis.anschlüsse() {
            let anzahl = self.gleise_mit_anschluss_bei(&anschluss).count();
            if anzahl >= 2 {
                error!(
                    "Gleis {id} ist das {}. Gleis mit Anschluss bei {anschluss}!",
                    anzahl.saturating_add(1)
                );
            }
        }
        info!("Neues Gleis {id}: {gleis:?}");
        if let Some(bisher) = self.gleise.insert(id, gleis) {
            error!("Gleis mit kleinster freier Id {id} ersetzt: {bisher:?}");
        }
        if !self.ist_zusammenhängend() {
            error!("Gleisnetz ist nach Hinzufügen von Gleis {id} nicht mehr zusammenhängend!");
        }
        Ok(id)
    }

    /// Entferne das Gleis, sofern das verbleibende Gleisnetz zusammenhängend (oder leer) ist.
    ///
    /// ## Errors
    ///
    /// Es gibt kein Gleis mit der Id, oder das Entfernen würde das Gleisnetz zerteilen.
    /// In beiden Fällen bleibt das Gleisnetz unverändert.
    pub fn entfernen(&mut self, id: GleisId) -> Result<Gleis, EntfernenFehler> {
        if !self.gleise.contains_key(&id) {
            return Err(EntfernenFehler::GleisNichtGefunden(id));
        }
        if !self.zusammenhängend_ohne(Some(id)) {
            warn!("Gleis {id} nicht entfernt, das Gleisnetz würde zerteilt.");
            return Err(EntfernenFehler::Zerteilt(id));
        }
        let gleis = self.gleise.remove(&id).ok_or(EntfernenFehler::GleisNichtGefunden(id))?;
        info!("Gleis {id} entfernt: {gleis:?}");
        Ok(gleis)
    }

    /// Ist das Gleisnetz leer oder bildet es eine einzige Zusammenhangskomponente?
    #[must_use]
    pub fn ist_zusammenhängend(&self) -> bool {
        self.zusammenhängend_ohne(None)
    }

    /// Teste den Zusammenhang über gemeinsame Anschlüsse, wobei das Gleis `ohne` ignoriert wird.
    fn zusammenhängend_ohne(&self, ohne: Option<GleisId>) -> bool {
        let mut verbleibend = self.gleise().filter(|(id, _gleis)| Some(*id) != ohne);
        let Some((start, _gleis)) = verbleibend.next() else {
            return true;
        };
        let anzahl = verbleibend.count().saturating_add(1);
        let mut erreicht = BTreeSet::from([start]);
        let mut ausstehend = VecDeque::from([start]);
        while let Some(id) = ausstehend.pop_front() {
            let Some(gleis) = self.gleise.get(&id) else {
                continue;
            };
            for anschluss in gleis.anschlüsse() {
                for (nachbar, _gleis) in self.gleise_mit_anschluss_bei(&anschluss) {
                    if Some(nachbar) != ohne && erreicht.insert(nachbar) {
                        ausstehend.push_back(nachbar);
                    }
                }
            }
        }
        erreicht.len() == anzahl
    }

    /// Stelle die Weiche auf das gewünschte Ende.
    ///
    /// Züge auf der Weiche werden hier nicht berücksichtigt,
    /// siehe dafür `Simulation::weiche_stellen`.
    ///
    /// ## Errors
    ///
    /// Es gibt keine Weiche mit der Id, oder `ende` ist keines ihrer Enden.
    pub fn weiche_stellen(&mut self, id: GleisId, ende: Punkt) -> Result<(), WeicheStellenFehler> {
        self.prüfe_weiche_stellen(id, &ende)?;
        let gleis = self.gleise.get_mut(&id).ok_or(WeicheStellenFehler::GleisNichtGefunden(id))?;
        if gleis.stellen(ende) {
            info!("Weiche {id} auf {ende} gestellt.");
            Ok(())
        } else {
            Err(WeicheStellenFehler::KeinEnde { id, punkt: ende })
        }
    }

    /// Prüfe, ob die Weiche auf das gewünschte Ende gestellt werden kann.
    ///
    /// ## Errors
    ///
    /// Es gibt keine Weiche mit der Id, oder `ende` ist keines ihrer Enden.
    pub fn prüfe_weiche_stellen(
        &self,
        id: GleisId,
        ende: &Punkt,
    ) -> Result<(), WeicheStellenFehler> {
        let gleis = self.gleise.get(&id).ok_or(WeicheStellenFehler::GleisNichtGefunden(id))?;
        if !gleis.ist_weiche() {
            Err(WeicheStellenFehler::KeineWeiche(id))
        } else if !gleis.ist_weichen_ende(ende) {
            Err(WeicheStellenFehler::KeinEnde { id, punkt: *ende })
        } else {
            Ok(())
        }
    }

    /// Berechne die Position nach einem Schritt vorwärts.
    ///
    /// Gibt [`None`] zurück, wenn der Zug dabei entgleist.
    ///
    /// ## Panics
    ///
    /// Mehr als zwei Gleise enthalten den aktuellen Punkt,
    /// oder die Fortsetzung an einer Verbindung ist nicht eindeutig.
    #[must_use]
    pub fn vorwärts(&self, position: ZugPosition) -> Option<ZugPosition> {
        let ZugPosition { punkt, richtung } = position;
        let gleise = self.gleise_bei(&punkt).collect_vec();
        let neu = match gleise.as_slice() {
            [] => None,
            [(_id, gleis)] => {
                if gleis.ist_ende(&punkt) {
                    None
                } else {
                    punkt.verschoben(richtung).map(|nächster| ZugPosition::neu(nächster, richtung))
                }
            },
            [_, _] => {
                let vorher = punkt.zurück(richtung);
                let kandidaten = gleise
                    .iter()
                    .filter(|(_id, gleis)| vorher.map_or(true, |vorher| !gleis.enthält(&vorher)))
                    .collect_vec();
                // ohne vorheriges Gleis wird geradeaus weitergefahren, sofern möglich
                let geradeaus = kandidaten.iter().any(|(_id, gleis)| {
                    gleis.verfügbare_richtungen(&punkt).any(|verfügbar| verfügbar == richtung)
                });
                let neue_richtung = if geradeaus {
                    richtung
                } else {
                    let (_id, nächstes) = kandidaten.first().unwrap_or_else(|| {
                        unreachable!("Beide Gleise bei {punkt} enthalten den vorherigen Punkt!")
                    });
                    nächstes.verfügbare_richtungen(&punkt).next().unwrap_or_else(|| {
                        unreachable!("Keine Fortsetzung von {punkt} auf {nächstes:?}!")
                    })
                };
                punkt
                    .verschoben(neue_richtung)
                    .map(|nächster| ZugPosition::neu(nächster, neue_richtung))
            },
            _ => unreachable!("Mehr als zwei Gleise bei {punkt}: {gleise:?}"),
        };
        debug!("Vorwärts von {position}: {neu:?}");
        neu
    }

    /// Berechne die Position nach einem Schritt rückwärts.
    ///
    /// Die Richtung bleibt dabei weg vom zuletzt befahrenen Gleis ausgerichtet.
    /// An einer Sackgasse bleibt der Zug auf dem letzten Punkt des Gleises.
    /// Gibt [`None`] zurück, wenn der Zug dabei entgleist.
    ///
    /// ## Panics
    ///
    /// Das angeschlossene Gleis hat keine Richtung weg vom vorherigen Punkt.
    #[must_use]
    pub fn rückwärts(&self, position: ZugPosition) -> Option<ZugPosition> {
        let ZugPosition { punkt, richtung } = position;
        let vorher = punkt.zurück(richtung)?;
        let (zwischen_id, zwischen) = self
            .gleise()
            .find(|(_id, gleis)| gleis.enthält(&vorher) && gleis.enthält(&punkt))?;
        let neu = if !zwischen.ist_ende(&vorher) {
            ZugPosition::neu(vorher, richtung)
        } else if let Some((_id, verbunden)) =
            self.gleise_bei(&vorher).find(|(id, _gleis)| *id != zwischen_id)
        {
            let weg = verbunden.verfügbare_richtungen(&vorher).next().unwrap_or_else(|| {
                unreachable!("Keine Fortsetzung von {vorher} auf {verbunden:?}!")
            });
            ZugPosition::neu(vorher, weg.gegenteil())
        } else {
            // Sackgasse
            ZugPosition::neu(vorher, richtung)
        };
        debug!("Rückwärts von {position}: {neu}");
        Some(neu)
    }

    /// Bestimme die kanonische Richtung an einer Kurve aus zwei unterschiedlich ausgerichteten
    /// Gleisen: weg von dem Gleis, auf dem der Zug angekommen ist.
    ///
    /// An allen anderen Punkten wird `richtung` unverändert zurückgegeben.
    #[must_use]
    pub fn normalisiere_richtung(&self, punkt: &Punkt, richtung: Richtung) -> Richtung {
        let gleise = self.gleise_bei(punkt).collect_vec();
        let [(_id_a, gleis_a), (_id_b, gleis_b)] = gleise.as_slice() else {
            return richtung;
        };
        if gleis_a.ausrichtung() == gleis_b.ausrichtung() {
            return richtung;
        }
        let Some(nächster) = punkt.verschoben(richtung) else {
            return richtung;
        };
        let weg_von = |gleis: &Gleis| {
            gleis.verfügbare_richtungen(punkt).next().map_or(richtung, |weg| weg.gegenteil())
        };
        if gleis_a.enthält(&nächster) {
            weg_von(*gleis_b)
        } else if gleis_b.enthält(&nächster) {
            weg_von(*gleis_a)
        } else {
            richtung
        }
    }
}
