//! Verwaltung aller Fahrzeuge und Züge.

use std::collections::{BTreeMap, HashMap};

use log::{debug, info, warn};
use nonempty::NonEmpty;
use thiserror::Error;

use zugsimulation_id::{eindeutig::kleinste_freie_repräsentation, Id, KeineIdVerfügbar};
use zugsimulation_typen::ZugPosition;

use crate::{
    fahrzeug::{
        ist_alphanumerisch, ist_serie, Fahrzeug, FahrzeugArt, FahrzeugFehler, FahrzeugName,
        LokArt, WagenArt,
    },
    zug::{Zug, ZugId},
    Fuhrpark,
};


/// Alle Fahrzeuge und Züge.
///
/// Jeder Zug besitzt seine Fahrzeuge, die Zuordnung Fahrzeug → Zug
/// erlaubt eine schnelle Prüfung, ob ein Fahrzeug bereits verwendet wird.
#[derive(Debug, Clone, Default)]
pub struct Flotte {
    /// Alle Fahrzeuge, unabhängig davon ob sie Teil eines Zuges sind.
    fahrzeuge: BTreeMap<FahrzeugName, Fahrzeug>,
    /// Alle Züge.
    züge: BTreeMap<ZugId, Zug>,
    /// Zu welchem Zug gehört ein Fahrzeug?
    zuordnung: HashMap<FahrzeugName, ZugId>,
}

/// Fehler beim Hinzufügen eines Fahrzeugs zu einem Zug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnkuppelnFehler {
    /// Es gibt kein Fahrzeug mit dem Namen.
    #[error("Es gibt kein Fahrzeug {0}.")]
    FahrzeugNichtGefunden(FahrzeugName),
    /// Das Fahrzeug ist bereits Teil eines Zuges.
    #[error("Fahrzeug {fahrzeug} ist bereits Teil von Zug {zug}.")]
    FahrzeugInVerwendung {
        /// Das Fahrzeug.
        fahrzeug: FahrzeugName,
        /// Der Zug, zu dem das Fahrzeug gehört.
        zug: ZugId,
    },
    /// Der Zug steht auf den Gleisen.
    #[error("Zug {0} steht auf den Gleisen.")]
    AufGleisen(ZugId),
    /// Der Zug existiert nicht und es gibt eine kleinere freie Id.
    #[error("Zug {} existiert nicht, die nächste freie Zug-Id ist {}.", .gewünscht, .frei)]
    ZugIdNichtFrei {
        /// Die gewünschte Id.
        gewünscht: ZugId,
        /// Die kleinste freie Id.
        frei: ZugId,
    },
    /// Alle Zug-Ids sind vergeben.
    #[error("{0}")]
    KeineIdVerfügbar(KeineIdVerfügbar),
}

impl Flotte {
    /// Erzeuge eine leere Flotte.
    #[must_use]
    pub fn neu() -> Flotte {
        Flotte::default()
    }

    /// Erstelle eine neue Lok mit Name `<serie>-<name>`.
    ///
    /// ## Errors
    ///
    /// Die Länge ist nicht positiv, Baureihe oder Name sind ungültig,
    /// oder es gibt bereits eine Lok mit dem Namen.
    pub fn lok_erstellen(
        &mut self,
        art: LokArt,
        serie: &str,
        name: &str,
        länge: u32,
    ) -> Result<FahrzeugName, FahrzeugFehler> {
        if länge == 0 {
            return Err(FahrzeugFehler::LängeNichtPositiv);
        }
        if !ist_serie(serie) || !ist_alphanumerisch(name) {
            return Err(FahrzeugFehler::UngültigerName {
                serie: serie.to_owned(),
                name: name.to_owned(),
            });
        }
        let fahrzeug_name = FahrzeugName::Lok { serie: serie.to_owned(), name: name.to_owned() };
        if self.fahrzeuge.contains_key(&fahrzeug_name) {
            return Err(FahrzeugFehler::ExistiertBereits(fahrzeug_name));
        }
        info!("Neue Lok {fahrzeug_name} ({}) mit Länge {länge}.", art.name());
        let fahrzeug = Fahrzeug { art: FahrzeugArt::Lok(art), länge };
        let _ = self.fahrzeuge.insert(fahrzeug_name.clone(), fahrzeug);
        Ok(fahrzeug_name)
    }

    /// Erstelle einen neuen Wagen mit der kleinsten freien Nummer.
    ///
    /// ## Errors
    ///
    /// Die Länge ist nicht positiv, oder alle Wagen-Nummern sind vergeben.
    pub fn wagen_erstellen(
        &mut self,
        art: WagenArt,
        länge: u32,
    ) -> Result<FahrzeugName, FahrzeugFehler> {
        if länge == 0 {
            return Err(FahrzeugFehler::LängeNichtPositiv);
        }
        let verwendet = self.fahrzeuge.keys().filter_map(|name| match name {
            FahrzeugName::Wagen(nummer) => Some(*nummer),
            FahrzeugName::Lok { .. } => None,
        });
        let nummer = kleinste_freie_repräsentation(verwendet)
            .ok_or_else(|| FahrzeugFehler::KeineIdVerfügbar(KeineIdVerfügbar::für::<Fahrzeug>()))?;
        let fahrzeug_name = FahrzeugName::Wagen(nummer);
        info!("Neuer Wagen {fahrzeug_name} ({}) mit Länge {länge}.", art.name());
        let fahrzeug = Fahrzeug { art: FahrzeugArt::Wagen(art), länge };
        let _ = self.fahrzeuge.insert(fahrzeug_name.clone(), fahrzeug);
        Ok(fahrzeug_name)
    }

    /// Erhalte das Fahrzeug mit dem gewünschten Namen.
    #[must_use]
    pub fn fahrzeug(&self, name: &FahrzeugName) -> Option<&Fahrzeug> {
        self.fahrzeuge.get(name)
    }

    /// Alle Fahrzeuge, sortiert nach ihrem Namen.
    pub fn fahrzeuge(&self) -> impl Iterator<Item = (&FahrzeugName, &Fahrzeug)> {
        self.fahrzeuge.iter()
    }

    /// Zu welchem Zug gehört das Fahrzeug?
    #[must_use]
    pub fn zug_von(&self, name: &FahrzeugName) -> Option<ZugId> {
        self.zuordnung.get(name).copied()
    }

    /// Entferne ein Fahrzeug, das zu keinem Zug gehört.
    ///
    /// ## Errors
    ///
    /// Es gibt kein Fahrzeug mit dem Namen, oder es ist Teil eines Zuges.
    pub fn fahrzeug_entfernen(&mut self, name: &FahrzeugName) -> Result<Fahrzeug, FahrzeugFehler> {
        if let Some(zug) = self.zug_von(name) {
            return Err(FahrzeugFehler::InVerwendung { fahrzeug: name.clone(), zug });
        }
        let fahrzeug =
            self.fahrzeuge.remove(name).ok_or_else(|| FahrzeugFehler::NichtGefunden(name.clone()))?;
        info!("Fahrzeug {name} entfernt.");
        Ok(fahrzeug)
    }

    /// Hänge ein Fahrzeug an das Ende eines Zuges.
    ///
    /// Existiert der Zug noch nicht, wird er erstellt, sofern `zug_id` die kleinste freie Id ist.
    ///
    /// ## Errors
    ///
    /// Das Fahrzeug existiert nicht oder gehört bereits zu einem Zug,
    /// der Zug steht auf den Gleisen, oder er kann nicht mit der gewünschten Id erstellt werden.
    pub fn ankuppeln(&mut self, zug_id: ZugId, name: FahrzeugName) -> Result<(), AnkuppelnFehler> {
        if !self.fahrzeuge.contains_key(&name) {
            return Err(AnkuppelnFehler::FahrzeugNichtGefunden(name));
        }
        if let Some(zug) = self.zug_von(&name) {
            return Err(AnkuppelnFehler::FahrzeugInVerwendung { fahrzeug: name, zug });
        }
        match self.züge.get_mut(&zug_id) {
            Some(zug) => {
                if zug.position.is_some() {
                    return Err(AnkuppelnFehler::AufGleisen(zug_id));
                }
                zug.fahrzeuge.push(name.clone());
            },
            None => {
                let frei = Id::kleinste_freie(self.züge.keys())
                    .map_err(AnkuppelnFehler::KeineIdVerfügbar)?;
                if frei != zug_id {
                    return Err(AnkuppelnFehler::ZugIdNichtFrei { gewünscht: zug_id, frei });
                }
                info!("Neuer Zug {zug_id}.");
                let _ = self
                    .züge
                    .insert(zug_id, Zug { fahrzeuge: NonEmpty::new(name.clone()), position: None });
            },
        }
        info!("Fahrzeug {name} an Zug {zug_id} angekuppelt.");
        let _ = self.zuordnung.insert(name, zug_id);
        Ok(())
    }

    /// Erhalte den Zug mit der gewünschten Id.
    #[must_use]
    pub fn zug(&self, id: &ZugId) -> Option<&Zug> {
        self.züge.get(id)
    }

    /// Alle Züge, sortiert nach ihrer Id.
    pub fn alle_züge(&self) -> impl Iterator<Item = (ZugId, &Zug)> {
        self.züge.iter().map(|(id, zug)| (*id, zug))
    }

    /// Entferne einen Zug, seine Fahrzeuge gehören danach zu keinem Zug mehr.
    ///
    /// Steht der Zug auf den Gleisen, verschwindet er einfach.
    pub fn zug_entfernen(&mut self, id: &ZugId) -> Option<Zug> {
        let zug = self.züge.remove(id)?;
        for fahrzeug in zug.fahrzeuge.iter() {
            let _ = self.zuordnung.remove(fahrzeug);
        }
        info!("Zug {id} entfernt.");
        Some(zug)
    }

    /// Die Summe der Längen aller Fahrzeuge des Zuges.
    #[must_use]
    pub fn zug_länge(&self, zug: &Zug) -> u64 {
        zug.fahrzeuge
            .iter()
            .filter_map(|name| self.fahrzeuge.get(name))
            .fold(0_u64, |summe, fahrzeug| summe.saturating_add(u64::from(fahrzeug.länge)))
    }
}

impl Fuhrpark for Flotte {
    fn züge(&self) -> Vec<ZugId> {
        self.züge.keys().copied().collect()
    }

    fn länge(&self, zug: &ZugId) -> Option<u64> {
        self.züge.get(zug).map(|zug| self.zug_länge(zug))
    }

    fn position(&self, zug: &ZugId) -> Option<ZugPosition> {
        self.züge.get(zug).and_then(Zug::position)
    }

    fn setze_position(&mut self, zug: &ZugId, position: Option<ZugPosition>) {
        if let Some(zug_daten) = self.züge.get_mut(zug) {
            debug!("Position von Zug {zug}: {position:?}");
            zug_daten.position = position;
        } else {
            warn!("Position für unbekannten Zug {zug} ignoriert.");
        }
    }
}
