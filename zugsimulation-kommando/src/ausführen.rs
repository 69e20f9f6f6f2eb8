//! Ausführen eines [`Kommandos`](Kommando) und Formatieren der Ausgabe.

use itertools::Itertools;
use log::{debug, info};
use thiserror::Error;

use zugsimulation_flotte::{AnkuppelnFehler, Fahrzeug, FahrzeugName, Flotte, Fuhrpark, ZugId};
use zugsimulation_gleis::{Gleis, GleisId};
use zugsimulation_simulation::Simulation;

use crate::{kommando::Kommando, Fehler};

#[cfg(test)]
#[path = "ausführen/test.rs"]
mod test;

/// Das Ergebnis eines erfolgreich ausgeführten Kommandos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ausgabe {
    /// Zeilen, die angezeigt werden sollen.
    Zeilen(Vec<String>),
    /// Die Eingabe-Schleife soll beendet werden.
    Beenden,
}

impl Ausgabe {
    /// Eine einzelne Zeile.
    fn zeile(zeile: impl Into<String>) -> Ausgabe {
        Ausgabe::Zeilen(vec![zeile.into()])
    }

    /// Die Standard-Ausgabe nach einer erfolgreichen Änderung.
    fn ok() -> Ausgabe {
        Ausgabe::zeile("OK")
    }
}

/// Der aktuelle Zustand erlaubt das Kommando nicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZustandFehler {
    /// Es gibt keinen Zug mit der Id.
    #[error("Zug {0} existiert nicht.")]
    ZugNichtGefunden(ZugId),
    /// Mindestens eine Weiche ist noch nicht gestellt.
    #[error("Alle Weichen müssen gestellt sein, bevor Züge fahren können.")]
    WeichenNichtGestellt,
}

/// Beschreibung eines Gleises für `list tracks`.
fn gleis_zeile(id: GleisId, gleis: &Gleis) -> String {
    match gleis {
        Gleis::Gerade { anfang, ende } => {
            let länge = gleis.länge().map_or_else(String::new, |länge| länge.to_string());
            format!("t {id} {anfang} -> {ende} {länge}")
        },
        Gleis::Weiche { anfang, ende0, ende1, aktiv: _ } => {
            let länge = gleis.länge().map_or_else(String::new, |länge| format!(" {länge}"));
            format!("s {id} {anfang} -> {ende0},{ende1}{länge}")
        },
    }
}

/// Der Zug eines Fahrzeugs für `list engines` und `list coaches`, `none` ohne Zug.
fn zug_spalte(flotte: &Flotte, name: &FahrzeugName) -> String {
    flotte.zug_von(name).map_or_else(|| String::from("none"), |zug| zug.to_string())
}

/// Beschreibung einer Lok für `list engines`.
fn lok_zeile(flotte: &Flotte, name: &FahrzeugName, lok: &Fahrzeug) -> Option<String> {
    let FahrzeugName::Lok { serie, name: lok_name } = name else {
        return None;
    };
    let zug = zug_spalte(flotte, name);
    Some(format!("{zug} {} {serie} {lok_name} {}", lok.art().kürzel(), lok.länge()))
}

/// Beschreibung eines Wagens für `list coaches`.
fn wagen_zeile(flotte: &Flotte, name: &FahrzeugName, wagen: &Fahrzeug) -> Option<String> {
    let FahrzeugName::Wagen(nummer) = name else {
        return None;
    };
    let zug = zug_spalte(flotte, name);
    Some(format!("{nummer} {zug} {} {}", wagen.art().kürzel(), wagen.länge()))
}

/// Die Zeilen oder, falls es keine gibt, die Meldung `leer`.
fn zeilen_oder(zeilen: Vec<String>, leer: &str) -> Ausgabe {
    if zeilen.is_empty() {
        Ausgabe::zeile(leer)
    } else {
        Ausgabe::Zeilen(zeilen)
    }
}

/// Ausgabe von `step`: Zusammenstöße und Züge auf den Gleisen, sortiert nach der kleinsten Zug-Id.
fn schritt_zeilen(simulation: &mut Simulation<Flotte>, geschwindigkeit: i32) -> Vec<String> {
    let zusammenstöße = simulation.schritt(geschwindigkeit);
    let unfälle = zusammenstöße.into_iter().filter_map(|gruppe| {
        let kleinste = *gruppe.first()?;
        Some((kleinste, format!("Crash of train {}", gruppe.iter().join(","))))
    });
    let fuhrpark = simulation.fuhrpark();
    let positionen = fuhrpark.auf_gleisen().into_iter().filter_map(|zug| {
        let position = fuhrpark.position(&zug)?;
        Some((zug, format!("Train {zug} at {}", position.punkt)))
    });
    let zeilen = unfälle
        .chain(positionen)
        .sorted_by_key(|(zug, _zeile)| *zug)
        .map(|(_zug, zeile)| zeile)
        .collect_vec();
    if zeilen.is_empty() {
        vec![String::from("OK")]
    } else {
        zeilen
    }
}

/// Parse eine Eingabe-Zeile und führe das Kommando aus.
///
/// ## Errors
///
/// Die Zeile ist kein gültiges Kommando, oder [`ausführen`] schlägt fehl.
pub fn zeile_ausführen(simulation: &mut Simulation<Flotte>, zeile: &str) -> Result<Ausgabe, Fehler> {
    let kommando = zeile.parse()?;
    ausführen(simulation, kommando)
}

/// Führe ein Kommando auf der Simulation aus.
///
/// ## Errors
///
/// Das Kommando ist im aktuellen Zustand nicht erlaubt, oder die zugehörige Änderung schlägt fehl.
/// Im Fehlerfall bleibt die Simulation unverändert.
pub fn ausführen(simulation: &mut Simulation<Flotte>, kommando: Kommando) -> Result<Ausgabe, Fehler> {
    debug!("Führe Kommando aus: {kommando:?}");
    let ausgabe = match kommando {
        Kommando::GleisHinzufügen { anfang, ende } => {
            Ausgabe::zeile(simulation.gleis_hinzufügen(anfang, ende)?.to_string())
        },
        Kommando::WeicheHinzufügen { anfang, ende0, ende1 } => {
            Ausgabe::zeile(simulation.weiche_hinzufügen(anfang, ende0, ende1)?.to_string())
        },
        Kommando::GleisEntfernen(id) => {
            let _ = simulation.gleis_entfernen(id)?;
            Ausgabe::ok()
        },
        Kommando::GleiseAuflisten => {
            let zeilen = simulation
                .netz()
                .gleise()
                .map(|(id, gleis)| gleis_zeile(id, gleis))
                .collect_vec();
            zeilen_oder(zeilen, "No track exists")
        },
        Kommando::WeicheStellen { id, ende } => {
            simulation.weiche_stellen(id, ende)?;
            Ausgabe::ok()
        },
        Kommando::LokErstellen { art, serie, name, länge } => {
            let name = simulation.fuhrpark_mut().lok_erstellen(art, &serie, &name, länge)?;
            Ausgabe::zeile(name.to_string())
        },
        Kommando::WagenErstellen { art, länge } => {
            let name = simulation.fuhrpark_mut().wagen_erstellen(art, länge)?;
            Ausgabe::zeile(name.to_string())
        },
        Kommando::LoksAuflisten => {
            let flotte = simulation.fuhrpark();
            let zeilen = flotte
                .fahrzeuge()
                .filter_map(|(name, fahrzeug)| lok_zeile(flotte, name, fahrzeug))
                .collect_vec();
            zeilen_oder(zeilen, "No engine exists")
        },
        Kommando::WagenAuflisten => {
            let flotte = simulation.fuhrpark();
            let zeilen = flotte
                .fahrzeuge()
                .filter_map(|(name, fahrzeug)| wagen_zeile(flotte, name, fahrzeug))
                .collect_vec();
            zeilen_oder(zeilen, "No coach exists")
        },
        Kommando::FahrzeugEntfernen(name) => {
            let _ = simulation.fuhrpark_mut().fahrzeug_entfernen(&name)?;
            Ausgabe::ok()
        },
        Kommando::Ankuppeln { zug, fahrzeug } => {
            let flotte = simulation.fuhrpark_mut();
            let art = flotte
                .fahrzeug(&fahrzeug)
                .map(Fahrzeug::art)
                .ok_or_else(|| AnkuppelnFehler::FahrzeugNichtGefunden(fahrzeug.clone()))?;
            let zeile = format!("{art} {fahrzeug} added to train {zug}");
            flotte.ankuppeln(zug, fahrzeug)?;
            Ausgabe::zeile(zeile)
        },
        Kommando::ZugEntfernen(zug) => {
            let _ = simulation.zug_entfernen(&zug).ok_or(ZustandFehler::ZugNichtGefunden(zug))?;
            Ausgabe::ok()
        },
        Kommando::ZügeAuflisten => {
            let zeilen = simulation
                .fuhrpark()
                .alle_züge()
                .map(|(id, zug)| format!("{id} {}", zug.fahrzeuge().iter().join(" ")))
                .collect_vec();
            zeilen_oder(zeilen, "No train exists")
        },
        Kommando::ZugPlatzieren { zug, punkt, richtung } => {
            simulation.zug_platzieren(zug, punkt, richtung)?;
            Ausgabe::ok()
        },
        Kommando::Schritt(geschwindigkeit) => {
            if !simulation.alle_weichen_gestellt() {
                return Err(ZustandFehler::WeichenNichtGestellt.into());
            }
            info!("Schritt mit Geschwindigkeit {geschwindigkeit}.");
            Ausgabe::Zeilen(schritt_zeilen(simulation, geschwindigkeit))
        },
        Kommando::Beenden => Ausgabe::Beenden,
    };
    Ok(ausgabe)
}
