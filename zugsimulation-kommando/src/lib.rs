//! Text-Kommandos zur Steuerung einer [`Simulation`](zugsimulation_simulation::Simulation).

// Erlaube kommando::{Kommando, ausführen, ...}
#![allow(clippy::pub_use)]

use thiserror::Error;

use zugsimulation_flotte::{AnkuppelnFehler, FahrzeugFehler};
use zugsimulation_gleis::{EntfernenFehler, WeicheStellenFehler};
use zugsimulation_simulation::{HinzufügenFehler, PlatzierenFehler};

#[path = "ausführen.rs"]
pub mod ausführen;
pub mod kommando;

pub use self::{
    ausführen::{ausführen, zeile_ausführen, Ausgabe, ZustandFehler},
    kommando::{Kommando, ParseFehler},
};

/// Alle Fehler, die beim Parsen und Ausführen eines Kommandos auftreten können.
#[derive(Debug, Clone, PartialEq, Eq, Error, zugsimulation_macros::From)]
pub enum Fehler {
    /// Die Zeile ist kein gültiges Kommando.
    #[error(transparent)]
    Parse(ParseFehler),
    /// Ein Gleis oder eine Weiche konnte nicht hinzugefügt werden.
    #[error(transparent)]
    Hinzufügen(HinzufügenFehler),
    /// Ein Gleis konnte nicht entfernt werden.
    #[error(transparent)]
    Entfernen(EntfernenFehler),
    /// Eine Weiche konnte nicht gestellt werden.
    #[error(transparent)]
    WeicheStellen(WeicheStellenFehler),
    /// Ein Zug konnte nicht platziert werden.
    #[error(transparent)]
    Platzieren(PlatzierenFehler),
    /// Ein Fahrzeug konnte nicht erstellt oder entfernt werden.
    #[error(transparent)]
    Fahrzeug(FahrzeugFehler),
    /// Ein Fahrzeug konnte nicht angekuppelt werden.
    #[error(transparent)]
    Ankuppeln(AnkuppelnFehler),
    /// Der aktuelle Zustand erlaubt das Kommando nicht.
    #[error(transparent)]
    Zustand(ZustandFehler),
}
