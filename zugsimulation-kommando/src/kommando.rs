//! Parsen einer Eingabe-Zeile.
//!
//! Ein Kommando besteht aus einzelnen, durch genau ein Leerzeichen getrennten Wörtern.
//! Punkte werden als `(x,y)` geschrieben, Richtungen als Verschiebung `dx,dy`.

use std::str::FromStr;

use thiserror::Error;

use zugsimulation_flotte::{
    FahrzeugName, LokArt, UngültigeFahrzeugArt, UngültigerFahrzeugName, WagenArt, ZugId,
};
use zugsimulation_gleis::GleisId;
use zugsimulation_id::Id;
use zugsimulation_typen::{Punkt, Richtung};

#[cfg(test)]
mod test;

/// Ein einzelnes Kommando.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kommando {
    /// `add track (x,y) -> (x,y)`
    GleisHinzufügen {
        /// Der Anfang des Gleises.
        anfang: Punkt,
        /// Das Ende des Gleises.
        ende: Punkt,
    },
    /// `add switch (x,y) -> (x,y),(x,y)`
    WeicheHinzufügen {
        /// Der gemeinsame Anfang.
        anfang: Punkt,
        /// Das erste mögliche Ende.
        ende0: Punkt,
        /// Das zweite mögliche Ende.
        ende1: Punkt,
    },
    /// `delete track <id>`
    GleisEntfernen(GleisId),
    /// `list tracks`
    GleiseAuflisten,
    /// `set switch <id> position (x,y)`
    WeicheStellen {
        /// Die Id der Weiche.
        id: GleisId,
        /// Das neue aktive Ende.
        ende: Punkt,
    },
    /// `create engine <art> <serie> <name> <länge>`
    LokErstellen {
        /// Der Antrieb.
        art: LokArt,
        /// Die Baureihe.
        serie: String,
        /// Der Name innerhalb der Baureihe.
        name: String,
        /// Die Länge der Lok.
        länge: u32,
    },
    /// `create coach <art> <länge>`
    WagenErstellen {
        /// Der Verwendungszweck.
        art: WagenArt,
        /// Die Länge des Wagens.
        länge: u32,
    },
    /// `list engines`
    LoksAuflisten,
    /// `list coaches`
    WagenAuflisten,
    /// `delete rolling stock <name>`
    FahrzeugEntfernen(FahrzeugName),
    /// `add train <zug> <name>`
    Ankuppeln {
        /// Der Zug.
        zug: ZugId,
        /// Das angehängte Fahrzeug.
        fahrzeug: FahrzeugName,
    },
    /// `delete train <zug>`
    ZugEntfernen(ZugId),
    /// `list trains`
    ZügeAuflisten,
    /// `put train <zug> at (x,y) in direction dx,dy`
    ZugPlatzieren {
        /// Der Zug.
        zug: ZugId,
        /// Die Position der Zugspitze.
        punkt: Punkt,
        /// Die Fahrtrichtung.
        richtung: Richtung,
    },
    /// `step <geschwindigkeit>`
    Schritt(i32),
    /// `exit`
    Beenden,
}

/// Fehler beim Parsen einer Eingabe-Zeile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFehler {
    /// Die Zeile passt zu keinem bekannten Kommando.
    #[error("'{0}' ist kein gültiges Kommando.")]
    UnbekanntesKommando(String),
    /// Ungültige Ganzzahl.
    #[error("'{0}' ist keine gültige Zahl.")]
    Zahl(String),
    /// Ungültige Id.
    #[error("'{0}' ist keine gültige Id.")]
    Id(String),
    /// Ungültiger Punkt.
    #[error("'{0}' ist kein gültiger Punkt.")]
    Punkt(String),
    /// Ungültige Liste aus zwei Punkten.
    #[error("'{0}' ist keine gültige Liste aus zwei Punkten.")]
    PunktPaar(String),
    /// Ungültige Richtung.
    #[error("'{0}' ist keine gültige Richtung.")]
    Richtung(String),
    /// Ungültiger Fahrzeug-Name.
    #[error(transparent)]
    FahrzeugName(UngültigerFahrzeugName),
    /// Unbekannte Art von Lok oder Wagen.
    #[error(transparent)]
    FahrzeugArt(UngültigeFahrzeugArt),
}

/// Parse eine Ganzzahl mit optionalem Vorzeichen.
fn ganzzahl<T: FromStr>(text: &str) -> Result<T, ParseFehler> {
    text.parse().map_err(|_fehler| ParseFehler::Zahl(text.to_owned()))
}

/// Parse eine positive Id.
fn id<T>(text: &str) -> Result<Id<T>, ParseFehler> {
    text.parse()
        .ok()
        .and_then(Id::aus_repräsentation)
        .ok_or_else(|| ParseFehler::Id(text.to_owned()))
}

/// Parse zwei durch ein Komma getrennte Ganzzahlen.
fn zahlen_paar(text: &str) -> Option<(i32, i32)> {
    let (x, y) = text.split_once(',')?;
    Some((x.parse().ok()?, y.parse().ok()?))
}

/// Parse einen Punkt `(x,y)`.
fn punkt(text: &str) -> Result<Punkt, ParseFehler> {
    text.strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .and_then(zahlen_paar)
        .map(|(x, y)| Punkt::neu(x, y))
        .ok_or_else(|| ParseFehler::Punkt(text.to_owned()))
}

/// Parse zwei Punkte `(x,y),(x,y)`.
fn punkt_paar(text: &str) -> Result<(Punkt, Punkt), ParseFehler> {
    let paar = || {
        let (erster, zweiter) =
            text.strip_prefix('(')?.strip_suffix(')')?.split_once("),(")?;
        let (x0, y0) = zahlen_paar(erster)?;
        let (x1, y1) = zahlen_paar(zweiter)?;
        Some((Punkt::neu(x0, y0), Punkt::neu(x1, y1)))
    };
    paar().ok_or_else(|| ParseFehler::PunktPaar(text.to_owned()))
}

/// Parse eine Richtung aus einer achsenparallelen Verschiebung `dx,dy`.
fn richtung(text: &str) -> Result<Richtung, ParseFehler> {
    zahlen_paar(text)
        .and_then(|(dx, dy)| Richtung::aus_delta(dx, dy))
        .ok_or_else(|| ParseFehler::Richtung(text.to_owned()))
}

/// Parse die Art einer Lok oder eines Wagens.
fn art<T: FromStr<Err = UngültigeFahrzeugArt>>(text: &str) -> Result<T, ParseFehler> {
    text.parse().map_err(ParseFehler::FahrzeugArt)
}

/// Parse einen Fahrzeug-Namen.
fn fahrzeug(text: &str) -> Result<FahrzeugName, ParseFehler> {
    text.parse().map_err(ParseFehler::FahrzeugName)
}

impl FromStr for Kommando {
    type Err = ParseFehler;

    fn from_str(zeile: &str) -> Result<Self, Self::Err> {
        let wörter: Vec<&str> = zeile.split(' ').collect();
        let kommando = match wörter.as_slice() {
            ["add", "track", anfang, "->", ende] => {
                Kommando::GleisHinzufügen { anfang: punkt(anfang)?, ende: punkt(ende)? }
            },
            ["add", "switch", anfang, "->", enden] => {
                let (ende0, ende1) = punkt_paar(enden)?;
                Kommando::WeicheHinzufügen { anfang: punkt(anfang)?, ende0, ende1 }
            },
            ["delete", "track", gleis] => Kommando::GleisEntfernen(id(gleis)?),
            ["list", "tracks"] => Kommando::GleiseAuflisten,
            ["set", "switch", gleis, "position", ende] => {
                Kommando::WeicheStellen { id: id(gleis)?, ende: punkt(ende)? }
            },
            ["create", "engine", lok_art, serie, name, länge] => Kommando::LokErstellen {
                art: art(lok_art)?,
                serie: (*serie).to_owned(),
                name: (*name).to_owned(),
                länge: ganzzahl(länge)?,
            },
            ["create", "coach", wagen_art, länge] => {
                Kommando::WagenErstellen { art: art(wagen_art)?, länge: ganzzahl(länge)? }
            },
            ["list", "engines"] => Kommando::LoksAuflisten,
            ["list", "coaches"] => Kommando::WagenAuflisten,
            ["delete", "rolling", "stock", name] => Kommando::FahrzeugEntfernen(fahrzeug(name)?),
            ["add", "train", zug, name] => {
                Kommando::Ankuppeln { zug: id(zug)?, fahrzeug: fahrzeug(name)? }
            },
            ["delete", "train", zug] => Kommando::ZugEntfernen(id(zug)?),
            ["list", "trains"] => Kommando::ZügeAuflisten,
            ["put", "train", zug, "at", position, "in", "direction", delta] => {
                Kommando::ZugPlatzieren {
                    zug: id(zug)?,
                    punkt: punkt(position)?,
                    richtung: richtung(delta)?,
                }
            },
            ["step", geschwindigkeit] => Kommando::Schritt(ganzzahl(geschwindigkeit)?),
            ["exit"] => Kommando::Beenden,
            _ => return Err(ParseFehler::UnbekanntesKommando(zeile.to_owned())),
        };
        Ok(kommando)
    }
}
