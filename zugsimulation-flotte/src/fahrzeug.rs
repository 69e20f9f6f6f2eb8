//! Loks und Wagen.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use thiserror::Error;

use zugsimulation_id::KeineIdVerfügbar;

use crate::zug::ZugId;

#[cfg(test)]
mod test;

/// Eindeutiger Name eines Fahrzeugs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FahrzeugName {
    /// Eine Lok wird über Baureihe und Name identifiziert.
    Lok {
        /// Die Baureihe, darf kein `W` enthalten.
        serie: String,
        /// Der Name innerhalb der Baureihe.
        name: String,
    },
    /// Wagen werden durchnummeriert.
    Wagen(u32),
}

impl FahrzeugName {
    /// Ist das Fahrzeug eine Lok?
    #[must_use]
    pub const fn ist_lok(&self) -> bool {
        matches!(self, FahrzeugName::Lok { .. })
    }
}

impl Display for FahrzeugName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FahrzeugName::Lok { serie, name } => write!(formatter, "{serie}-{name}"),
            FahrzeugName::Wagen(nummer) => write!(formatter, "W{nummer}"),
        }
    }
}

/// Der Text ist kein gültiger [`FahrzeugName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' ist kein gültiger Fahrzeug-Name.")]
pub struct UngültigerFahrzeugName(pub String);

/// Ist `text` ein nicht-leeres, alphanumerisches ASCII-Wort?
pub(crate) fn ist_alphanumerisch(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|zeichen| zeichen.is_ascii_alphanumeric())
}

/// Ist `serie` eine gültige Baureihe (alphanumerisch, ohne `W`)?
pub(crate) fn ist_serie(serie: &str) -> bool {
    ist_alphanumerisch(serie) && !serie.contains('W')
}

impl FromStr for FahrzeugName {
    type Err = UngültigerFahrzeugName;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let ungültig = || UngültigerFahrzeugName(text.to_owned());
        if let Some(nummer) = text.strip_prefix('W') {
            let nummer: u32 = nummer.parse().map_err(|_fehler| ungültig())?;
            if nummer == 0 {
                return Err(ungültig());
            }
            Ok(FahrzeugName::Wagen(nummer))
        } else {
            let (serie, name) = text.split_once('-').ok_or_else(ungültig)?;
            if ist_serie(serie) && ist_alphanumerisch(name) {
                Ok(FahrzeugName::Lok { serie: serie.to_owned(), name: name.to_owned() })
            } else {
                Err(ungültig())
            }
        }
    }
}

/// Der Text ist keine bekannte Art von Lok oder Wagen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' ist keine gültige Fahrzeug-Art.")]
pub struct UngültigeFahrzeugArt(pub String);

/// Antrieb einer Lok.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LokArt {
    /// `electrical`
    Elektrisch,
    /// `steam`
    Dampf,
    /// `diesel`
    Diesel,
}

impl LokArt {
    /// Der Name in der Text-Darstellung.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            LokArt::Elektrisch => "electrical",
            LokArt::Dampf => "steam",
            LokArt::Diesel => "diesel",
        }
    }
}

impl FromStr for LokArt {
    type Err = UngültigeFahrzeugArt;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        [LokArt::Elektrisch, LokArt::Dampf, LokArt::Diesel]
            .into_iter()
            .find(|art| art.name() == text)
            .ok_or_else(|| UngültigeFahrzeugArt(text.to_owned()))
    }
}

/// Verwendungszweck eines Wagens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WagenArt {
    /// `passenger`
    Personen,
    /// `freight`
    Güter,
    /// `special`
    Spezial,
}

impl WagenArt {
    /// Der Name in der Text-Darstellung.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            WagenArt::Personen => "passenger",
            WagenArt::Güter => "freight",
            WagenArt::Spezial => "special",
        }
    }
}

impl FromStr for WagenArt {
    type Err = UngültigeFahrzeugArt;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        [WagenArt::Personen, WagenArt::Güter, WagenArt::Spezial]
            .into_iter()
            .find(|art| art.name() == text)
            .ok_or_else(|| UngültigeFahrzeugArt(text.to_owned()))
    }
}

/// Art eines Fahrzeugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FahrzeugArt {
    /// Eine Lok.
    Lok(LokArt),
    /// Ein Wagen.
    Wagen(WagenArt),
}

impl FahrzeugArt {
    /// Der erste Buchstabe der Art, z.B. `e` für eine elektrische Lok.
    #[must_use]
    pub const fn kürzel(&self) -> char {
        match self {
            FahrzeugArt::Lok(LokArt::Elektrisch) => 'e',
            FahrzeugArt::Lok(LokArt::Dampf) | FahrzeugArt::Wagen(WagenArt::Spezial) => 's',
            FahrzeugArt::Lok(LokArt::Diesel) => 'd',
            FahrzeugArt::Wagen(WagenArt::Personen) => 'p',
            FahrzeugArt::Wagen(WagenArt::Güter) => 'f',
        }
    }
}

impl Display for FahrzeugArt {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FahrzeugArt::Lok(art) => write!(formatter, "{} engine", art.name()),
            FahrzeugArt::Wagen(art) => write!(formatter, "{} coach", art.name()),
        }
    }
}

/// Ein Fahrzeug mit positiver Länge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fahrzeug {
    /// Die Art des Fahrzeugs.
    pub(crate) art: FahrzeugArt,
    /// Die Länge des Fahrzeugs.
    pub(crate) länge: u32,
}

impl Fahrzeug {
    /// Die Art des Fahrzeugs.
    #[must_use]
    pub const fn art(&self) -> FahrzeugArt {
        self.art
    }

    /// Die Länge des Fahrzeugs.
    #[must_use]
    pub const fn länge(&self) -> u32 {
        self.länge
    }
}

/// Fehler beim Erstellen oder Entfernen eines Fahrzeugs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FahrzeugFehler {
    /// Fahrzeuge müssen eine positive Länge haben.
    #[error("Die Länge eines Fahrzeugs muss positiv sein.")]
    LängeNichtPositiv,
    /// Ungültige Baureihe oder ungültiger Name.
    #[error("'{serie}-{name}' ist kein gültiger Name für eine Lok.")]
    UngültigerName {
        /// Die gewünschte Baureihe.
        serie: String,
        /// Der gewünschte Name.
        name: String,
    },
    /// Es gibt bereits ein Fahrzeug mit dem Namen.
    #[error("Es gibt bereits ein Fahrzeug {0}.")]
    ExistiertBereits(FahrzeugName),
    /// Es gibt kein Fahrzeug mit dem Namen.
    #[error("Es gibt kein Fahrzeug {0}.")]
    NichtGefunden(FahrzeugName),
    /// Das Fahrzeug ist Teil eines Zuges.
    #[error("Fahrzeug {fahrzeug} ist Teil von Zug {zug}.")]
    InVerwendung {
        /// Das Fahrzeug.
        fahrzeug: FahrzeugName,
        /// Der Zug, zu dem das Fahrzeug gehört.
        zug: ZugId,
    },
    /// Alle Wagen-Nummern sind vergeben.
    #[error("Es ist keine Wagen-Nummer mehr frei.")]
    KeineIdVerfügbar(KeineIdVerfügbar),
}
