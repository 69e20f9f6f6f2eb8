//! Gruppierung zusammengestoßener Züge (disjoint-set über [`ZugIds`](ZugId)).

use std::collections::{BTreeMap, BTreeSet};

use log::warn;
use petgraph::unionfind::UnionFind;

use zugsimulation_flotte::ZugId;

#[cfg(test)]
mod test;

/// Gruppen von Zügen, die an einem gemeinsamen Zusammenstoß beteiligt sind.
///
/// Gruppen werden transitiv zusammengeführt: stößt A mit B und B mit C zusammen,
/// bilden A, B und C eine Gruppe, unabhängig von der Reihenfolge der Aufrufe.
#[derive(Debug, Clone)]
pub struct Zusammenstöße {
    /// Alle Züge, die an einem Zusammenstoß beteiligt sein können, aufsteigend sortiert.
    /// Der Index eines Zuges ist sein Element in `mengen`.
    züge: Vec<ZugId>,
    /// Ist der Zug mit dem gleichen Index an einem Zusammenstoß beteiligt?
    beteiligt: Vec<bool>,
    /// Disjunkte Mengen über die Indizes in `züge`.
    mengen: UnionFind<usize>,
}

impl Zusammenstöße {
    /// Erzeuge eine leere Sammlung für die übergebenen Züge.
    ///
    /// Nur diese Züge können später hinzugefügt oder vereinigt werden.
    #[must_use]
    pub fn neu(züge: impl IntoIterator<Item = ZugId>) -> Zusammenstöße {
        let züge: Vec<ZugId> = züge.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        let anzahl = züge.len();
        Zusammenstöße { züge, beteiligt: vec![false; anzahl], mengen: UnionFind::new(anzahl) }
    }

    /// Der Index des Zuges in den disjunkten Mengen.
    fn index(&self, zug: &ZugId) -> Option<usize> {
        self.züge.binary_search(zug).ok()
    }

    /// Ist der Zug an einem Zusammenstoß beteiligt?
    #[must_use]
    pub fn enthält(&self, zug: &ZugId) -> bool {
        self.index(zug).and_then(|index| self.beteiligt.get(index)).copied().unwrap_or(false)
    }

    /// Füge einen Zug als eigene Gruppe hinzu, sofern er noch nicht enthalten ist.
    ///
    /// Unbekannte Züge werden ignoriert.
    pub fn hinzufügen(&mut self, zug: ZugId) {
        if let Some(beteiligt) = self.index(&zug).and_then(|index| self.beteiligt.get_mut(index)) {
            *beteiligt = true;
        } else {
            warn!("Zusammenstoß mit unbekanntem Zug {zug} ignoriert.");
        }
    }

    /// Führe die Gruppen beider Züge zusammen.
    pub fn vereinigen(&mut self, zug0: ZugId, zug1: ZugId) {
        self.hinzufügen(zug0);
        self.hinzufügen(zug1);
        if let (Some(index0), Some(index1)) = (self.index(&zug0), self.index(&zug1)) {
            let _ = self.mengen.union(index0, index1);
        }
    }

    /// Alle Gruppen.
    #[must_use]
    pub fn gruppen(self) -> BTreeSet<BTreeSet<ZugId>> {
        let Zusammenstöße { züge, beteiligt, mengen } = self;
        let mut gruppen: BTreeMap<usize, BTreeSet<ZugId>> = BTreeMap::new();
        for ((zug, beteiligt), wurzel) in züge.into_iter().zip(beteiligt).zip(mengen.into_labeling())
        {
            if beteiligt {
                let _ = gruppen.entry(wurzel).or_default().insert(zug);
            }
        }
        gruppen.into_values().collect()
    }
}
