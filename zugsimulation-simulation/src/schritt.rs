//! Fahren der Züge in einzelnen Schritten und Stellen von Weichen.

use std::collections::{btree_map::Entry, BTreeMap, BTreeSet};

use log::{debug, info};

use zugsimulation_flotte::{Fuhrpark, ZugId};
use zugsimulation_gleis::{GleisId, WeicheStellenFehler};
use zugsimulation_typen::{Punkt, ZugPosition};

use crate::{zusammenstoss::Zusammenstöße, Simulation};

/// Mögliche neue Position eines Zuges und die dabei belegten Punkte.
type Kandidat = (ZugPosition, Vec<Punkt>);

/// Trage `zug` als Besitzer von `schlüssel` ein.
/// Gehört `schlüssel` bereits einem anderen Zug, stoßen beide zusammen.
fn beanspruche<K: Ord>(
    besitzer: &mut BTreeMap<K, ZugId>,
    schlüssel: K,
    zug: ZugId,
    zusammenstöße: &mut Zusammenstöße,
) {
    match besitzer.entry(schlüssel) {
        Entry::Vacant(vacant) => {
            let _ = vacant.insert(zug);
        },
        Entry::Occupied(occupied) => {
            let anderer = *occupied.get();
            if anderer != zug {
                zusammenstöße.vereinigen(anderer, zug);
            }
        },
    }
}

impl<F: Fuhrpark> Simulation<F> {
    /// Fahre alle Züge auf den Gleisen `|geschwindigkeit|` Schritte,
    /// bei negativer Geschwindigkeit rückwärts.
    ///
    /// Entgleiste und zusammengestoßene Züge werden von den Gleisen genommen.
    /// Rückgabewert sind alle Zusammenstöße über alle Schritte, wobei jeder entgleiste Zug
    /// eine eigene Gruppe bildet.
    pub fn schritt(&mut self, geschwindigkeit: i32) -> BTreeSet<BTreeSet<ZugId>> {
        let vorwärts = geschwindigkeit > 0;
        let mut zusammenstöße = BTreeSet::new();
        for _ in 0..geschwindigkeit.unsigned_abs() {
            if self.fuhrpark.auf_gleisen().is_empty() {
                debug!("Keine Züge mehr auf den Gleisen.");
                break;
            }
            zusammenstöße.extend(self.einzelschritt(vorwärts));
        }
        zusammenstöße
    }

    /// Ein einzelner Schritt aller Züge auf den Gleisen.
    ///
    /// Alle neuen Positionen werden berechnet, bevor eine davon übernommen wird,
    /// das Ergebnis hängt daher nicht von der Reihenfolge der Züge ab.
    fn einzelschritt(&mut self, vorwärts: bool) -> BTreeSet<BTreeSet<ZugId>> {
        let auf_gleisen = self.fuhrpark.auf_gleisen();
        let mut zusammenstöße = Zusammenstöße::neu(auf_gleisen.iter().copied());
        let mut kandidaten: BTreeMap<ZugId, Kandidat> = BTreeMap::new();
        for zug in auf_gleisen {
            if let Some(kandidat) = self.kandidat(&zug, vorwärts) {
                let _ = kandidaten.insert(zug, kandidat);
            } else {
                debug!("Zug {zug} entgleist.");
                zusammenstöße.hinzufügen(zug);
            }
        }

        let mut punkt_besitzer: BTreeMap<Punkt, ZugId> = BTreeMap::new();
        let mut gleis_besitzer: BTreeMap<GleisId, ZugId> = BTreeMap::new();
        for (zug, (_position, punkte)) in &kandidaten {
            for punkt in punkte {
                beanspruche(&mut punkt_besitzer, *punkt, *zug, &mut zusammenstöße);
                if let Some(gleis) = self.innen_gleis(punkt) {
                    beanspruche(&mut gleis_besitzer, gleis, *zug, &mut zusammenstöße);
                }
            }
        }

        for (zug, (position, _punkte)) in kandidaten {
            let neu = (!zusammenstöße.enthält(&zug)).then_some(position);
            self.fuhrpark.setze_position(&zug, neu);
        }
        let zusammenstöße = zusammenstöße.gruppen();
        for gruppe in &zusammenstöße {
            for zug in gruppe {
                self.fuhrpark.setze_position(zug, None);
            }
            info!("Zusammenstoß: {gruppe:?}");
        }
        zusammenstöße
    }

    /// Berechne die Position nach einem Schritt und die dabei belegten Punkte.
    ///
    /// Gibt [`None`] zurück, wenn der Zug entgleist.
    fn kandidat(&self, zug: &ZugId, vorwärts: bool) -> Option<Kandidat> {
        let position = self.fuhrpark.position(zug)?;
        let länge = self.fuhrpark.länge(zug)?;
        let neu = if vorwärts {
            self.netz.vorwärts(position)
        } else {
            self.netz.rückwärts(position)
        }?;
        let punkte = self.belegung(neu, länge)?;
        Some((neu, punkte))
    }

    /// Stelle eine Weiche auf das gewünschte Ende.
    ///
    /// Alle Züge, die einen Punkt der Weiche belegen, entgleisen vorher.
    ///
    /// ## Errors
    ///
    /// Es gibt keine Weiche mit der Id, oder `ende` ist keines ihrer Enden.
    pub fn weiche_stellen(&mut self, id: GleisId, ende: Punkt) -> Result<(), WeicheStellenFehler> {
        self.netz.prüfe_weiche_stellen(id, &ende)?;
        let entgleist: Vec<ZugId> = match self.netz.gleis(&id) {
            Some(weiche) => self
                .fuhrpark
                .auf_gleisen()
                .into_iter()
                .filter(|zug| self.belegte_punkte(zug).iter().any(|punkt| weiche.enthält(punkt)))
                .collect(),
            None => Vec::new(),
        };
        for zug in entgleist {
            info!("Zug {zug} entgleist beim Stellen von Weiche {id}.");
            self.fuhrpark.setze_position(&zug, None);
        }
        self.netz.weiche_stellen(id, ende)
    }
}
