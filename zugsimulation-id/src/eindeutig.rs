//! Erzeuge eindeutige [`Ids`](Id) über die kleinste freie [`Repräsentation`].

use std::{
    any::{type_name, TypeId},
    cmp::Ordering,
    collections::BTreeSet,
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use log::trace;
use thiserror::Error;

/// Zahlen-typ, der über [`Id::repräsentation`] erhalten werden kann.
///
/// Implementierungs-Detail: aktuell verwenden Eq, Ord, Hash-Instanzen von [`Id`] diese Repräsentation.
pub type Repräsentation = u32;

/// Eine eindeutige [`Id`] für den Typ T.
///
/// Die [`Repräsentation`] ist immer positiv.
pub struct Id<T: 'static> {
    /// Der Zahlenwert für die Unterscheidung unterschiedlicher [`Ids`](Id).
    id: Repräsentation,
    /// [`PhantomData`]
    phantom: PhantomData<fn() -> T>,
}

impl<T> Debug for Id<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Id").field(&self.id).finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.id, formatter)
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<T: 'static> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        TypeId::of::<T>().hash(state);
    }
}

/// Alle [`Ids`](Id) wurden bereits verwendet. Es ist aktuell keine eindeutige [`Id`] verfügbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Es ist keine Id für den Typ {type_name} verfügbar!")]
pub struct KeineIdVerfügbar {
    /// Die [`TypeId`] des Typs für den eine [`Id`] gewünscht wurde.
    #[allow(dead_code)]
    type_id: TypeId,
    /// Der [`Typ-Name`](type_name) des Typs für den eine [`Id`] gewünscht wurde.
    #[allow(dead_code)]
    type_name: &'static str,
}

impl KeineIdVerfügbar {
    /// Erzeuge einen neuen [`KeineIdVerfügbar`]-Fehler für den gewünschten Typ.
    #[must_use]
    pub fn für<T: 'static>() -> KeineIdVerfügbar {
        KeineIdVerfügbar { type_id: TypeId::of::<T>(), type_name: type_name::<T>() }
    }
}

/// Finde die kleinste positive Zahl, die nicht in `verwendet` enthalten ist.
///
/// Gibt [`None`] zurück, wenn alle Zahlen bis [`Repräsentation::MAX`] verwendet werden.
pub fn kleinste_freie_repräsentation(
    verwendet: impl IntoIterator<Item = Repräsentation>,
) -> Option<Repräsentation> {
    let sortiert: BTreeSet<Repräsentation> = verwendet.into_iter().collect();
    let mut kandidat: Repräsentation = 1;
    for id in sortiert {
        match id.cmp(&kandidat) {
            Ordering::Less => {},
            Ordering::Equal => kandidat = kandidat.checked_add(1)?,
            Ordering::Greater => break,
        }
    }
    Some(kandidat)
}

impl<T> Id<T> {
    /// Die kleinste mögliche [`Id`].
    pub const MIN: Id<T> = Id { id: 1, phantom: PhantomData };

    /// Erhalte die kleinste [`Id`], die nicht in `verwendet` enthalten ist.
    ///
    /// ## Errors
    ///
    /// Alle Ids für `T` sind bereits in Verwendung.
    /// Es kann aktuell keine neue [`Id`] erzeugt werden.
    pub fn kleinste_freie<'t>(
        verwendet: impl IntoIterator<Item = &'t Id<T>>,
    ) -> Result<Id<T>, KeineIdVerfügbar>
    where
        T: 'static,
    {
        let id = kleinste_freie_repräsentation(verwendet.into_iter().map(Id::repräsentation))
            .ok_or_else(KeineIdVerfügbar::für::<T>)?;
        trace!("Erzeuge Id '{}' für Typ '{}'.", id, type_name::<T>());
        Ok(Id { id, phantom: PhantomData })
    }

    /// Erzeuge die [`Id`] mit der gewünschten [`Repräsentation`], z.B. aus einer Benutzereingabe.
    ///
    /// Gibt [`None`] zurück, wenn die Repräsentation nicht positiv ist.
    #[must_use]
    pub fn aus_repräsentation(id: Repräsentation) -> Option<Id<T>> {
        (id > 0).then_some(Id { id, phantom: PhantomData })
    }

    /// Erhalte eine eindeutige Zahl für die [`Id`].
    ///
    /// Zwei gleichzeitig verwendete [`Ids`](Id) haben unterschiedliche Zahlen.
    /// Nach dem Entfernen des zugehörigen Elements kann die Zahl erneut vergeben werden.
    #[must_use]
    pub fn repräsentation(&self) -> Repräsentation {
        self.id
    }
}
