//! Tests für [`Zusammenstöße`].

use std::collections::BTreeSet;

use zugsimulation_flotte::ZugId;
use zugsimulation_id::Id;
use zugsimulation_test_util::{
    expect_eq, expect_false, expect_true, init_test_logging, Expectation,
};

use crate::zusammenstoss::Zusammenstöße;

/// Erzeuge eine [`ZugId`] aus einer Zahl.
fn zug(repräsentation: u32) -> ZugId {
    Id::aus_repräsentation(repräsentation).expect("Test verwendet nur positive Ids.")
}

/// Erzeuge eine Gruppe aus Zahlen.
fn gruppe(ids: &[u32]) -> BTreeSet<ZugId> {
    ids.iter().copied().map(zug).collect()
}

#[test]
fn leer() -> Result<(), Expectation> {
    init_test_logging();

    let zusammenstöße = Zusammenstöße::neu([zug(1), zug(2)]);
    expect_false(zusammenstöße.enthält(&zug(1)))?;
    expect_eq(zusammenstöße.gruppen(), BTreeSet::new())?;
    Ok(())
}

#[test]
fn transitiv() -> Result<(), Expectation> {
    init_test_logging();

    let mut zusammenstöße = Zusammenstöße::neu([1, 2, 3, 4, 5, 7].map(zug));
    zusammenstöße.vereinigen(zug(3), zug(1));
    zusammenstöße.vereinigen(zug(5), zug(4));
    zusammenstöße.hinzufügen(zug(7));
    zusammenstöße.vereinigen(zug(1), zug(5));
    zusammenstöße.hinzufügen(zug(3));
    expect_true(zusammenstöße.enthält(&zug(4)))?;
    // Zug 2 ist nicht beteiligt
    expect_false(zusammenstöße.enthält(&zug(2)))?;
    expect_eq(
        zusammenstöße.gruppen(),
        BTreeSet::from([gruppe(&[1, 3, 4, 5]), gruppe(&[7])]),
    )?;
    Ok(())
}

#[test]
fn unbekannter_zug() -> Result<(), Expectation> {
    init_test_logging();

    let mut zusammenstöße = Zusammenstöße::neu([zug(1), zug(2)]);
    zusammenstöße.vereinigen(zug(1), zug(9));
    expect_false(zusammenstöße.enthält(&zug(9)))?;
    expect_eq(zusammenstöße.gruppen(), BTreeSet::from([gruppe(&[1])]))?;
    Ok(())
}

#[test]
fn reihenfolge_egal() -> Result<(), Expectation> {
    init_test_logging();

    let paare = [(1, 2), (4, 3), (2, 6), (8, 9), (6, 4)];
    let mut erwartet = None;
    // alle Rotationen der Paar-Reihenfolge, jeweils auch mit vertauschten Paaren
    for rotation in 0..paare.len() {
        for vertauscht in [false, true] {
            let mut zusammenstöße = Zusammenstöße::neu((1..=9).map(zug));
            for (a, b) in paare.iter().cycle().skip(rotation).take(paare.len()) {
                if vertauscht {
                    zusammenstöße.vereinigen(zug(*b), zug(*a));
                } else {
                    zusammenstöße.vereinigen(zug(*a), zug(*b));
                }
            }
            let gruppen = zusammenstöße.gruppen();
            if let Some(bisher) = erwartet.clone() {
                expect_eq(gruppen, bisher)?;
            } else {
                erwartet = Some(gruppen);
            }
        }
    }
    expect_eq(erwartet, Some(BTreeSet::from([gruppe(&[1, 2, 3, 4, 6]), gruppe(&[8, 9])])))?;
    Ok(())
}
