//! Tests für [`Gleis`].

use zugsimulation_test_util::{expect_eq, expect_false, expect_true, init_test_logging, Expectation};
use zugsimulation_typen::{Ausrichtung, Punkt, Richtung};

use crate::gleis::Gleis;

#[test]
fn gerade() -> Result<(), Expectation> {
    init_test_logging();

    let gleis = Gleis::gerade(Punkt::neu(5, 0), Punkt::neu(0, 0));
    expect_eq(gleis.länge(), Some(5))?;
    expect_eq(gleis.ausrichtung(), Some(Ausrichtung::Horizontal))?;
    expect_true(gleis.enthält(&Punkt::neu(2, 0)))?;
    expect_false(gleis.enthält(&Punkt::neu(2, 1)))?;
    expect_true(gleis.ist_ende(&Punkt::neu(0, 0)))?;
    expect_false(gleis.ist_ende(&Punkt::neu(1, 0)))?;
    expect_eq(gleis.anschlüsse().collect::<Vec<_>>(), vec![Punkt::neu(5, 0), Punkt::neu(0, 0)])?;
    Ok(())
}

#[test]
fn verfügbare_richtungen() -> Result<(), Expectation> {
    init_test_logging();

    let gleis = Gleis::gerade(Punkt::neu(0, 0), Punkt::neu(0, 3));
    let mitte = Punkt::neu(0, 1);
    expect_eq(
        gleis.verfügbare_richtungen(&mitte).collect::<Vec<_>>(),
        vec![Richtung::Oben, Richtung::Unten],
    )?;
    let ende = Punkt::neu(0, 3);
    expect_eq(gleis.verfügbare_richtungen(&ende).collect::<Vec<_>>(), vec![Richtung::Unten])?;
    let daneben = Punkt::neu(1, 1);
    expect_eq(gleis.verfügbare_richtungen(&daneben).count(), 0)?;
    Ok(())
}

#[test]
fn weiche() -> Result<(), Expectation> {
    init_test_logging();

    let anfang = Punkt::neu(0, 0);
    let ende0 = Punkt::neu(4, 0);
    let ende1 = Punkt::neu(0, 4);
    let mut weiche = Gleis::weiche(anfang, ende0, ende1);

    // nicht gestellt: keine Punkte, keine Länge, aber alle Anschlüsse
    expect_false(weiche.enthält(&anfang))?;
    expect_eq(weiche.länge(), None)?;
    expect_eq(weiche.ausrichtung(), None)?;
    expect_eq(weiche.anschlüsse().count(), 3)?;
    expect_true(weiche.hat_anschluss(&ende1))?;

    expect_true(weiche.stellen(ende1))?;
    expect_eq(weiche.ende(), Some(ende1))?;
    expect_true(weiche.enthält(&Punkt::neu(0, 2)))?;
    expect_false(weiche.enthält(&Punkt::neu(2, 0)))?;
    expect_eq(weiche.ausrichtung(), Some(Ausrichtung::Vertikal))?;

    // kein Ende der Weiche: Stellung bleibt unverändert
    expect_false(weiche.stellen(Punkt::neu(1, 1)))?;
    expect_eq(weiche.ende(), Some(ende1))?;

    let mut gerade = Gleis::gerade(anfang, ende0);
    expect_false(gerade.stellen(ende0))?;
    expect_eq(weiche.strecken().count(), 2)?;
    Ok(())
}
