//! Tests für geprüftes Hinzufügen und Platzieren.

use zugsimulation_flotte::{Flotte, Fuhrpark, LokArt, WagenArt, ZugId};
use zugsimulation_gleis::GleisId;
use zugsimulation_id::Id;
use zugsimulation_test_util::{expect_eq, expect_false, expect_true, init_test_logging, Expectation};
use zugsimulation_typen::{Punkt, Richtung, ZugPosition};

use crate::{
    hinzufügen_entfernen::{HinzufügenFehler, PlatzierenFehler},
    Simulation,
};

/// Erzeuge eine [`GleisId`] aus einer Zahl.
fn gleis(repräsentation: u32) -> GleisId {
    Id::aus_repräsentation(repräsentation).expect("Test verwendet nur positive Ids.")
}

/// Erzeuge eine [`ZugId`] aus einer Zahl.
fn zug(repräsentation: u32) -> ZugId {
    Id::aus_repräsentation(repräsentation).expect("Test verwendet nur positive Ids.")
}

/// Kurzschreibweise für [`Punkt::neu`].
fn punkt(x: i32, y: i32) -> Punkt {
    Punkt::neu(x, y)
}

/// Eine Simulation mit einer Kurve: (0,0) -> (5,0) -> (5,5).
fn kurve() -> Simulation {
    let mut simulation = Simulation::neu(Flotte::neu());
    let _ = simulation.gleis_hinzufügen(punkt(0, 0), punkt(5, 0)).expect("Gültiges Gleis.");
    let _ = simulation.gleis_hinzufügen(punkt(5, 0), punkt(5, 5)).expect("Gültiges Gleis.");
    simulation
}

#[test]
fn gleis_hinzufügen() -> Result<(), Expectation> {
    init_test_logging();

    let mut simulation = kurve();
    expect_eq(
        simulation.gleis_hinzufügen(punkt(0, 0), punkt(3, 3)),
        Err(HinzufügenFehler::NichtAusgerichtet { anfang: punkt(0, 0), ende: punkt(3, 3) }),
    )?;
    expect_eq(
        simulation.gleis_hinzufügen(punkt(0, 0), punkt(0, 0)),
        Err(HinzufügenFehler::Entartet(punkt(0, 0))),
    )?;
    expect_eq(
        simulation.gleis_hinzufügen(punkt(20, 0), punkt(30, 0)),
        Err(HinzufügenFehler::NichtVerbunden),
    )?;
    expect_eq(
        simulation.gleis_hinzufügen(punkt(5, 0), punkt(9, 0)),
        Err(HinzufügenFehler::AnschlussBelegt(punkt(5, 0))),
    )?;
    // parallel auf einem bestehenden Gleis
    expect_eq(
        simulation.gleis_hinzufügen(punkt(5, 5), punkt(5, 2)),
        Err(HinzufügenFehler::Überschneidung(gleis(2))),
    )?;
    // Abzweigung mitten aus einem Gleis
    expect_eq(
        simulation.gleis_hinzufügen(punkt(0, 0), punkt(0, 5)).map(|id| id.repräsentation()),
        Ok(3),
    )?;
    expect_eq(
        simulation.gleis_hinzufügen(punkt(0, 5), punkt(0, 2)),
        Err(HinzufügenFehler::Überschneidung(gleis(3))),
    )?;
    expect_eq(
        simulation.gleis_hinzufügen(punkt(0, 5), punkt(7, 5)),
        Err(HinzufügenFehler::Überschneidung(gleis(2))),
    )?;
    // Kreis schließen
    expect_eq(simulation.gleis_hinzufügen(punkt(0, 5), punkt(5, 5)), Ok(gleis(4)))?;
    expect_true(simulation.netz().ist_zusammenhängend())?;
    Ok(())
}

#[test]
fn weiche_hinzufügen() -> Result<(), Expectation> {
    init_test_logging();

    let mut simulation = kurve();
    expect_eq(
        simulation.weiche_hinzufügen(punkt(5, 5), punkt(5, 9), punkt(5, 12)),
        Err(HinzufügenFehler::WeichenEnden(punkt(5, 5))),
    )?;
    expect_eq(
        simulation.weiche_hinzufügen(punkt(5, 5), punkt(9, 5), punkt(9, 5)),
        Err(HinzufügenFehler::WeichenEnden(punkt(5, 5))),
    )?;
    expect_eq(
        simulation.weiche_hinzufügen(punkt(5, 5), punkt(5, 9), punkt(8, 7)),
        Err(HinzufügenFehler::NichtAusgerichtet { anfang: punkt(5, 5), ende: punkt(8, 7) }),
    )?;
    let weiche = simulation
        .weiche_hinzufügen(punkt(5, 5), punkt(5, 9), punkt(9, 5))
        .expect("Gültige Weiche.");
    expect_eq(weiche, gleis(3))?;
    expect_false(simulation.alle_weichen_gestellt())?;
    // an einem nicht aktiven Ende kann trotzdem ein Gleis angeschlossen werden
    expect_eq(simulation.gleis_hinzufügen(punkt(9, 5), punkt(9, 0)), Ok(gleis(4)))?;
    Ok(())
}

#[test]
fn platzieren() -> Result<(), Expectation> {
    init_test_logging();

    let mut simulation = kurve();
    let flotte = simulation.fuhrpark_mut();
    let wagen = flotte.wagen_erstellen(WagenArt::Güter, 1).expect("Gültiger Wagen.");
    let lok = flotte.lok_erstellen(LokArt::Diesel, "E", "1", 2).expect("Gültige Lok.");
    let lang = flotte.lok_erstellen(LokArt::Diesel, "E", "2", 9).expect("Gültige Lok.");
    flotte.ankuppeln(zug(1), wagen).expect("Zug 1 kann erstellt werden.");
    flotte.ankuppeln(zug(2), lok).expect("Zug 2 kann erstellt werden.");
    flotte.ankuppeln(zug(3), lang).expect("Zug 3 kann erstellt werden.");

    expect_eq(
        simulation.zug_platzieren(zug(9), punkt(2, 0), Richtung::Rechts),
        Err(PlatzierenFehler::ZugNichtGefunden(zug(9))),
    )?;
    expect_eq(
        simulation.zug_platzieren(zug(1), punkt(2, 0), Richtung::Rechts),
        Err(PlatzierenFehler::Ungültig(zug(1))),
    )?;
    expect_eq(
        simulation.zug_platzieren(zug(2), punkt(2, 2), Richtung::Rechts),
        Err(PlatzierenFehler::KeinGleis(punkt(2, 2))),
    )?;
    expect_eq(
        simulation.zug_platzieren(zug(2), punkt(2, 0), Richtung::Oben),
        Err(PlatzierenFehler::FalscheRichtung { punkt: punkt(2, 0), richtung: Richtung::Oben }),
    )?;
    // zu lang für die Strecke bis zur Sackgasse
    expect_eq(
        simulation.zug_platzieren(zug(3), punkt(2, 0), Richtung::Rechts),
        Err(PlatzierenFehler::PasstNicht(zug(3))),
    )?;

    // an der Kurve wird die Richtung normalisiert
    expect_eq(simulation.zug_platzieren(zug(2), punkt(5, 0), Richtung::Oben), Ok(()))?;
    expect_eq(
        simulation.fuhrpark().position(&zug(2)),
        Some(ZugPosition::neu(punkt(5, 0), Richtung::Rechts)),
    )?;
    expect_eq(
        simulation.zug_platzieren(zug(2), punkt(5, 0), Richtung::Oben),
        Err(PlatzierenFehler::AufGleisen(zug(2))),
    )?;

    // belegtes Gleis
    expect_eq(
        simulation.zug_platzieren(zug(3), punkt(5, 5), Richtung::Oben),
        Err(PlatzierenFehler::PasstNicht(zug(3))),
    )?;

    expect_true(simulation.zug_entfernen(&zug(2)).is_some())?;
    expect_eq(simulation.fuhrpark().auf_gleisen(), Vec::new())?;
    Ok(())
}
