//! Tests für das Parsen von Kommandos.

use zugsimulation_flotte::{
    FahrzeugName, LokArt, UngültigeFahrzeugArt, UngültigerFahrzeugName, WagenArt,
};
use zugsimulation_id::Id;
use zugsimulation_test_util::{expect_eq, init_test_logging, Expectation};
use zugsimulation_typen::{Punkt, Richtung};

use crate::kommando::{Kommando, ParseFehler};

#[test]
fn gleise() -> Result<(), Expectation> {
    init_test_logging();

    expect_eq(
        "add track (1,-2) -> (+5,-2)".parse(),
        Ok(Kommando::GleisHinzufügen { anfang: Punkt::neu(1, -2), ende: Punkt::neu(5, -2) }),
    )?;
    expect_eq(
        "add switch (0,0) -> (5,0),(0,5)".parse(),
        Ok(Kommando::WeicheHinzufügen {
            anfang: Punkt::neu(0, 0),
            ende0: Punkt::neu(5, 0),
            ende1: Punkt::neu(0, 5),
        }),
    )?;
    expect_eq(
        "delete track 3".parse(),
        Ok(Kommando::GleisEntfernen(Id::aus_repräsentation(3).expect("3 ist positiv."))),
    )?;
    expect_eq("list tracks".parse(), Ok(Kommando::GleiseAuflisten))?;
    expect_eq(
        "set switch 1 position (0,5)".parse(),
        Ok(Kommando::WeicheStellen { id: Id::MIN, ende: Punkt::neu(0, 5) }),
    )?;
    Ok(())
}

#[test]
fn fahrzeuge_und_züge() -> Result<(), Expectation> {
    init_test_logging();

    expect_eq(
        "create engine steam 103 118 3".parse(),
        Ok(Kommando::LokErstellen {
            art: LokArt::Dampf,
            serie: "103".to_owned(),
            name: "118".to_owned(),
            länge: 3,
        }),
    )?;
    expect_eq(
        "create coach special 1".parse(),
        Ok(Kommando::WagenErstellen { art: WagenArt::Spezial, länge: 1 }),
    )?;
    expect_eq("list engines".parse(), Ok(Kommando::LoksAuflisten))?;
    expect_eq("list coaches".parse(), Ok(Kommando::WagenAuflisten))?;
    expect_eq(
        "delete rolling stock W1".parse(),
        Ok(Kommando::FahrzeugEntfernen(FahrzeugName::Wagen(1))),
    )?;
    expect_eq(
        "add train 1 103-118".parse(),
        Ok(Kommando::Ankuppeln {
            zug: Id::MIN,
            fahrzeug: FahrzeugName::Lok { serie: "103".to_owned(), name: "118".to_owned() },
        }),
    )?;
    expect_eq("delete train 1".parse(), Ok(Kommando::ZugEntfernen(Id::MIN)))?;
    expect_eq("list trains".parse(), Ok(Kommando::ZügeAuflisten))?;
    expect_eq(
        "put train 1 at (1,0) in direction -3,0".parse(),
        Ok(Kommando::ZugPlatzieren {
            zug: Id::MIN,
            punkt: Punkt::neu(1, 0),
            richtung: Richtung::Links,
        }),
    )?;
    expect_eq("step -2".parse(), Ok(Kommando::Schritt(-2)))?;
    expect_eq("exit".parse(), Ok(Kommando::Beenden))?;
    Ok(())
}

#[test]
fn ungültig() -> Result<(), Expectation> {
    init_test_logging();

    expect_eq(
        "add track (1,2)->(5,2)".parse::<Kommando>(),
        Err(ParseFehler::UnbekanntesKommando("add track (1,2)->(5,2)".to_owned())),
    )?;
    expect_eq(
        "list  tracks".parse::<Kommando>(),
        Err(ParseFehler::UnbekanntesKommando("list  tracks".to_owned())),
    )?;
    expect_eq(
        "add track (1,2 -> (5,2)".parse::<Kommando>(),
        Err(ParseFehler::Punkt("(1,2".to_owned())),
    )?;
    expect_eq(
        "add switch (0,0) -> (5,0)(0,5)".parse::<Kommando>(),
        Err(ParseFehler::PunktPaar("(5,0)(0,5)".to_owned())),
    )?;
    expect_eq("delete track 0".parse::<Kommando>(), Err(ParseFehler::Id("0".to_owned())))?;
    expect_eq("step x".parse::<Kommando>(), Err(ParseFehler::Zahl("x".to_owned())))?;
    expect_eq(
        "create coach freight -1".parse::<Kommando>(),
        Err(ParseFehler::Zahl("-1".to_owned())),
    )?;
    expect_eq(
        "create engine freight 103 118 3".parse::<Kommando>(),
        Err(ParseFehler::FahrzeugArt(UngültigeFahrzeugArt("freight".to_owned()))),
    )?;
    expect_eq(
        "create coach 1".parse::<Kommando>(),
        Err(ParseFehler::UnbekanntesKommando("create coach 1".to_owned())),
    )?;
    expect_eq(
        "put train 1 at (1,0) in direction 1,1".parse::<Kommando>(),
        Err(ParseFehler::Richtung("1,1".to_owned())),
    )?;
    expect_eq(
        "add train 1 W-1".parse::<Kommando>(),
        Err(ParseFehler::FahrzeugName(UngültigerFahrzeugName("W-1".to_owned()))),
    )?;
    Ok(())
}
