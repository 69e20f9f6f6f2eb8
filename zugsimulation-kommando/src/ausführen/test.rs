//! Tests für das Ausführen von Kommandos.

use zugsimulation_flotte::{
    AnkuppelnFehler, FahrzeugFehler, FahrzeugName, Flotte, UngültigeFahrzeugArt,
};
use zugsimulation_gleis::EntfernenFehler;
use zugsimulation_id::Id;
use zugsimulation_simulation::{HinzufügenFehler, Simulation};
use zugsimulation_test_util::{expect_eq, init_test_logging, Expectation};
use zugsimulation_typen::Punkt;

use crate::{
    ausführen::{zeile_ausführen, Ausgabe, ZustandFehler},
    kommando::ParseFehler,
    Fehler,
};

/// Führe alle Zeilen nacheinander aus und sammle die Ausgabe.
/// Fehler werden als `Error` ausgegeben.
fn sitzung(zeilen: &[&str]) -> Vec<String> {
    let mut simulation = Simulation::neu(Flotte::neu());
    let mut ausgabe = Vec::new();
    for zeile in zeilen {
        match zeile_ausführen(&mut simulation, zeile) {
            Ok(Ausgabe::Zeilen(neue_zeilen)) => ausgabe.extend(neue_zeilen),
            Ok(Ausgabe::Beenden) => break,
            Err(_fehler) => ausgabe.push(String::from("Error")),
        }
    }
    ausgabe
}

#[test]
fn beispiel_sitzung() -> Result<(), Expectation> {
    init_test_logging();

    let ausgabe = sitzung(&[
        "list tracks",
        "add track (1,1) -> (5,1)",
        "add track (10,10) -> (10,11)",
        "list tracks",
        "add switch (5,1) -> (8,1),(5,3)",
        "add track (5,3) -> (5,10)",
        "add track (8,1) -> (10,1)",
        "list tracks",
        "step 1",
        "set switch 2 position (8,1)",
        "list tracks",
        "list engines",
        "list coaches",
        "create engine electrical 103 118 1",
        "create coach passenger 1",
        "list trains",
        "add train 1 103-118",
        "add train 1 W1",
        "list trains",
        "list engines",
        "list coaches",
        "put train 1 at (3,1) in direction 1,0",
        "step 2",
        "step 2",
        "set switch 2 position (5,3)",
        "step 1",
        "delete rolling stock W1",
        "delete train 1",
        "delete train 1",
        "list trains",
        "list coaches",
        "delete rolling stock W1",
        "list coaches",
        "delete track 2",
        "delete track 4",
        "exit",
        "list tracks",
    ]);
    let erwartet = [
        "No track exists",
        "1",
        "Error",
        "t 1 (1,1) -> (5,1) 4",
        "2",
        "3",
        "4",
        "t 1 (1,1) -> (5,1) 4",
        "s 2 (5,1) -> (8,1),(5,3)",
        "t 3 (5,3) -> (5,10) 7",
        "t 4 (8,1) -> (10,1) 2",
        "Error",
        "OK",
        "t 1 (1,1) -> (5,1) 4",
        "s 2 (5,1) -> (8,1),(5,3) 3",
        "t 3 (5,3) -> (5,10) 7",
        "t 4 (8,1) -> (10,1) 2",
        "No engine exists",
        "No coach exists",
        "103-118",
        "W1",
        "No train exists",
        "electrical engine 103-118 added to train 1",
        "passenger coach W1 added to train 1",
        "1 103-118 W1",
        "1 e 103 118 1",
        "1 1 p 1",
        "OK",
        "Train 1 at (5,1)",
        "Train 1 at (7,1)",
        "OK",
        "OK",
        "Error",
        "OK",
        "Error",
        "No train exists",
        "1 none p 1",
        "OK",
        "No coach exists",
        "Error",
        "OK",
    ]
    .map(String::from)
    .to_vec();
    expect_eq(ausgabe, erwartet)?;
    Ok(())
}

#[test]
fn zusammenstoß() -> Result<(), Expectation> {
    init_test_logging();

    let ausgabe = sitzung(&[
        "add track (0,0) -> (3,0)",
        "add track (3,0) -> (6,0)",
        "add track (6,0) -> (10,0)",
        "create engine diesel E 1 1",
        "create engine diesel E 2 1",
        "create engine steam E 3 1",
        "add train 1 E-1",
        "add train 2 E-2",
        "add train 3 E-3",
        "put train 1 at (1,0) in direction 1,0",
        "put train 2 at (2,0) in direction 1,0",
        "put train 2 at (5,0) in direction -1,0",
        "put train 3 at (8,0) in direction 1,0",
        "step 1",
        "step 1",
        "step 1",
    ]);
    let erwartet = [
        "1",
        "2",
        "3",
        "E-1",
        "E-2",
        "E-3",
        "diesel engine E-1 added to train 1",
        "diesel engine E-2 added to train 2",
        "steam engine E-3 added to train 3",
        "OK",
        "Error",
        "OK",
        "OK",
        "Train 1 at (2,0)",
        "Train 2 at (4,0)",
        "Train 3 at (9,0)",
        "Crash of train 1,2",
        "Train 3 at (10,0)",
        "Crash of train 3",
    ]
    .map(String::from)
    .to_vec();
    expect_eq(ausgabe, erwartet)?;
    Ok(())
}

#[test]
fn fehler() -> Result<(), Expectation> {
    init_test_logging();

    let mut simulation = Simulation::neu(Flotte::neu());
    let _ = zeile_ausführen(&mut simulation, "add track (0,0) -> (5,0)");
    let _ = zeile_ausführen(&mut simulation, "add switch (5,0) -> (9,0),(5,4)");
    let _ = zeile_ausführen(&mut simulation, "add track (9,0) -> (12,0)");
    let _ = zeile_ausführen(&mut simulation, "create coach freight 2");
    let weiche = Id::aus_repräsentation(2).expect("2 ist positiv.");
    let zug = Id::aus_repräsentation(1).expect("1 ist positiv.");

    expect_eq(
        zeile_ausführen(&mut simulation, "add track (0,0) -> (0,0)"),
        Err(Fehler::Hinzufügen(HinzufügenFehler::Entartet(Punkt::neu(0, 0)))),
    )?;
    expect_eq(
        zeile_ausführen(&mut simulation, "delete track 2"),
        Err(Fehler::Entfernen(EntfernenFehler::Zerteilt(weiche))),
    )?;
    expect_eq(
        zeile_ausführen(&mut simulation, "step 1"),
        Err(Fehler::Zustand(ZustandFehler::WeichenNichtGestellt)),
    )?;
    expect_eq(
        zeile_ausführen(&mut simulation, "delete train 1"),
        Err(Fehler::Zustand(ZustandFehler::ZugNichtGefunden(zug))),
    )?;
    expect_eq(
        zeile_ausführen(&mut simulation, "create coach freight 0"),
        Err(Fehler::Fahrzeug(FahrzeugFehler::LängeNichtPositiv)),
    )?;
    expect_eq(
        zeile_ausführen(&mut simulation, "create coach tanker 1"),
        Err(Fehler::Parse(ParseFehler::FahrzeugArt(UngültigeFahrzeugArt("tanker".to_owned())))),
    )?;
    expect_eq(
        zeile_ausführen(&mut simulation, "add train 1 W9"),
        Err(Fehler::Ankuppeln(AnkuppelnFehler::FahrzeugNichtGefunden(FahrzeugName::Wagen(9)))),
    )?;
    expect_eq(
        zeile_ausführen(&mut simulation, "delete rolling stock W2"),
        Err(Fehler::Fahrzeug(FahrzeugFehler::NichtGefunden(FahrzeugName::Wagen(2)))),
    )?;
    expect_eq(zeile_ausführen(&mut simulation, "exit"), Ok(Ausgabe::Beenden))?;
    Ok(())
}
