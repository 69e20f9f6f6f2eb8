//! Tests für [`FahrzeugName`].

use zugsimulation_test_util::{expect_eq, expect_true, init_test_logging, Expectation};

use crate::fahrzeug::{FahrzeugArt, FahrzeugName, LokArt, UngültigeFahrzeugArt, WagenArt};

#[test]
fn parse_und_anzeige() -> Result<(), Expectation> {
    init_test_logging();

    let lok: Result<FahrzeugName, _> = "103-118".parse();
    expect_eq(
        lok.clone(),
        Ok(FahrzeugName::Lok { serie: String::from("103"), name: String::from("118") }),
    )?;
    expect_eq(lok.map(|name| name.to_string()), Ok(String::from("103-118")))?;
    expect_eq("W7".parse(), Ok(FahrzeugName::Wagen(7)))?;
    expect_eq(FahrzeugName::Wagen(12).to_string(), String::from("W12"))?;
    Ok(())
}

#[test]
fn ungültig() -> Result<(), Expectation> {
    init_test_logging();

    for text in ["W0", "W", "Wx", "103", "-118", "103-", "W1-2", "1 0-3", "a-b-c"] {
        expect_true(text.parse::<FahrzeugName>().is_err())?;
    }
    Ok(())
}

#[test]
fn arten() -> Result<(), Expectation> {
    init_test_logging();

    expect_eq("steam".parse(), Ok(LokArt::Dampf))?;
    expect_eq("freight".parse(), Ok(WagenArt::Güter))?;
    expect_eq("passenger".parse::<LokArt>(), Err(UngültigeFahrzeugArt(String::from("passenger"))))?;
    expect_eq(
        FahrzeugArt::Lok(LokArt::Elektrisch).to_string(),
        String::from("electrical engine"),
    )?;
    expect_eq(FahrzeugArt::Wagen(WagenArt::Spezial).to_string(), String::from("special coach"))?;
    expect_eq(FahrzeugArt::Lok(LokArt::Diesel).kürzel(), 'd')?;
    expect_eq(FahrzeugArt::Wagen(WagenArt::Güter).kürzel(), 'f')?;
    Ok(())
}
