//! Kommandozeilen-Argumente.

// Zu viele/große dependencies, um das wirklich zu vermeiden.
#![allow(clippy::multiple_crate_versions)]
// TODO durch derive-Macro für Parse ausgelöst.
#![allow(clippy::shadow_unrelated)]

use std::{env, ffi::OsString, num::NonZeroI32};

use kommandozeilen_argumente::Parse;

#[derive(Debug, Clone, Parse)]
/// Simulation von Zügen auf einem Gleisnetz mit ganzzahligen Koordinaten.
#[kommandozeilen_argumente(sprache: deutsch, version, hilfe(lang: [hilfe, help], kurz: h))]
pub struct Argumente {
    /// Lese die Kommandos aus der angegebenen Datei statt von der Standard-Eingabe.
    #[kommandozeilen_argumente(kurz, meta_var: DATEI)]
    pub pfad: Option<String>,

    /// Zeige zusätzliche Informationen in der Konsole an.
    pub verbose: bool,

    /// Speichere Log-Nachrichten zusätzlich in einer Datei.
    #[kommandozeilen_argumente(kurz: l, invertiere_präfix: keine)]
    pub log_datei: bool,
}

/// Ergänze `--pfad`, wenn nur ein einzelnes Argument übergeben wurde, das nicht mit '-' beginnt.
fn einzelnes_als_pfad(mut args: Vec<OsString>) -> Vec<OsString> {
    if args.len() == 1
        && !args
            .first()
            .and_then(|os_string| os_string.to_str())
            .is_some_and(|string| string.starts_with('-'))
    {
        args.insert(0, "--pfad".to_owned().into());
    }
    args
}

impl Argumente {
    /// Parse Kommandozeilen-Argumente.
    /// Ein einzelnes Argument (das nicht mit "-" beginnt) wird als Pfad interpretiert.
    ///
    /// ## Panics
    ///
    /// Programmierfehler, wenn [`NonZeroI32::new`] [`None`] für den Exit-Code zurückgibt.
    #[must_use]
    pub fn parse_aus_env_einzelnes_als_pfad() -> Self {
        let args = einzelnes_als_pfad(env::args_os().skip(1).collect());
        Argumente::parse_mit_fehlermeldung(args.into_iter(), NonZeroI32::new(1).expect("1 != 0"))
    }
}

#[cfg(test)]
mod test {
    use std::ffi::OsString;

    use zugsimulation_test_util::{expect_eq, init_test_logging, Expectation};

    use super::einzelnes_als_pfad;

    /// Konvertiere alle Argumente zu [`OsString`].
    fn os_strings(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn einzelnes_argument() -> Result<(), Expectation> {
        init_test_logging();

        expect_eq(
            einzelnes_als_pfad(os_strings(&["befehle.txt"])),
            os_strings(&["--pfad", "befehle.txt"]),
        )?;
        Ok(())
    }

    #[test]
    fn flags_bleiben_unverändert() -> Result<(), Expectation> {
        init_test_logging();

        expect_eq(einzelnes_als_pfad(os_strings(&["--verbose"])), os_strings(&["--verbose"]))?;
        expect_eq(
            einzelnes_als_pfad(os_strings(&["-p", "befehle.txt"])),
            os_strings(&["-p", "befehle.txt"]),
        )?;
        expect_eq(einzelnes_als_pfad(Vec::new()), Vec::new())?;
        Ok(())
    }
}
