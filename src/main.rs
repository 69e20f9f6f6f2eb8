//! Simulation von Zügen auf einem Gleisnetz, gesteuert über Text-Kommandos.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
};

use flexi_logger::{Duplicate, FileSpec, FlexiLoggerError, LogSpecBuilder, Logger, LoggerHandle};
use log::{warn, LevelFilter};

use zugsimulation_argumente::Argumente;
use zugsimulation_flotte::Flotte;
use zugsimulation_kommando::{zeile_ausführen, Ausgabe};
use zugsimulation_simulation::Simulation;

/// Bei der Ausführung potentiell auftretende Fehler.
#[derive(Debug, zugsimulation_macros::From)]
enum Fehler {
    /// Ein Fehler beim starten des Loggers.
    FlexiLogger(FlexiLoggerError),
    /// Ein Fehler beim Lesen der Eingabe oder Schreiben der Ausgabe.
    Io(io::Error),
}

/// Starte den Logger, optional zusätzlich mit einer Log-Datei.
fn start_logger(verbose: bool, log_datei: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let mut log_spec_builder = LogSpecBuilder::new();
    let _ = log_spec_builder.default(LevelFilter::Error).module("zugsimulation", log_level);
    let log_spec = log_spec_builder.finalize();
    let logger_base = Logger::with(log_spec);
    let logger = if log_datei {
        logger_base
            .log_to_file(FileSpec::default().directory("log"))
            .duplicate_to_stderr(Duplicate::All)
    } else {
        logger_base.log_to_stderr()
    };
    logger.start()
}

/// Lese Kommandos zeilenweise, bis die Eingabe endet oder `exit` gelesen wird.
fn eingabe_schleife(eingabe: impl BufRead, ausgabe: &mut impl Write) -> io::Result<()> {
    let mut simulation = Simulation::neu(Flotte::neu());
    for zeile in eingabe.lines() {
        let zeile = zeile?;
        match zeile_ausführen(&mut simulation, &zeile) {
            Ok(Ausgabe::Zeilen(zeilen)) => {
                for ausgabe_zeile in zeilen {
                    writeln!(ausgabe, "{ausgabe_zeile}")?;
                }
            },
            Ok(Ausgabe::Beenden) => break,
            Err(fehler) => {
                warn!("Kommando '{zeile}' fehlgeschlagen: {fehler}");
                writeln!(ausgabe, "Error, {fehler}")?;
            },
        }
    }
    ausgabe.flush()
}

fn main() -> Result<(), Fehler> {
    let Argumente { pfad, verbose, log_datei } = Argumente::parse_aus_env_einzelnes_als_pfad();
    let logger_handle = start_logger(verbose, log_datei)?;

    let stdout = io::stdout();
    let mut ausgabe = stdout.lock();
    match pfad {
        Some(pfad) => eingabe_schleife(BufReader::new(File::open(pfad)?), &mut ausgabe)?,
        None => eingabe_schleife(io::stdin().lock(), &mut ausgabe)?,
    }

    // explizit drop aufrufen, damit logger_handle auf jeden Fall lang genug in scope bleibt.
    drop(logger_handle);
    Ok(())
}
