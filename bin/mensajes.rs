// mensajes - informe CSV a partir de un export de mensajes en bbdd

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use informes_c3::{input_exists, output_free, parse_export, ReportWriter, VERSION};

/// Genera un archivo CSV a partir de una ejecución en bbdd
///
/// Ejemplo: mensajes --entrada ~/input.csv --salida ~/output.csv
#[derive(Parser, Debug)]
#[command(version = VERSION, about)]
struct Args {
    /// CSV exportado de la base de datos (columnas fecha, fullname, mensaje)
    #[arg(long)]
    entrada: PathBuf,

    /// Ruta del informe CSV a generar (no debe existir)
    #[arg(long)]
    salida: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !input_exists(&args.entrada) {
        process::exit(1);
    }
    if !output_free(&args.salida) {
        process::exit(1);
    }

    let mut report = ReportWriter::create(&args.salida)?;
    for entry in parse_export(&args.entrada)? {
        report.write(&entry)?;
    }
    let generated = report.finish()?;
    println!("Generado archivo {}", generated.display());

    Ok(())
}
