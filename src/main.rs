// c3 - informe CSV a partir de una carpeta de transcripciones

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use informes_c3::{
    folder_exists, folder_files, output_free, parse_transcript, ReportWriter, VERSION,
};

/// Crea un informe CSV a partir de archivos de texto
///
/// Ejemplo: c3 --entrada ~/informes_c3 --salida ~/informe_c3_generado.csv
#[derive(Parser, Debug)]
#[command(version = VERSION, about)]
struct Args {
    /// Carpeta con las transcripciones de entrada
    #[arg(long)]
    entrada: PathBuf,

    /// Ruta del informe CSV a generar (no debe existir)
    #[arg(long)]
    salida: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !folder_exists(&args.entrada, "entrada") {
        process::exit(1);
    }
    if !output_free(&args.salida) {
        process::exit(1);
    }

    let mut report = ReportWriter::create(&args.salida)?;
    for file in folder_files(&args.entrada)? {
        for entry in parse_transcript(&file)? {
            report.write(&entry)?;
        }
    }
    let generated = report.finish()?;
    println!("Generado archivo {}", generated.display());

    Ok(())
}
