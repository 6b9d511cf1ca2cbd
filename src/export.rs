// 💬 Message export parser - pipeline B
//
// The input CSV comes from a query against the messaging schema, e.g.:
//
//   select M.fecha, U.fullname, M.mensaje
//   from CCC_MENSAJEGLOBAL M left join CIS_USER U on M.remitente = U.id
//   where fecha like '2020%' order by fecha
//
// `mensaje` is stored base64-encoded; each row becomes one event entry.

use crate::dates;
use crate::entry::EventEntry;
use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One row of the database export. Columns beyond these three are ignored.
#[derive(Debug, Deserialize)]
struct ExportRow {
    fecha: String,
    fullname: String,
    mensaje: String,
}

/// Parse the whole export into event entries.
///
/// A structural CSV error or an undecodable `mensaje` aborts the run (fatal,
/// not per-row); whitespace inside `mensaje` is tolerated and unparseable
/// dates fall back to the sentinel instead.
pub fn parse_export(path: &Path) -> Result<Vec<EventEntry>> {
    let file =
        File::open(path).with_context(|| format!("No se pudo abrir {}", path.display()))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let mut entries = Vec::new();
    for (idx, row) in reader.deserialize::<ExportRow>().enumerate() {
        // +2: filas con índice 1 más la cabecera
        let row = row
            .with_context(|| format!("Error de CSV en la fila {} de {}", idx + 2, path.display()))?;
        let entry = row_to_entry(&row)
            .with_context(|| format!("Fila {} de {}", idx + 2, path.display()))?;
        entries.push(entry);
    }
    Ok(entries)
}

fn row_to_entry(row: &ExportRow) -> Result<EventEntry> {
    // Los exports antiguos traen el mensaje partido en varias líneas; el
    // espacio en blanco no forma parte del contenido codificado.
    let encoded: String = row
        .mensaje
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = general_purpose::STANDARD
        .decode(encoded)
        .context("El campo mensaje no es base64 válido")?;
    let text = String::from_utf8_lossy(&bytes).trim().to_string();

    Ok(EventEntry::new(
        dates::from_export(&row.fecha),
        row.fullname.clone(),
        text,
    ))
}

// ============================================================================
// TESTS
// ============================================================================
