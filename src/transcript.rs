// 📄 Transcript parser - pipeline A
// Line-oriented accumulator driven by three literal markers

use crate::dates;
use crate::entry::EventEntry;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const FECHA: &str = "Fecha: ";
const AUTOR: &str = "Autor: ";
const EVENTO: &str = "Evento: ";

/// Pending state carried across the lines of one file.
///
/// A repeated `Fecha:`/`Autor:` marker silently overwrites the pending value;
/// whatever is left at end of file is dropped without diagnostic.
#[derive(Debug, Default)]
struct Pending {
    date: Option<String>,
    author: Option<String>,
}

/// Regular files directly inside `folder`, sorted by name so the generated
/// report does not depend on filesystem listing order. Subdirectories and
/// other entry kinds are skipped; there is no recursion.
pub fn folder_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder)
        .with_context(|| format!("No se pudo listar el directorio {}", folder.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Error listando {}", folder.display()))?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse one transcript file into event entries.
///
/// Every `Evento:` line produces exactly one entry carrying the most recently
/// seen `Fecha:`/`Autor:` values (empty if none was seen). Any other line is
/// ignored - multi-line event text is not supported.
pub fn parse_transcript(path: &Path) -> Result<Vec<EventEntry>> {
    let file =
        File::open(path).with_context(|| format!("No se pudo abrir {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    let mut pending = Pending::default();
    for line in reader.lines() {
        let line = line.with_context(|| format!("Error leyendo {}", path.display()))?;
        process_line(line.trim(), &mut pending, &mut entries);
    }
    // un archivo que termina a mitad de entrada se descarta en silencio
    Ok(entries)
}

fn process_line(line: &str, pending: &mut Pending, out: &mut Vec<EventEntry>) {
    if let Some(rest) = line.strip_prefix(FECHA) {
        pending.date = Some(dates::from_transcript(rest));
    } else if let Some(rest) = line.strip_prefix(AUTOR) {
        pending.author = Some(rest.to_string());
    } else if let Some(rest) = line.strip_prefix(EVENTO) {
        out.push(EventEntry::new(
            pending.date.take().unwrap_or_default(),
            pending.author.take().unwrap_or_default(),
            rest.to_string(),
        ));
        *pending = Pending::default();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse_lines(text: &str) -> Vec<EventEntry> {
        let mut entries = Vec::new();
        let mut pending = Pending::default();
        for line in text.lines() {
            process_line(line.trim(), &mut pending, &mut entries);
        }
        entries
    }

    #[test]
    fn test_example_transcript_round_trip() {
        let entries =
            parse_lines("Fecha: 1/2/20 10:30\nAutor: Ana\nEvento: Reunión (123456) con equipo");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, "2020-02-01T10:30:00");
        assert_eq!(entries[0].author, "Ana");
        assert_eq!(entries[0].text, "Reunión (123456) con equipo");
        assert_eq!(entries[0].code, Some("123456".to_string()));
    }

    #[test]
    fn test_one_row_per_evento_line() {
        let entries = parse_lines(
            "Fecha: 1/2/20 10:30\nAutor: Ana\nEvento: Primero\n\
             Fecha: 2/2/20 11:00\nAutor: Luis\nEvento: Segundo",
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].author, "Ana");
        assert_eq!(entries[1].author, "Luis");
        assert_eq!(entries[1].date, "2020-02-02T11:00:00");
    }

    #[test]
    fn test_repeated_marker_overwrites() {
        let entries = parse_lines(
            "Fecha: 1/2/20 10:30\nAutor: Ana\nAutor: Luis\nFecha: 3/2/20 09:00\nEvento: Cambio",
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].author, "Luis");
        assert_eq!(entries[0].date, "2020-02-03T09:00:00");
    }

    #[test]
    fn test_missing_markers_yield_empty_fields() {
        let entries = parse_lines("Evento: Sin contexto");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, "");
        assert_eq!(entries[0].author, "");
        assert_eq!(entries[0].text, "Sin contexto");
    }

    #[test]
    fn test_non_marker_lines_ignored() {
        let entries = parse_lines(
            "cabecera del archivo\nFecha: 1/2/20 10:30\ncontinuación suelta\n\
             Autor: Ana\nEvento: Reunión\ncola del archivo",
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "Reunión");
    }

    #[test]
    fn test_unterminated_entry_dropped() {
        let entries = parse_lines("Fecha: 1/2/20 10:30\nAutor: Ana");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_state_cleared_after_emit() {
        let entries = parse_lines("Fecha: 1/2/20 10:30\nAutor: Ana\nEvento: Uno\nEvento: Dos");
        assert_eq!(entries.len(), 2);
        // la segunda entrada no hereda fecha ni autor
        assert_eq!(entries[1].date, "");
        assert_eq!(entries[1].author, "");
    }

    #[test]
    fn test_markers_matched_after_trim() {
        let entries = parse_lines("  Fecha: 1/2/20 10:30  \n\tAutor: Ana\nEvento: Reunión");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, "2020-02-01T10:30:00");
    }

    #[test]
    fn test_parse_transcript_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("acta.txt");
        fs::write(
            &path,
            "Fecha: 1/2/20 10:30\nAutor: Ana\nEvento: Reunión (123456) con equipo\n",
        )
        .unwrap();

        let entries = parse_transcript(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].code, Some("123456".to_string()));
    }

    #[test]
    fn test_folder_files_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("subcarpeta")).unwrap();

        let files = folder_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }
}
