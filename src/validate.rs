// ✅ Path validation
// Predicates, not assertions: each failure prints a localized message to
// stderr and returns false; the binary exits with status 1 without touching
// the output path.

use std::path::Path;

/// The input folder must exist and be a directory (pipeline A).
/// `which` names the option in the message ("entrada").
pub fn folder_exists(path: &Path, which: &str) -> bool {
    if !path.exists() {
        eprintln!("No existe el directorio de {} {}", which, path.display());
        return false;
    }
    if !path.is_dir() {
        eprintln!("La ruta de {} {} no es un directorio", which, path.display());
        return false;
    }
    true
}

/// The output file must not exist yet; the report is never overwritten.
pub fn output_free(path: &Path) -> bool {
    if path.exists() {
        eprintln!("El archivo de salida {} ya existe", path.display());
        return false;
    }
    true
}

/// The input CSV must exist (pipeline B). Its type is not checked.
pub fn input_exists(path: &Path) -> bool {
    if !path.exists() {
        eprintln!("El archivo de entrada {} no existe", path.display());
        return false;
    }
    true
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_folder_exists_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(folder_exists(dir.path(), "entrada"));
    }

    #[test]
    fn test_folder_exists_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!folder_exists(&dir.path().join("no_such"), "entrada"));
    }

    #[test]
    fn test_folder_exists_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("archivo.txt");
        fs::write(&file, "hola").unwrap();
        assert!(!folder_exists(&file, "entrada"));
    }

    #[test]
    fn test_output_free_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("informe.csv");
        fs::write(&out, "contenido previo").unwrap();

        assert!(!output_free(&out));
        // el archivo original queda intacto
        assert_eq!(fs::read_to_string(&out).unwrap(), "contenido previo");
    }

    #[test]
    fn test_output_free_accepts_fresh_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(output_free(&dir.path().join("informe.csv")));
    }

    #[test]
    fn test_input_exists() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("export.csv");
        assert!(!input_exists(&input));
        fs::write(&input, "fecha,fullname,mensaje\n").unwrap();
        assert!(input_exists(&input));
    }
}
