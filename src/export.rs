use chrono::Local;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use zeroize::Zeroizing;

pub const DEFAULT_EXPORT_FILE: &str = "generated_password.txt";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes passwords in the flat export format: an optional `#`-prefixed
/// header line, then one password per line.
pub fn write_export<W: Write>(
    writer: &mut W,
    passwords: &[Zeroizing<String>],
    header: Option<&str>,
) -> io::Result<()> {
    if let Some(header) = header {
        writeln!(writer, "# {header}")?;
    }
    for password in passwords {
        writeln!(writer, "{}", &**password)?;
    }
    writer.flush()
}

/// Exports passwords to `path` with a generation timestamp header.
/// The file is truncated if it already exists.
pub fn export_to_file(path: &Path, passwords: &[Zeroizing<String>]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let header = format!("Generated on {}", Local::now().format(TIMESTAMP_FORMAT));
    write_export(&mut writer, passwords, Some(&header))
}

/// Reads passwords back from the export format, skipping the header and
/// blank lines. Returned in file order.
///
/// Only the first line can be a header, and headers always start with
/// `# ` while pool characters never include a space, so a password that
/// happens to begin with `#` is never mistaken for one.
pub fn read_export<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut passwords = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        if index == 0 && line.starts_with("# ") {
            continue;
        }
        passwords.push(line);
    }
    Ok(passwords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    fn to_zeroizing(v: Vec<&str>) -> Vec<Zeroizing<String>> {
        v.into_iter().map(|s| Zeroizing::new(s.to_string())).collect()
    }

    #[test]
    fn test_write_without_header() {
        let passwords = to_zeroizing(vec!["abc123", "XYZ!@#"]);
        let mut buffer = Vec::new();
        write_export(&mut buffer, &passwords, None).unwrap();
        assert_eq!(buffer, b"abc123\nXYZ!@#\n");
    }

    #[test]
    fn test_write_with_header() {
        let passwords = to_zeroizing(vec!["abc123"]);
        let mut buffer = Vec::new();
        write_export(&mut buffer, &passwords, Some("Generated on 2024-01-01 00:00:00")).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "# Generated on 2024-01-01 00:00:00\nabc123\n");
    }

    #[test]
    fn test_read_skips_header_and_blanks() {
        let input = "# Generated on 2024-01-01 00:00:00\n\nabc123\nXYZ!@#\n";
        let passwords = read_export(Cursor::new(input)).unwrap();
        assert_eq!(passwords, vec!["abc123", "XYZ!@#"]);
    }

    #[test]
    fn test_round_trip_hash_prefixed_password() {
        // '#' is in the symbol pool, so passwords can legitimately start
        // with it; they must survive a round trip.
        let passwords = to_zeroizing(vec!["#aB3!xYz", "##{-}=+!", "plain123"]);

        let mut with_header = Vec::new();
        write_export(&mut with_header, &passwords, Some("Generated on 2024-01-01 00:00:00"))
            .unwrap();
        let restored = read_export(Cursor::new(with_header)).unwrap();
        assert_eq!(restored, vec!["#aB3!xYz", "##{-}=+!", "plain123"]);

        let mut without_header = Vec::new();
        write_export(&mut without_header, &passwords, None).unwrap();
        let restored = read_export(Cursor::new(without_header)).unwrap();
        assert_eq!(restored, vec!["#aB3!xYz", "##{-}=+!", "plain123"]);
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let passwords = to_zeroizing(vec!["first$1", "second$2", "third$3", "fourth$4", "fifth$5"]);
        let mut buffer = Vec::new();
        write_export(&mut buffer, &passwords, Some("header")).unwrap();

        let restored = read_export(Cursor::new(buffer)).unwrap();
        assert_eq!(restored.len(), passwords.len());
        for (restored, original) in restored.iter().zip(passwords.iter()) {
            assert_eq!(restored, &**original);
        }
    }

    #[test]
    fn test_export_to_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        let passwords = to_zeroizing(vec!["n3$tEd!pass", "0ther#One"]);

        export_to_file(&path, &passwords).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Generated on "));

        let restored = read_export(Cursor::new(content)).unwrap();
        assert_eq!(restored, vec!["n3$tEd!pass", "0ther#One"]);
    }

    #[test]
    fn test_export_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let passwords = to_zeroizing(vec!["abc123"]);

        // The directory itself is not a writable file target.
        let result = export_to_file(dir.path(), &passwords);
        assert!(result.is_err());
    }
}
