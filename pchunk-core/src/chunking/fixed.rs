use crate::domain::Part;
use crate::error::{PchunkError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Split `text` into consecutive slices of `part_size` bytes; the last may be shorter.
///
/// Base64 output is ASCII, so any byte offset is a char boundary. For other
/// input the cut is moved back to the nearest boundary so no slice is invalid.
pub fn split_text(text: &str, part_size: usize) -> Result<Vec<&str>> {
    if part_size == 0 {
        return Err(PchunkError::Config("part_size must be greater than zero".into()));
    }
    let mut out = Vec::with_capacity(text.len().div_ceil(part_size));
    let mut rest = text;
    while !rest.is_empty() {
        let mut cut = part_size.min(rest.len());
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        if cut == 0 {
            // a single char wider than part_size
            cut = rest.chars().next().map(char::len_utf8).unwrap_or(rest.len());
        }
        let (head, tail) = rest.split_at(cut);
        out.push(head);
        rest = tail;
    }
    Ok(out)
}

pub fn part_file_name(index: usize) -> String {
    format!("part-{index}.txt")
}

/// Split the encoded file into `part-N.txt` files next to it, then delete it.
pub fn split_file(encoded: &Path, part_size: usize) -> Result<Vec<Part>> {
    let text = fs::read_to_string(encoded)?;
    let slices = split_text(&text, part_size)?;
    let dir = encoded
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut parts = Vec::new();
    for (i, slice) in slices.into_iter().enumerate() {
        let index = i + 1;
        let path = dir.join(part_file_name(index));
        fs::write(&path, slice.as_bytes())?;
        parts.push(Part {
            index,
            path,
            len: slice.len(),
        });
    }

    fs::remove_file(encoded)?;
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_file;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    #[test]
    fn part_count_and_sizes() {
        for (len, size) in [(10usize, 3usize), (9, 3), (1, 5), (5, 5), (16, 5)] {
            let text = "A".repeat(len);
            let parts = split_text(&text, size).unwrap();
            let n = len.div_ceil(size);
            assert_eq!(parts.len(), n, "len={len} size={size}");
            for p in &parts[..n - 1] {
                assert_eq!(p.len(), size);
            }
            assert_eq!(parts[n - 1].len(), len - size * (n - 1));
        }
    }

    #[test]
    fn evenly_divisible_last_part_is_full() {
        let parts = split_text("abcdef", 3).unwrap();
        assert_eq!(parts, vec!["abc", "def"]);
    }

    #[test]
    fn empty_text_has_no_parts() {
        assert!(split_text("", 4).unwrap().is_empty());
    }

    #[test]
    fn zero_part_size_is_a_config_error() {
        assert!(matches!(split_text("abc", 0), Err(PchunkError::Config(_))));
        assert!(matches!(split_text("", 0), Err(PchunkError::Config(_))));
    }

    #[test]
    fn never_splits_inside_a_char() {
        let parts = split_text("aé€b", 2).unwrap();
        assert_eq!(parts.concat(), "aé€b");
        assert!(parts.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn twelve_mib_source_gives_four_five_mib_parts() {
        let raw = vec![7u8; 12 * 1024 * 1024];
        let encoded = STANDARD.encode(&raw);
        assert_eq!(encoded.len(), 16 * 1024 * 1024);

        let parts = split_text(&encoded, 5 * 1024 * 1024).unwrap();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[3].len(), 1024 * 1024);
    }

    #[test]
    fn split_file_writes_numbered_parts_and_removes_source() {
        let dir = tempfile::tempdir().unwrap();
        let encoded = dir.path().join("blob64.txt");
        fs::write(&encoded, "0123456789").unwrap();

        let parts = split_file(&encoded, 4).unwrap();

        assert!(!encoded.exists());
        let names: Vec<_> = parts
            .iter()
            .map(|p| p.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["part-1.txt", "part-2.txt", "part-3.txt"]);
        assert_eq!(parts.iter().map(|p| p.index).collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(parts.iter().map(|p| p.len).collect::<Vec<_>>(), [4, 4, 2]);
        assert_eq!(fs::read_to_string(&parts[2].path).unwrap(), "89");
    }

    #[test]
    fn split_file_on_empty_text_removes_source_and_returns_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let encoded = dir.path().join("blob64.txt");
        fs::write(&encoded, "").unwrap();

        assert!(split_file(&encoded, 8).unwrap().is_empty());
        assert!(!encoded.exists());
    }

    #[test]
    fn split_file_rejects_zero_part_size() {
        let dir = tempfile::tempdir().unwrap();
        let encoded = dir.path().join("blob64.txt");
        fs::write(&encoded, "abc").unwrap();
        assert!(matches!(split_file(&encoded, 0), Err(PchunkError::Config(_))));
        assert!(encoded.exists());
    }

    #[test]
    fn parts_reassemble_to_original_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.bin");
        let data: Vec<u8> = (0..10_000u32).map(|i| (i * 31 % 251) as u8).collect();
        fs::write(&src, &data).unwrap();
        let encoded = dir.path().join("stage/src64.txt");

        encode_file(&src, &encoded).unwrap();
        let parts = split_file(&encoded, 777).unwrap();

        let mut joined = String::new();
        for p in &parts {
            joined.push_str(&fs::read_to_string(&p.path).unwrap());
        }
        assert_eq!(STANDARD.decode(joined).unwrap(), data);
    }
}
