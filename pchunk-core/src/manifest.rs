use crate::domain::ShareId;
use crate::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub fn part_label(position: usize) -> String {
    format!("part-{}", position + 1)
}

/// `[{"part-1": id1}, {"part-2": id2}, ...]`; labels follow slice order.
pub fn manifest_entries(ids: &[ShareId]) -> Vec<Map<String, Value>> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let mut entry = Map::new();
            entry.insert(part_label(i), Value::String(id.clone()));
            entry
        })
        .collect()
}

/// Manifest JSON, indented with four spaces.
pub fn render_manifest(ids: &[ShareId]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    manifest_entries(ids).serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the manifest, replacing any previous file.
pub fn write_manifest(ids: &[ShareId], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render_manifest(ids)?)?;
    Ok(())
}
