//! JSON file helpers
use serde::{ de::DeserializeOwned, Serialize };
use std::fs;
use std::path::Path;

/// Read a JSON document into `T`; errors carry the offending path
pub fn load_json_from_file<T: DeserializeOwned>(file_path: &Path) -> Result<T, String> {
    let contents = fs::read_to_string(file_path).map_err(|e|
        format!("Cannot read '{}': {}", file_path.display(), e)
    )?;
    serde_json::from_str(&contents).map_err(|e|
        format!("Invalid JSON in '{}': {}", file_path.display(), e)
    )
}

/// Write `data` as pretty JSON, creating parent directories as needed
pub fn save_json_to_file<T: Serialize>(data: &T, file_path: &Path) -> Result<(), String> {
    let contents = serde_json::to_string_pretty(data).map_err(|e|
        format!("Cannot serialize '{}': {}", file_path.display(), e)
    )?;
    write_text_file(&contents, file_path)
}

/// Write a text document, creating parent directories as needed
pub fn write_text_file(contents: &str, file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e|
            format!("Cannot create directory '{}': {}", parent.display(), e)
        )?;
    }
    fs::write(file_path, contents).map_err(|e|
        format!("Cannot write '{}': {}", file_path.display(), e)
    )
}
