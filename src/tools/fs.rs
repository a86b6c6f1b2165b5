//! File read/write tools.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Tool;

/// Largest file `read_file` will return, in bytes.
const MAX_READ_BYTES: u64 = 256 * 1024;

/// Resolve a tool path argument against the workspace directory.
fn resolve_path(path: &str, workspace: &Path) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace.join(path)
    }
}

/// Read a file's contents.
pub struct ReadFile;

#[async_trait]
impl Tool for ReadFile {
    fn name(&self) -> &str {
        "read_file"
    }

    fn description(&self) -> &str {
        "Read and return the content of a file. Relative paths are resolved against the workspace directory."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "The path to the file to read"
                }
            },
            "required": ["file_path"]
        })
    }

    async fn execute(&self, args: Value, workspace: &Path) -> anyhow::Result<String> {
        let file_path = args["file_path"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'file_path' argument"))?;
        let path = resolve_path(file_path, workspace);

        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))?;

        if metadata.is_dir() {
            return Err(anyhow::anyhow!("{} is a directory", path.display()));
        }
        if metadata.len() > MAX_READ_BYTES {
            return Err(anyhow::anyhow!(
                "{} is too large ({} bytes, limit is {})",
                path.display(),
                metadata.len(),
                MAX_READ_BYTES
            ));
        }

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))
    }
}

/// Write content to a file.
pub struct WriteFile;

#[async_trait]
impl Tool for WriteFile {
    fn name(&self) -> &str {
        "write_file"
    }

    fn description(&self) -> &str {
        "Write content to a file, creating it and any missing parent directories. Overwrites existing content."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "The path to the file to write"
                },
                "content": {
                    "type": "string",
                    "description": "The content to write"
                }
            },
            "required": ["file_path", "content"]
        })
    }

    async fn execute(&self, args: Value, workspace: &Path) -> anyhow::Result<String> {
        let file_path = args["file_path"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'file_path' argument"))?;
        let content = args["content"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'content' argument"))?;
        let path = resolve_path(file_path, workspace);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("Cannot create {}: {}", parent.display(), e))?;
        }

        tokio::fs::write(&path, content)
            .await
            .map_err(|e| anyhow::anyhow!("Cannot write {}: {}", path.display(), e))?;

        Ok(format!("Wrote {} bytes to {}", content.len(), path.display()))
    }
}
