/// Replaces `filename="<path>"` placeholders with the referenced file's contents
///
/// Matching works on raw bytes so message content around the placeholders is
/// carried over untouched, whatever its encoding.
use crate::constants::FILE_REFERENCE_PATTERN;
use crate::error::SesMailError;
use crate::models::RawMessage;
use regex::bytes::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static FILE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(FILE_REFERENCE_PATTERN).expect("file reference pattern is valid")
});

/// Expands every placeholder in `message`
///
/// Relative paths are joined onto `base_dir` when given, otherwise they are
/// resolved against the current directory.
pub async fn expand_file_references(
    message: &RawMessage,
    base_dir: Option<&Path>,
) -> Result<RawMessage, SesMailError> {
    let input = message.as_bytes();
    let references: Vec<(usize, usize, PathBuf)> = FILE_REFERENCE
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let reference = caps.get(1)?;
            Some((
                whole.start(),
                whole.end(),
                reference_path(reference.as_bytes(), base_dir),
            ))
        })
        .collect();

    let mut output = Vec::with_capacity(input.len());
    let mut last = 0;
    for (start, end, path) in &references {
        let contents = tokio::fs::read(path)
            .await
            .map_err(|e| SesMailError::file(path, e))?;

        output.extend_from_slice(&input[last..*start]);
        output.extend_from_slice(&contents);
        last = *end;
    }
    output.extend_from_slice(&input[last..]);

    tracing::debug!(
        references = references.len(),
        raw_size = output.len(),
        "Inlined file references"
    );
    Ok(RawMessage::from_bytes(output))
}

fn reference_path(reference: &[u8], base_dir: Option<&Path>) -> PathBuf {
    let path = PathBuf::from(String::from_utf8_lossy(reference).into_owned());
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path,
    }
}
