//! Image upload with sanitized, collision-avoiding object names.
//!
//! Uploaded filenames are folded to `[A-Za-z0-9._-]` (common Latin
//! diacritics stripped first, anything else replaced with `_`) and prefixed
//! with a millisecond timestamp so two uploads of `taza.jpg` never collide.
//! Uploads are overwrite-allowed; the returned value is the blob's public
//! URL.

use chrono::Utc;

use crate::{ObjectStore, StoreError};

/// Default bucket for product images.
pub const IMAGE_BUCKET: &str = "images";

/// Upload an image and resolve its public URL.
///
/// # Errors
///
/// Returns the underlying [`StoreError`] when the upload fails; the caller
/// surfaces its message inline near the upload control.
pub async fn upload_image<S: ObjectStore>(
    store: &S,
    bucket: &str,
    original_name: &str,
    bytes: Vec<u8>,
    content_type: &str,
) -> Result<String, StoreError> {
    let name = unique_object_name(original_name);
    store.upload(bucket, &name, bytes, content_type, true).await?;
    Ok(store.public_url(bucket, &name))
}

/// Timestamp-prefixed sanitized object name.
#[must_use]
pub fn unique_object_name(original_name: &str) -> String {
    object_name(Utc::now().timestamp_millis(), original_name)
}

fn object_name(millis: i64, original_name: &str) -> String {
    format!("{millis}_{}", sanitize_file_name(original_name))
}

/// Reduce a filename to `[A-Za-z0-9._-]`.
///
/// Accented Latin letters lose their diacritic; every other disallowed
/// character becomes `_`.
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(fold_diacritic)
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Map common Latin diacritics to their base letter.
const fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ñ' => 'N',
        'Ç' => 'C',
        _ => c,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::MemoryStore;

    use super::*;

    #[test]
    fn test_sanitize_strips_diacritics() {
        assert_eq!(sanitize_file_name("café con ñandú.jpg"), "cafe_con_nandu.jpg");
    }

    #[test]
    fn test_sanitize_replaces_disallowed_chars() {
        assert_eq!(sanitize_file_name("foto (1) ¡nueva!.png"), "foto__1___nueva_.png");
        assert_eq!(sanitize_file_name("ya-limpio_01.webp"), "ya-limpio_01.webp");
    }

    #[test]
    fn test_object_name_has_timestamp_prefix() {
        assert_eq!(object_name(1_700_000_000_000, "táza.jpg"), "1700000000000_taza.jpg");
    }

    #[test]
    fn test_unique_object_name_keeps_sanitized_suffix() {
        let name = unique_object_name("táza.jpg");
        let (prefix, suffix) = name.split_once('_').unwrap();
        assert!(prefix.parse::<i64>().is_ok());
        assert_eq!(suffix, "taza.jpg");
    }

    #[tokio::test]
    async fn test_upload_image_returns_public_url() {
        let store = MemoryStore::new();
        let url = upload_image(&store, IMAGE_BUCKET, "mi táza.jpg", vec![1, 2, 3], "image/jpeg")
            .await
            .unwrap();
        assert!(url.starts_with("memory://images/"));
        assert!(url.ends_with("_mi_taza.jpg"));
        assert_eq!(store.len(), 1);
    }
}
