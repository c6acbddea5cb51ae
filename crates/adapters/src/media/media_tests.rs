// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    png = { "cat.png", Some("image/png") },
    jpg = { "cat.jpg", Some("image/jpeg") },
    jpeg_upper = { "CAT.JPEG", Some("image/jpeg") },
    webp = { "cat.webp", Some("image/webp") },
    text = { "notes.txt", None },
    no_extension = { "README", None },
)]
fn content_type_from_extension(name: &str, expected: Option<&str>) {
    assert_eq!(content_type_for(Path::new(name)), expected);
}

#[test]
fn non_image_types_are_rejected() {
    assert!(matches!(
        check_upload(b"data", "application/pdf"),
        Err(MediaError::UnsupportedType(t)) if t == "application/pdf"
    ));
}

#[test]
fn empty_upload_is_rejected() {
    assert!(matches!(check_upload(b"", "image/png"), Err(MediaError::Empty)));
}

#[test]
fn content_type_match_ignores_case() {
    assert_eq!(check_upload(b"x", "IMAGE/GIF").unwrap(), "gif");
}
