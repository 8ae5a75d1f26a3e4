//! File processor tests

use base64::{engine::general_purpose::STANDARD, Engine as _};
use drone_openai_plugin::services::file::{classify, mime_type, FileKind};
use drone_openai_plugin::{AppError, ContentPart, FileProcessor, MessageContent, Role};
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, data: &[u8]) -> String {
    let path = dir.path().join(name);
    fs::write(&path, data).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_text_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "test.txt", b"This is test content");
    let processor = FileProcessor::default();

    let msg = processor.process_file_content("Analyze this file", &path).unwrap();

    assert_eq!(msg.role, Role::User);
    assert_eq!(
        msg.content,
        MessageContent::Text("Analyze this file\n\nFile content:\nThis is test content".to_string())
    );
}

#[test]
fn test_large_text_file_is_not_truncated() {
    let dir = TempDir::new().unwrap();
    let body = "line of text\n".repeat(100_000);
    let path = write_file(&dir, "big.log", body.as_bytes());

    let msg = FileProcessor::default().process_file_content("Summarize", &path).unwrap();

    let expected = format!("Summarize\n\nFile content:\n{}", body);
    assert_eq!(msg.content.as_text(), Some(expected.as_str()));
}

#[test]
fn test_file_without_extension_is_text() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "Makefile", b"all:\n\tcargo build\n");

    let msg = FileProcessor::default().process_file_content("Review", &path).unwrap();

    assert_eq!(
        msg.content.as_text(),
        Some("Review\n\nFile content:\nall:\n\tcargo build\n")
    );
}

#[test]
fn test_image_files() {
    let cases = [
        ("test.png", "image/png"),
        ("test.jpg", "image/jpeg"),
        ("test.jpeg", "image/jpeg"),
        ("test.gif", "image/gif"),
        ("test.webp", "image/webp"),
        ("TEST.PNG", "image/png"),
        ("Photo.JPeG", "image/jpeg"),
    ];
    let data: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];

    for (filename, mime) in cases {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, filename, data);

        let msg = FileProcessor::default()
            .process_file_content("Describe this image", &path)
            .unwrap();

        assert_eq!(msg.role, Role::User);
        let parts = msg.content.parts().expect("image should produce multimodal content");
        assert_eq!(parts.len(), 2, "{}", filename);
        assert_eq!(parts[0], ContentPart::Text("Describe this image".to_string()));
        assert_eq!(
            parts[1],
            ContentPart::ImageUrl(format!("data:{};base64,{}", mime, STANDARD.encode(data))),
            "{}",
            filename
        );
    }
}

#[test]
fn test_nonexistent_file() {
    let err = FileProcessor::default()
        .process_file_content("test", "/nonexistent/file.txt")
        .unwrap_err();

    match err {
        AppError::FileRead { path, source } => {
            assert_eq!(path, "/nonexistent/file.txt");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected file error, got {:?}", other),
    }
}

#[test]
fn test_directory_is_a_file_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().to_string_lossy().into_owned();

    let err = FileProcessor::default().process_file_content("test", &path).unwrap_err();
    assert!(matches!(err, AppError::FileRead { .. }));
}

#[test]
fn test_invalid_utf8_text_is_decoded_lossily() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "data.bin", &[b'o', b'k', 0xff]);

    let msg = FileProcessor::default().process_file_content("p", &path).unwrap();
    assert_eq!(msg.content.as_text(), Some("p\n\nFile content:\nok\u{fffd}"));
}

#[test]
fn test_classification() {
    for name in ["a.jpg", "a.JPEG", "dir.v2/a.Png", "a.gif", "a.webp"] {
        assert_eq!(classify(name), FileKind::Image, "{}", name);
    }
    for name in ["a.txt", "a.bmp", "a.svg", "noext", "archive.png.gz", "png"] {
        assert_eq!(classify(name), FileKind::Text, "{}", name);
    }
    assert_eq!(mime_type("a.tiff"), "application/octet-stream");
}
