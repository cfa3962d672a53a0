use async_trait::async_trait;
use cv_builder::thumbnail::{PageRenderer, PageSize, ThumbnailConverter, ThumbnailError};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Writes a fake PNG, failing for documents whose name contains "broken".
#[derive(Default)]
struct FakeRenderer {
    rendered: Mutex<Vec<PathBuf>>,
}

#[async_trait]
impl PageRenderer for FakeRenderer {
    async fn render(&self, html_path: &Path, png_path: &Path) -> Result<PageSize, ThumbnailError> {
        self.rendered.lock().unwrap().push(html_path.to_path_buf());

        let name = html_path.file_name().unwrap().to_string_lossy().into_owned();
        if name.contains("broken") {
            return Err(ThumbnailError::Render {
                file: name,
                reason: "page crashed".to_string(),
            });
        }

        tokio::fs::write(png_path, b"\x89PNG\r\n\x1a\n").await.unwrap();
        Ok(PageSize {
            width: 800,
            height: 600,
        })
    }
}

async fn write_html(dir: &Path, name: &str) {
    tokio::fs::write(dir.join(name), "<html><body>x</body></html>")
        .await
        .unwrap();
}

#[tokio::test]
async fn per_file_failure_does_not_stop_the_run() {
    let root = tempfile::tempdir().unwrap();
    let html_dir = root.path().join("html");
    let png_dir = root.path().join("png");
    tokio::fs::create_dir_all(&html_dir).await.unwrap();

    write_html(&html_dir, "a-card.html").await;
    write_html(&html_dir, "b-broken.html").await;
    write_html(&html_dir, "c-card.html").await;
    write_html(&html_dir, "readme.txt").await;

    let converter = ThumbnailConverter::new(html_dir.clone(), png_dir.clone(), FakeRenderer::default());
    let report = converter.convert_all().await.unwrap();

    assert_eq!(report.total(), 3);
    assert_eq!(report.converted.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].source, html_dir.join("b-broken.html"));
    assert!(report.failed[0].error.contains("page crashed"));

    assert!(png_dir.join("a-card.png").exists());
    assert!(png_dir.join("c-card.png").exists());
    assert!(!png_dir.join("b-broken.png").exists());
    assert_eq!(report.converted[1].output, png_dir.join("c-card.png"));
    assert_eq!(report.converted[0].size.width, 800);
}

#[tokio::test]
async fn missing_directories_are_created() {
    let root = tempfile::tempdir().unwrap();
    let converter = ThumbnailConverter::new(
        root.path().join("in"),
        root.path().join("out"),
        FakeRenderer::default(),
    );

    let report = converter.convert_all().await.unwrap();

    assert_eq!(report.total(), 0);
    assert!(root.path().join("in").is_dir());
    assert!(root.path().join("out").is_dir());
}

#[tokio::test]
async fn unusable_input_directory_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    let not_a_dir = root.path().join("html");
    tokio::fs::write(&not_a_dir, "plain file").await.unwrap();

    let renderer = FakeRenderer::default();
    let converter = ThumbnailConverter::new(not_a_dir, root.path().join("png"), renderer);
    let error = converter.convert_all().await.unwrap_err();

    assert!(error.is_fatal());
    assert!(matches!(error, ThumbnailError::DirectoryAccess { .. }));
}
