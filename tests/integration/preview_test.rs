//! Integration tests for the preview dialog.

mod helpers;

use std::sync::Arc;

use cloudbox_core::config::preview::PreviewConfig;
use cloudbox_core::types::FileId;
use cloudbox_entity::file::FileCategory;
use cloudbox_view::preview::{
    ContentRequest, MediaPreviewController, PreviewBody, PreviewDescriptor, PreviewMode,
    PreviewPayload, PreviewPhase, TextFlavor, UnsupportedReason,
};
use cloudbox_view::viewport::Point;

fn descriptor_for(id: &str) -> PreviewDescriptor {
    let files = helpers::files();
    let file = files
        .iter()
        .find(|f| f.id.as_str() == id)
        .expect("fixture id exists");
    PreviewDescriptor::from_file(file)
}

#[test]
fn test_dispatch_is_pure_on_category() {
    for (category, expected) in [
        ("image", PreviewMode::Image),
        ("video", PreviewMode::Video),
        ("audio", PreviewMode::Audio),
        ("code", PreviewMode::Text(TextFlavor::Code)),
        ("spreadsheet", PreviewMode::Spreadsheet),
        ("presentation", PreviewMode::Unsupported),
        ("archive", PreviewMode::Unsupported),
        ("something-new", PreviewMode::Unsupported),
    ] {
        assert_eq!(PreviewMode::dispatch(category, "file.bin"), expected);
        assert_eq!(PreviewMode::dispatch(category, "x.zip"), expected);
    }
}

#[test]
fn test_open_depends_only_on_declared_category() {
    let mut preview = MediaPreviewController::new(&PreviewConfig::default());
    for (category, names) in [
        ("text", ["server.log", "notes.txt"]),
        ("image", ["photo.zip", "cat.png"]),
        ("spreadsheet", ["export", "budget.csv"]),
        ("archive", ["backup.zip", "readme.txt"]),
    ] {
        let outcomes: Vec<_> = names
            .iter()
            .map(|name| {
                let request = preview.open(PreviewDescriptor::new("1", *name, category));
                (preview.mode(), std::mem::discriminant(&request), preview.is_loading())
            })
            .collect();
        assert_eq!(outcomes[0], outcomes[1], "declared category {category}");
    }
}

#[test]
fn test_spreadsheet_preview_lifecycle() {
    let mut preview = MediaPreviewController::new(&PreviewConfig::default());
    let request = preview.open(descriptor_for("5"));
    assert_eq!(request, ContentRequest::TextBody(FileId::from("5")));
    assert_eq!(preview.phase(), &PreviewPhase::Loading);

    let csv = "item,amount,note\nrent,1200,\"monthly, fixed\"\n\nfood,300,\"the \"\"usual\"\"\"\n";
    assert!(preview.content_loaded("5", PreviewPayload::Text(csv.to_string())));

    let PreviewPhase::Ready(PreviewBody::Spreadsheet { table }) = preview.phase() else {
        panic!("expected a table, got {:?}", preview.phase());
    };
    assert_eq!(table.headers, vec!["item", "amount", "note"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][2], "monthly, fixed");
    assert_eq!(table.rows[1][2], "the \"usual\"");
}

#[test]
fn test_image_viewer_resets_between_files() {
    let capture = Arc::new(helpers::RecordingCapture::default());
    let mut preview = MediaPreviewController::with_capture(&PreviewConfig::default(), capture.clone());

    preview.open(descriptor_for("3"));
    preview.content_loaded("3", PreviewPayload::MediaUrl("/api/files/3/preview".into()));
    let viewport = preview.viewport_mut();
    viewport.on_wheel(-1.0, Some(Point::new(20.0, 20.0)));
    viewport.on_click();
    viewport.on_pointer_down(Some(Point::new(5.0, 5.0)));
    assert!(viewport.is_capturing());

    // Switching files mid-drag ends the drag.
    preview.open(PreviewDescriptor::new("9", "other.png", "image"));
    assert!(preview.viewport().state().is_identity());
    assert!(!preview.viewport().is_capturing());
    assert!(capture.balanced());
}

#[test]
fn test_close_releases_capture() {
    let capture = Arc::new(helpers::RecordingCapture::default());
    let mut preview = MediaPreviewController::with_capture(&PreviewConfig::default(), capture.clone());
    preview.open(descriptor_for("3"));
    preview.viewport_mut().on_click();
    preview.viewport_mut().on_pointer_down(Some(Point::ORIGIN));

    preview.close();
    assert_eq!(preview.phase(), &PreviewPhase::Idle);
    assert_eq!(capture.acquired(), 1);
    assert_eq!(capture.released(), 1);
}

#[test]
fn test_video_autoplay_setting() {
    let config = PreviewConfig {
        auto_play_videos: true,
        ..PreviewConfig::default()
    };
    let mut preview = MediaPreviewController::new(&config);
    assert_eq!(
        preview.open(descriptor_for("4")),
        ContentRequest::MediaUrl(FileId::from("4"))
    );
    assert!(preview.video().is_playing);

    preview.video_mut().autoplay_blocked();
    assert!(!preview.video().is_playing);

    preview.open(descriptor_for("4"));
    assert!(preview.video().is_playing);
    assert!(!preview.video().is_muted);
}

#[test]
fn test_disabled_group_is_not_fetched() {
    let mut config = PreviewConfig::default();
    config.enabled_types.images = false;
    let mut preview = MediaPreviewController::new(&config);

    assert_eq!(preview.open(descriptor_for("3")), ContentRequest::None);
    assert_eq!(
        preview.phase(),
        &PreviewPhase::Ready(PreviewBody::Unsupported {
            reason: UnsupportedReason::Disabled {
                category: FileCategory::Image
            }
        })
    );
}

#[test]
fn test_failure_then_reopen() {
    let mut preview = MediaPreviewController::new(&PreviewConfig::default());
    preview.open(PreviewDescriptor::new("7", "README.md", "document"));
    preview.load_failed("7", "connection reset");
    assert!(matches!(preview.phase(), PreviewPhase::Failed { message } if message == "connection reset"));

    assert_eq!(
        preview.open(PreviewDescriptor::new("7", "README.md", "document")),
        ContentRequest::TextBody(FileId::from("7"))
    );
    preview.content_loaded("7", PreviewPayload::Text("# Title".into()));
    assert_eq!(
        preview.phase(),
        &PreviewPhase::Ready(PreviewBody::Text {
            flavor: TextFlavor::Markdown,
            content: "# Title".into()
        })
    );
}
