// SPDX-License-Identifier: MPL-2.0
//! Photo gallery: directory scanning and thumbnail grids.
//!
//! The photos directory is scanned once at startup. Files with a supported
//! raster extension are probed for pixel dimensions; unreadable files are
//! skipped rather than reported. The resulting collection backs both the
//! home gallery grid and the portfolio panel grid.

use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{image, mouse_area, Column, Container, Image, Row, Text};
use iced::{ContentFit, Element, Length};
use std::path::{Path, PathBuf};

/// Extensions accepted by the gallery scan.
const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Number of tiles per row on the home gallery grid.
pub const HOME_COLUMNS: usize = 3;

/// Number of tiles per row on the portfolio panel grid.
pub const PORTFOLIO_COLUMNS: usize = 4;

/// A scanned photo before a widget handle is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoMeta {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// A photo ready to render.
#[derive(Debug, Clone)]
pub struct Photo {
    pub meta: PhotoMeta,
    pub handle: image::Handle,
}

impl Photo {
    fn from_meta(meta: PhotoMeta) -> Self {
        let handle = image::Handle::from_path(&meta.path);
        Self { meta, handle }
    }
}

/// Gallery state: the scanned photo collection.
#[derive(Debug, Default)]
pub struct State {
    photos: Vec<Photo>,
    scanning: bool,
}

impl State {
    /// Creates a gallery that is waiting for its startup scan.
    #[must_use]
    pub fn new() -> Self {
        Self {
            photos: Vec::new(),
            scanning: true,
        }
    }

    /// Returns the photo at `index`, if any.
    #[must_use]
    pub fn photo(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    /// Returns all photos in scan order.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Returns the number of photos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Messages emitted by the gallery grids.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was pressed (index into the photo collection).
    ThumbnailPressed(usize),
    /// The startup directory scan finished.
    Scanned(Result<Vec<PhotoMeta>>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A photo was selected for the lightbox.
    PhotoPressed(usize),
    /// The photos directory could not be scanned.
    ScanFailed,
}

/// Process a gallery message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ThumbnailPressed(index) => {
            if index < state.photos.len() {
                Event::PhotoPressed(index)
            } else {
                Event::None
            }
        }
        Message::Scanned(Ok(metas)) => {
            state.scanning = false;
            state.photos = metas.into_iter().map(Photo::from_meta).collect();
            Event::None
        }
        Message::Scanned(Err(_)) => {
            state.scanning = false;
            Event::ScanFailed
        }
    }
}

/// Scans `dir` for supported photos, sorted alphabetically by file name.
///
/// Files whose dimensions cannot be probed are skipped.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory itself cannot be read.
pub fn scan(dir: &Path) -> Result<Vec<PhotoMeta>> {
    let mut metas = Vec::new();

    for entry in std::fs::read_dir(dir).map_err(|e| Error::Io(e.to_string()))? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !is_supported_photo(&path) {
            continue;
        }

        match image_rs::image_dimensions(&path) {
            Ok((width, height)) => metas.push(PhotoMeta {
                path,
                width,
                height,
            }),
            Err(_) => continue,
        }
    }

    metas.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(metas)
}

/// Checks if a file has a supported raster extension.
fn is_supported_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Renders a thumbnail grid over the photo collection.
///
/// Every thumbnail press reports the photo's index; the caller decides what
/// selection means (both grids open the lightbox).
pub fn grid<'a>(
    state: &'a State,
    columns: usize,
    tile_height: f32,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    if state.scanning {
        return empty_state_line(i18n.tr("gallery-loading"));
    }
    if state.photos.is_empty() {
        return empty_state_line(i18n.tr("gallery-empty"));
    }

    let mut rows = Column::new().spacing(spacing::SM).width(Length::Fill);

    for (row_index, chunk) in state.photos.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(spacing::SM).width(Length::Fill);

        for (offset, photo) in chunk.iter().enumerate() {
            let index = row_index * columns + offset;
            let thumbnail = Image::new(photo.handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(tile_height))
                .content_fit(ContentFit::Cover);

            row = row.push(
                Container::new(
                    mouse_area(thumbnail).on_press(Message::ThumbnailPressed(index)),
                )
                .width(Length::FillPortion(1)),
            );
        }

        // Pad the last row so tiles keep their column width
        for _ in chunk.len()..columns {
            row = row.push(Container::new(Text::new("")).width(Length::FillPortion(1)));
        }

        rows = rows.push(row);
    }

    rows.into()
}

fn empty_state_line<'a>(message: String) -> Element<'a, Message> {
    Container::new(Text::new(message).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img = RgbaImage::from_pixel(width, height, Rgba([120, 90, 40, 255]));
        img.save(&path).expect("write png");
        path
    }

    fn sample_meta(name: &str) -> PhotoMeta {
        PhotoMeta {
            path: PathBuf::from(name),
            width: 4,
            height: 3,
        }
    }

    #[test]
    fn scan_returns_photos_sorted_by_file_name() {
        let temp_dir = tempdir().expect("temp dir");
        write_png(temp_dir.path(), "b.png", 4, 3);
        write_png(temp_dir.path(), "a.png", 2, 2);
        write_png(temp_dir.path(), "c.png", 8, 8);

        let metas = scan(temp_dir.path()).expect("scan should succeed");

        let names: Vec<_> = metas
            .iter()
            .map(|m| m.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
        assert_eq!(metas[0].width, 2);
        assert_eq!(metas[0].height, 2);
    }

    #[test]
    fn scan_skips_unsupported_and_unreadable_files() {
        let temp_dir = tempdir().expect("temp dir");
        write_png(temp_dir.path(), "good.png", 4, 3);
        std::fs::write(temp_dir.path().join("notes.txt"), "not a photo").expect("write txt");
        std::fs::write(temp_dir.path().join("broken.png"), b"not a png").expect("write bad png");

        let metas = scan(temp_dir.path()).expect("scan should succeed");

        assert_eq!(metas.len(), 1);
        assert!(metas[0].path.ends_with("good.png"));
    }

    #[test]
    fn scan_of_empty_directory_is_not_an_error() {
        let temp_dir = tempdir().expect("temp dir");
        let metas = scan(temp_dir.path()).expect("scan should succeed");
        assert!(metas.is_empty());
    }

    #[test]
    fn scan_of_missing_directory_errors() {
        let temp_dir = tempdir().expect("temp dir");
        let missing = temp_dir.path().join("does-not-exist");

        match scan(&missing) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn supported_extension_check_is_case_insensitive() {
        assert!(is_supported_photo(Path::new("a.JPG")));
        assert!(is_supported_photo(Path::new("a.webp")));
        assert!(!is_supported_photo(Path::new("a.txt")));
        assert!(!is_supported_photo(Path::new("no-extension")));
    }

    #[test]
    fn scanned_ok_populates_photos_and_stops_loading() {
        let mut state = State::new();
        assert!(state.scanning);

        let event = update(
            &mut state,
            Message::Scanned(Ok(vec![sample_meta("a.png"), sample_meta("b.png")])),
        );

        assert!(matches!(event, Event::None));
        assert!(!state.scanning);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn scanned_err_reports_failure_and_leaves_gallery_empty() {
        let mut state = State::new();

        let event = update(
            &mut state,
            Message::Scanned(Err(Error::Io("denied".into()))),
        );

        assert!(matches!(event, Event::ScanFailed));
        assert!(state.is_empty());
        assert!(!state.scanning);
    }

    #[test]
    fn thumbnail_press_reports_photo_index() {
        let mut state = State::new();
        let _ = update(
            &mut state,
            Message::Scanned(Ok(vec![sample_meta("a.png"), sample_meta("b.png")])),
        );

        let event = update(&mut state, Message::ThumbnailPressed(1));
        assert!(matches!(event, Event::PhotoPressed(1)));
    }

    #[test]
    fn out_of_range_thumbnail_press_is_ignored() {
        let mut state = State::new();
        let _ = update(&mut state, Message::Scanned(Ok(vec![sample_meta("a.png")])));

        let event = update(&mut state, Message::ThumbnailPressed(7));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn grid_renders_for_every_state() {
        let i18n = I18n::default();

        let loading = State::new();
        let _ = grid(&loading, HOME_COLUMNS, 180.0, &i18n);

        let mut empty = State::new();
        let _ = update(&mut empty, Message::Scanned(Ok(vec![])));
        let _ = grid(&empty, HOME_COLUMNS, 180.0, &i18n);

        let mut filled = State::new();
        let _ = update(
            &mut filled,
            Message::Scanned(Ok(vec![
                sample_meta("a.png"),
                sample_meta("b.png"),
                sample_meta("c.png"),
                sample_meta("d.png"),
            ])),
        );
        let _ = grid(&filled, HOME_COLUMNS, 180.0, &i18n);
    }
}
