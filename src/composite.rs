//! Draws a packed layout of thumbnails onto a single canvas.

use rowpack::Layout;

use crate::{image::Image, thumbnail::Thumbnail};

/// Allocates a transparent canvas the size of `layout` and draws every
/// thumbnail at its place in the layout.
///
/// Rows are drawn top to bottom and each row left to right. Thumbnails never
/// overlap, so drawing order doesn't change the result.
pub fn composite(layout: &Layout<Thumbnail>) -> Image {
    let mut canvas = Image::new_empty_rgba8(layout.size());

    for (thumbnail, rect) in layout.placements() {
        // Only reachable with input that wasn't sorted widest first.
        // `pack_folder` always sorts, so layouts from it never get here.
        if !rect.fits_within(canvas.size()) {
            log::warn!(
                "{} doesn't fit on the {}x{} canvas and will be cropped",
                thumbnail.name(),
                layout.width(),
                layout.height()
            );
        }

        canvas.blit(thumbnail.image(), rect.pos);
    }

    canvas
}
