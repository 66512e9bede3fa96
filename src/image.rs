//! A plain RGBA buffer used for thumbnails and for the canvas they're packed
//! onto.

use std::io::Write;

use image::RgbaImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageFormat {
    Rgba8,
}

impl ImageFormat {
    fn stride(&self) -> u32 {
        match self {
            ImageFormat::Rgba8 => 4,
        }
    }

    fn buffer_len(&self, size: (u32, u32)) -> usize {
        size.0 as usize * size.1 as usize * self.stride() as usize
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[cfg(test)]
impl Pixel {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Image {
    size: (u32, u32),
    data: Vec<u8>,
    format: ImageFormat,
}

impl Image {
    pub fn new_rgba8<D: Into<Vec<u8>>>(size: (u32, u32), data: D) -> Self {
        let data = data.into();
        let format = ImageFormat::Rgba8;

        assert!(data.len() == format.buffer_len(size));

        Self { size, data, format }
    }

    /// Creates a fully transparent image.
    pub fn new_empty_rgba8(size: (u32, u32)) -> Self {
        let data = vec![0; ImageFormat::Rgba8.buffer_len(size)];
        Self::new_rgba8(size, data)
    }

    pub fn from_rgba_image(image: RgbaImage) -> Self {
        let size = image.dimensions();
        Self::new_rgba8(size, image.into_raw())
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_raw(self.size.0, self.size.1, self.data.clone())
            .expect("buffer length always matches image size")
    }

    pub fn encode_png<W: Write>(&self, output: W) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(output, self.size.0, self.size.1);

        match self.format {
            ImageFormat::Rgba8 => {
                encoder.set_color(png::ColorType::RGBA);
                encoder.set_depth(png::BitDepth::Eight);
            }
        }

        let mut output_writer = encoder.write_header()?;
        output_writer.write_image_data(&self.data)?;

        // On drop, output_writer will write the last chunk of the PNG file.
        Ok(())
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Draws `other` on top of this image with its top-left corner at `pos`.
    ///
    /// Pixels from `other` replace whatever was underneath them. Any part of
    /// `other` that falls outside of this image is clipped.
    pub fn blit(&mut self, other: &Image, pos: (u32, u32)) {
        assert!(self.format == ImageFormat::Rgba8 && other.format == ImageFormat::Rgba8);

        if pos.0 >= self.size.0 || pos.1 >= self.size.1 {
            return;
        }

        let stride = self.format.stride() as usize;

        let visible_width = other.size.0.min(self.size.0 - pos.0) as usize;
        let visible_rows = other.size.1.min(self.size.1 - pos.1) as usize;

        let other_width_bytes = other.size.0 as usize * stride;
        let other_rows = other
            .data
            .chunks_exact(other_width_bytes)
            .take(visible_rows);

        for (other_y, other_row) in other_rows.enumerate() {
            let self_y = pos.1 as usize + other_y;

            let start_px = pos.0 as usize + self.size.0 as usize * self_y;

            let start_in_bytes = stride * start_px;
            let end_in_bytes = start_in_bytes + visible_width * stride;

            let self_row = &mut self.data[start_in_bytes..end_in_bytes];
            self_row.copy_from_slice(&other_row[..visible_width * stride]);
        }
    }

    #[cfg(test)]
    pub fn get_pixel(&self, pos: (u32, u32)) -> Pixel {
        assert!(pos.0 < self.size.0);
        assert!(pos.1 < self.size.1);

        let start = self.offset_of(pos);

        Pixel {
            r: self.data[start],
            g: self.data[start + 1],
            b: self.data[start + 2],
            a: self.data[start + 3],
        }
    }

    #[cfg(test)]
    pub fn set_pixel(&mut self, pos: (u32, u32), pixel: Pixel) {
        assert!(pos.0 < self.size.0);
        assert!(pos.1 < self.size.1);

        let start = self.offset_of(pos);

        self.data[start] = pixel.r;
        self.data[start + 1] = pixel.g;
        self.data[start + 2] = pixel.b;
        self.data[start + 3] = pixel.a;
    }

    #[cfg(test)]
    fn offset_of(&self, pos: (u32, u32)) -> usize {
        let stride = self.format.stride() as usize;
        stride * (pos.0 as usize + pos.1 as usize * self.size.0 as usize)
    }
}
