//! Simple containers to hold decoded images and composite them together.

use std::{
    io::{self, BufWriter, Cursor, Write},
    path::{Path, PathBuf},
};

use ::image::{
    imageops::{self, FilterType},
    ImageReader, Rgba, RgbaImage,
};
use fs_err as fs;
use thiserror::Error;

pub(crate) type Pixel = Rgba<u8>;

#[derive(Debug, Clone)]
pub(crate) struct Image {
    buffer: RgbaImage,
}

impl Image {
    pub fn new_filled_rgba8(size: (u32, u32), fill: Pixel) -> Self {
        Self {
            buffer: RgbaImage::from_pixel(size.0, size.1, fill),
        }
    }

    /// Reads and decodes a PNG or JPEG file, converting it to RGBA.
    pub fn open(path: &Path) -> Result<Self, ImageError> {
        let contents = fs::read(path)?;

        let decoded = ::image::load_from_memory(&contents).map_err(|source| ImageError::Decode {
            path: path.to_owned(),
            source,
        })?;

        Ok(Self {
            buffer: decoded.to_rgba8(),
        })
    }

    /// Reads just enough of an image file to learn its size.
    pub fn read_dimensions(path: &Path) -> Result<(u32, u32), ImageError> {
        let contents = fs::read(path)?;
        let decode_error = |source| ImageError::Decode {
            path: path.to_owned(),
            source,
        };

        ImageReader::new(Cursor::new(contents))
            .with_guessed_format()?
            .into_dimensions()
            .map_err(decode_error)
    }

    pub fn encode_png<W: Write>(&self, output: W) -> Result<(), png::EncodingError> {
        let (width, height) = self.size();
        let mut encoder = png::Encoder::new(output, width, height);
        encoder.set_color(png::ColorType::RGBA);
        encoder.set_depth(png::BitDepth::Eight);

        let mut output_writer = encoder.write_header()?;
        output_writer.write_image_data(self.buffer.as_raw())?;

        // On drop, output_writer will write the last chunk of the PNG file.
        Ok(())
    }

    pub fn save_png(&self, path: &Path) -> Result<(), ImageError> {
        let file = fs::File::create(path)?;

        self.encode_png(BufWriter::new(file))
            .map_err(|source| ImageError::Encode {
                path: path.to_owned(),
                source,
            })
    }

    pub fn size(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// Resamples the image to `size` with a Lanczos filter.
    pub fn resized(&self, size: (u32, u32)) -> Image {
        if size == self.size() {
            return self.clone();
        }

        Self {
            buffer: imageops::resize(&self.buffer, size.0, size.1, FilterType::Lanczos3),
        }
    }

    /// Draws `other` over this image with its top-left corner at `pos`,
    /// blending by alpha. Parts of `other` that fall outside this image are
    /// dropped.
    pub fn composite(&mut self, other: &Image, pos: (i64, i64)) {
        imageops::overlay(&mut self.buffer, &other.buffer, pos.0, pos.1);
    }

    #[cfg(test)]
    pub fn get_pixel(&self, pos: (u32, u32)) -> Pixel {
        *self.buffer.get_pixel(pos.0, pos.1)
    }

    #[cfg(test)]
    pub fn set_pixel(&mut self, pos: (u32, u32), pixel: Pixel) {
        self.buffer.put_pixel(pos.0, pos.1, pixel);
    }
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Couldn't decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: ::image::ImageError,
    },

    #[error("Couldn't encode image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: png::EncodingError,
    },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },
}
