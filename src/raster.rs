use std::path::Path;
use image::{DynamicImage, ImageResult, RgbaImage};
use crate::rgba::Rgba;

/// 16-bit RGBA buffer, as produced by `DynamicImage::into_rgba16`.
type Rgba16Image = image::ImageBuffer<image::Rgba<u16>, Vec<u16>>;

/// Random-access pixel reader the convolution engine samples from.
///
/// `pixel` must be defined for every coordinate in `[0, width) x [0, height)`.
pub trait PixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn pixel(&self, x: usize, y: usize) -> Rgba;
}

/// An owned grid of pixels, addressed as `image[(x, y)]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image(Vec<Vec<Rgba>>);

impl std::ops::Index<(usize, usize)> for Image {
    type Output = Rgba;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.0[x][y]
    }
}

impl Image {
    pub fn construct(width: usize, height: usize, f: impl Fn(usize, usize) -> Rgba) -> Image {
        let data = (0..width)
            .map(|x| (0..height)
                .map(|y| f(x, y))
                .collect())
            .collect();
        Image(data)
    }

    pub fn from_pixel(width: usize, height: usize, pixel: Rgba) -> Image {
        Self::construct(width, height, move |_, _| pixel)
    }

    pub fn width(&self) -> usize {
        self.0.len()
    }

    pub fn height(&self) -> usize {
        self.0.first()
            .map(|v| v.len())
            .unwrap_or(0)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        Into::<RgbaImage>::into(self.clone())
            .save(path)
    }
}

impl PixelSource for Image {
    fn width(&self) -> usize {
        Image::width(self)
    }

    fn height(&self) -> usize {
        Image::height(self)
    }

    fn pixel(&self, x: usize, y: usize) -> Rgba {
        self[(x, y)]
    }
}

impl From<RgbaImage> for Image {
    fn from(i: RgbaImage) -> Self {
        Self::construct(i.width() as usize,
                        i.height() as usize,
                        |x, y| i
            .get_pixel(x as u32, y as u32)
            .into())
    }
}

impl From<Rgba16Image> for Image {
    fn from(i: Rgba16Image) -> Self {
        Self::construct(i.width() as usize,
                        i.height() as usize,
                        |x, y| i
            .get_pixel(x as u32, y as u32)
            .into())
    }
}

impl From<DynamicImage> for Image {
    // decode through 16 bits so every native depth lands in nominal 0..=255
    fn from(i: DynamicImage) -> Self {
        i.into_rgba16().into()
    }
}

impl Into<RgbaImage> for Image {
    fn into(self) -> RgbaImage {
        RgbaImage::from_fn(
            self.width() as u32,
            self.height() as u32,
            |x, y| {
                self[(x as usize, y as usize)].into()
            })
    }
}
