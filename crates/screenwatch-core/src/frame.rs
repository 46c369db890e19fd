use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::types::Resolution;

/// One full-screen RGBA8 snapshot.
#[derive(Debug, Clone)]
pub struct Frame {
    image: RgbaImage,
}

impl Frame {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.image.width(), self.image.height())
    }

    pub fn is_empty(&self) -> bool {
        self.resolution().is_empty()
    }

    /// Copy of the frame scaled to fit `bounds`, aspect ratio preserved.
    pub fn scaled_to_fit(&self, bounds: Resolution) -> RgbaImage {
        let target = self.resolution().fit_within(bounds);
        if target == self.resolution() {
            return self.image.clone();
        }
        if target.is_empty() {
            return RgbaImage::new(0, 0);
        }
        imageops::resize(&self.image, target.width, target.height, FilterType::Triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn scaled_copy_keeps_aspect_ratio() {
        let frame = Frame::new(RgbaImage::from_pixel(1920, 1080, Rgba([10, 20, 30, 255])));
        let scaled = frame.scaled_to_fit(Resolution::new(700, 500));
        assert_eq!(scaled.dimensions(), (700, 394));
        // Uniform input stays uniform through the filter.
        assert_eq!(*scaled.get_pixel(350, 200), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn exact_fit_is_returned_unchanged() {
        let frame = Frame::new(RgbaImage::from_pixel(700, 500, Rgba([1, 2, 3, 4])));
        let scaled = frame.scaled_to_fit(Resolution::new(700, 500));
        assert_eq!(&scaled, frame.image());
    }

    #[test]
    fn empty_frame_scales_to_empty() {
        let frame = Frame::new(RgbaImage::new(0, 0));
        assert!(frame.is_empty());
        assert_eq!(frame.scaled_to_fit(Resolution::new(700, 500)).dimensions(), (0, 0));
    }
}
