// SPDX-License-Identifier: MPL-2.0
//! Page content supply for the demo carousels.
//!
//! The supply is the only source of page data the carousels see: an opaque,
//! ordered collection exposing `len()` and `get(index)`. The demo supply
//! alternates between two procedurally generated placeholder images, standing
//! in for the two static drawables of a classic carousel demo without
//! shipping binary assets.

use iced::widget::image;
use image_rs::{Rgba, RgbaImage};

/// Pixel size of generated page images (16:9, small enough to build at startup).
pub const PAGE_WIDTH: u32 = 640;
pub const PAGE_HEIGHT: u32 = 360;

/// Which of the two demo visuals a page shows.
///
/// Even page indices get `Primary`, odd indices `Alternate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVariant {
    Primary,
    Alternate,
}

/// One unit of swipeable content.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub variant: PageVariant,
    pub handle: image::Handle,
}

/// Capability consumed by the carousels: an ordered sequence of N pages.
///
/// The synchronizer never sees this; it only learns the page count through
/// its `PagedContent` host.
pub trait PageSupply {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the page at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<PageContent>;
}

/// Demo supply alternating two generated images by index parity.
#[derive(Debug, Clone)]
pub struct AlternatingSupply {
    page_count: usize,
    primary: image::Handle,
    alternate: image::Handle,
}

impl AlternatingSupply {
    /// Builds the supply, generating both page visuals once up front.
    /// Handles are cheap to clone, so `get` never regenerates pixels.
    #[must_use]
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            primary: gradient_handle([28, 78, 148], [108, 166, 230]),
            alternate: gradient_handle([150, 75, 18], [235, 180, 100]),
        }
    }

    /// Variant shown at `index`, independent of the rendered handle.
    #[must_use]
    pub fn variant_of(index: usize) -> PageVariant {
        if index % 2 == 0 {
            PageVariant::Primary
        } else {
            PageVariant::Alternate
        }
    }

    /// Content for an arbitrary index. Unlike [`PageSupply::get`] this is not
    /// bounded by `len`, so callers can grow a carousel past the initial
    /// page count while keeping the alternation.
    #[must_use]
    pub fn page(&self, index: usize) -> PageContent {
        let variant = Self::variant_of(index);
        let handle = match variant {
            PageVariant::Primary => self.primary.clone(),
            PageVariant::Alternate => self.alternate.clone(),
        };
        PageContent { variant, handle }
    }
}

impl PageSupply for AlternatingSupply {
    fn len(&self) -> usize {
        self.page_count
    }

    fn get(&self, index: usize) -> Option<PageContent> {
        (index < self.page_count).then(|| self.page(index))
    }
}

/// Renders a vertical gradient into an RGBA handle Iced can display.
fn gradient_handle(top: [u8; 3], bottom: [u8; 3]) -> image::Handle {
    let img = RgbaImage::from_fn(PAGE_WIDTH, PAGE_HEIGHT, |_x, y| {
        let t = f32::from(y as u16) / PAGE_HEIGHT as f32;
        let channel = |a: u8, b: u8| -> u8 {
            let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgba([
            channel(top[0], bottom[0]),
            channel(top[1], bottom[1]),
            channel(top[2], bottom[2]),
            255,
        ])
    });
    image::Handle::from_rgba(PAGE_WIDTH, PAGE_HEIGHT, img.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_alternate_by_index() {
        assert_eq!(AlternatingSupply::variant_of(0), PageVariant::Primary);
        assert_eq!(AlternatingSupply::variant_of(1), PageVariant::Alternate);
        assert_eq!(AlternatingSupply::variant_of(4), PageVariant::Primary);
    }

    #[test]
    fn get_respects_page_count() {
        let supply = AlternatingSupply::new(5);
        assert_eq!(supply.len(), 5);
        assert!(supply.get(4).is_some());
        assert!(supply.get(5).is_none());
    }

    #[test]
    fn empty_supply_has_no_pages() {
        let supply = AlternatingSupply::new(0);
        assert!(supply.is_empty());
        assert!(supply.get(0).is_none());
    }

    #[test]
    fn pages_carry_the_alternating_variant() {
        let supply = AlternatingSupply::new(3);
        let variants: Vec<_> = (0..3).map(|i| supply.get(i).unwrap().variant).collect();
        assert_eq!(
            variants,
            vec![
                PageVariant::Primary,
                PageVariant::Alternate,
                PageVariant::Primary
            ]
        );
    }
}
