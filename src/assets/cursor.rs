use crate::assets::pool::AssetPool;

/// Position in the ordered image list shared by every image- and video-consuming slot.
///
/// One cursor is threaded through the whole compile: each item receives the cursor left by the
/// previous item and returns the one it leaves behind, so a grid that takes four images is
/// followed by an item starting at the fifth. It never rewinds and never moves past the end of
/// the pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssetCursor {
    next: usize,
}

impl AssetCursor {
    /// Cursor at the first image.
    pub fn start() -> Self {
        Self::default()
    }

    /// Index of the next image to hand out.
    pub fn position(self) -> usize {
        self.next
    }

    /// `true` once every image in `pool` has been consumed.
    pub fn is_exhausted(self, pool: &AssetPool<'_>) -> bool {
        self.next >= pool.image_count()
    }

    /// Take the next image, returning it and the advanced cursor.
    ///
    /// On an exhausted pool the cursor is returned unchanged with `None`.
    pub fn take<'a>(self, pool: &AssetPool<'a>) -> (Option<&'a str>, Self) {
        match pool.image(self.next) {
            Some(reference) => (
                Some(reference),
                Self {
                    next: self.next + 1,
                },
            ),
            None => (None, self),
        }
    }
}
