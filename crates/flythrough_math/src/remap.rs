//! Frame-to-index remapping
//!
//! Maps animation frames `1..=total_frames` linearly onto the corridor index
//! range so that the last frame lands exactly on index `length - 1`.

use crate::curve::{CurveError, PathCurve, SamplePoint};

/// Linear mapping from animation frame to fractional corridor index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRemap {
    total_frames: u32,
    length: u32,
}

impl FrameRemap {
    /// Create a remapping over `total_frames` frames and a corridor of `length` indices
    pub fn new(total_frames: u32, length: u32) -> Result<Self, CurveError> {
        if total_frames == 0 || length == 0 {
            return Err(CurveError::EmptyRange { total_frames, length });
        }
        Ok(Self { total_frames, length })
    }

    #[inline]
    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Last valid corridor index
    #[inline]
    pub fn last_index(&self) -> f32 {
        (self.length - 1) as f32
    }

    /// Fractional corridor index for a frame: `(frame / total_frames) * (length - 1)`
    #[inline]
    pub fn index_for_frame(&self, frame: u32) -> f32 {
        (frame as f32 / self.total_frames as f32) * self.last_index()
    }

    /// Frames covered by the animation, `1..=total_frames`
    pub fn frames(&self) -> impl Iterator<Item = u32> {
        1..=self.total_frames
    }

    /// Sample the curve once per frame
    pub fn sample<'a>(&self, curve: &'a PathCurve) -> impl Iterator<Item = (u32, SamplePoint)> + 'a {
        let remap = *self;
        remap
            .frames()
            .map(move |frame| (frame, curve.sample(remap.index_for_frame(frame))))
    }
}
