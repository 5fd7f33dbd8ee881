//! Keyframe animation
//!
//! Entities record keyframes of their transform channels into per-channel
//! [`KeyframeTrack`]s. The world's [`Timeline`] owns the frame range and the
//! current frame; setting the frame evaluates every track into its entity.

use bitflags::bitflags;
use flythrough_math::{Euler, Vec3};
use serde::{Serialize, Deserialize};

use crate::{SceneError, Transform3D};

bitflags! {
    /// Transform channels that can be keyed
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Channels: u8 {
        const NONE = 0;
        const LOCATION = 1 << 0;
        const ROTATION = 1 << 1;
        const SCALE = 1 << 2;
        const ALL = Self::LOCATION.bits() | Self::ROTATION.bits() | Self::SCALE.bits();
    }
}

/// How a track fills the gap between two keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterpolationMode {
    /// Hold the previous key until the next one
    Constant,
    /// Straight-line blend between keys
    #[default]
    Linear,
}

/// A single keyed value
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub frame: i32,
    pub value: Vec3,
}

/// Keys for one channel, sorted by frame with at most one key per frame
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyframeTrack {
    keys: Vec<Keyframe>,
    pub interpolation: InterpolationMode,
}

impl KeyframeTrack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interpolation(mut self, interpolation: InterpolationMode) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Insert a key, replacing any existing key on the same frame
    pub fn insert(&mut self, frame: i32, value: Vec3) {
        match self.keys.binary_search_by_key(&frame, |k| k.frame) {
            Ok(i) => self.keys[i].value = value,
            Err(i) => self.keys.insert(i, Keyframe { frame, value }),
        }
    }

    /// Remove the key on `frame`, if any
    pub fn remove(&mut self, frame: i32) -> Option<Keyframe> {
        self.keys
            .binary_search_by_key(&frame, |k| k.frame)
            .ok()
            .map(|i| self.keys.remove(i))
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn first(&self) -> Option<&Keyframe> {
        self.keys.first()
    }

    pub fn last(&self) -> Option<&Keyframe> {
        self.keys.last()
    }

    /// Value of the key exactly on `frame`
    pub fn get(&self, frame: i32) -> Option<Vec3> {
        self.keys
            .binary_search_by_key(&frame, |k| k.frame)
            .ok()
            .map(|i| self.keys[i].value)
    }

    /// Evaluate the track at a (possibly fractional) frame
    ///
    /// Frames before the first key hold the first value, frames after the last
    /// key hold the last value. Returns `None` for an empty track or a NaN frame.
    pub fn sample(&self, frame: f32) -> Option<Vec3> {
        if frame.is_nan() {
            return None;
        }
        let first = self.keys.first()?;
        let last = self.keys.last()?;

        if frame <= first.frame as f32 {
            return Some(first.value);
        }
        if frame >= last.frame as f32 {
            return Some(last.value);
        }

        // Index of the first key strictly after `frame`; always in 1..len here
        let next = self.keys.partition_point(|k| k.frame as f32 <= frame);
        let a = &self.keys[next - 1];
        let b = &self.keys[next];

        match self.interpolation {
            InterpolationMode::Constant => Some(a.value),
            InterpolationMode::Linear => {
                let t = (frame - a.frame as f32) / (b.frame - a.frame) as f32;
                Some(a.value.lerp(b.value, t))
            }
        }
    }
}

/// Per-channel tracks of one entity
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub location: KeyframeTrack,
    pub rotation: KeyframeTrack,
    pub scale: KeyframeTrack,
}

impl Animation {
    /// True when no channel has any key
    pub fn is_empty(&self) -> bool {
        self.location.is_empty() && self.rotation.is_empty() && self.scale.is_empty()
    }

    /// Channels that hold at least one key
    pub fn keyed_channels(&self) -> Channels {
        let mut channels = Channels::NONE;
        if !self.location.is_empty() {
            channels |= Channels::LOCATION;
        }
        if !self.rotation.is_empty() {
            channels |= Channels::ROTATION;
        }
        if !self.scale.is_empty() {
            channels |= Channels::SCALE;
        }
        channels
    }

    /// Total number of keys across all channels
    pub fn key_count(&self) -> usize {
        self.location.len() + self.rotation.len() + self.scale.len()
    }

    /// Record the selected channels of `transform` at `frame`
    pub fn record(&mut self, channels: Channels, frame: i32, transform: &Transform3D) {
        if channels.contains(Channels::LOCATION) {
            self.location.insert(frame, transform.position);
        }
        if channels.contains(Channels::ROTATION) {
            self.rotation.insert(frame, transform.rotation.to_vec3());
        }
        if channels.contains(Channels::SCALE) {
            self.scale.insert(frame, transform.scale);
        }
    }

    /// Write every keyed channel's value at `frame` into `transform`
    ///
    /// Channels without keys are left untouched.
    pub fn apply(&self, frame: f32, transform: &mut Transform3D) {
        if let Some(position) = self.location.sample(frame) {
            transform.position = position;
        }
        if let Some(rotation) = self.rotation.sample(frame) {
            transform.rotation = Euler::from_vec3(rotation);
        }
        if let Some(scale) = self.scale.sample(frame) {
            transform.scale = scale;
        }
    }

    /// Frame range spanned by all keys, if any
    pub fn frame_range(&self) -> Option<(i32, i32)> {
        [&self.location, &self.rotation, &self.scale]
            .iter()
            .filter_map(|track| Some((track.first()?.frame, track.last()?.frame)))
            .reduce(|(lo, hi), (a, b)| (lo.min(a), hi.max(b)))
    }
}

/// Scene frame range, rate, and current frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    frame_start: i32,
    frame_end: i32,
    fps: u32,
    current: i32,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            frame_start: 1,
            frame_end: 250,
            fps: 24,
            current: 1,
        }
    }
}

impl Timeline {
    /// Create a timeline positioned on its first frame
    pub fn new(frame_start: i32, frame_end: i32, fps: u32) -> Result<Self, SceneError> {
        if frame_end < frame_start {
            return Err(SceneError::InvalidTimeline { start: frame_start, end: frame_end });
        }
        if fps == 0 {
            return Err(SceneError::InvalidFrameRate(fps));
        }
        Ok(Self {
            frame_start,
            frame_end,
            fps,
            current: frame_start,
        })
    }

    #[inline]
    pub fn frame_start(&self) -> i32 {
        self.frame_start
    }

    #[inline]
    pub fn frame_end(&self) -> i32 {
        self.frame_end
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    #[inline]
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Number of frames in `frame_start..=frame_end`
    pub fn frame_count(&self) -> u32 {
        (self.frame_end - self.frame_start) as u32 + 1
    }

    /// Playback length in seconds
    pub fn duration_secs(&self) -> f32 {
        self.frame_count() as f32 / self.fps as f32
    }

    pub fn contains(&self, frame: i32) -> bool {
        (self.frame_start..=self.frame_end).contains(&frame)
    }

    /// Move the playhead; frames outside the range are allowed, as in the host
    pub(crate) fn set_current(&mut self, frame: i32) {
        self.current = frame;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track_with(keys: &[(i32, f32)]) -> KeyframeTrack {
        let mut track = KeyframeTrack::new();
        for &(frame, x) in keys {
            track.insert(frame, Vec3::new(x, 0.0, 0.0));
        }
        track
    }

    #[test]
    fn test_insert_keeps_sorted() {
        let track = track_with(&[(10, 1.0), (1, 0.0), (5, 0.5)]);
        let frames: Vec<i32> = track.keys().iter().map(|k| k.frame).collect();
        assert_eq!(frames, vec![1, 5, 10]);
    }

    #[test]
    fn test_insert_replaces_same_frame() {
        let mut track = track_with(&[(1, 0.0), (5, 0.5)]);
        track.insert(5, Vec3::new(9.0, 0.0, 0.0));
        assert_eq!(track.len(), 2);
        assert_eq!(track.get(5), Some(Vec3::new(9.0, 0.0, 0.0)));
    }

    #[test]
    fn test_sample_nan_frame() {
        let track = track_with(&[(1, 0.0), (10, 9.0)]);
        assert_eq!(track.sample(f32::NAN), None);
        // Infinite frames still clamp to the ends
        assert_eq!(track.sample(f32::INFINITY), Some(Vec3::new(9.0, 0.0, 0.0)));
        assert_eq!(track.sample(f32::NEG_INFINITY), Some(Vec3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_remove() {
        let mut track = track_with(&[(1, 0.0), (5, 0.5)]);
        assert!(track.remove(5).is_some());
        assert!(track.remove(5).is_none());
        assert_eq!(track.len(), 1);
    }

    #[test]
    fn test_sample_empty() {
        assert_eq!(KeyframeTrack::new().sample(1.0), None);
    }

    #[test]
    fn test_sample_clamps_outside_range() {
        let track = track_with(&[(10, 1.0), (20, 3.0)]);
        assert_eq!(track.sample(0.0).unwrap().x, 1.0);
        assert_eq!(track.sample(100.0).unwrap().x, 3.0);
    }

    #[test]
    fn test_sample_linear() {
        let track = track_with(&[(10, 1.0), (20, 3.0)]);
        assert_eq!(track.sample(15.0).unwrap().x, 2.0);
        assert_eq!(track.sample(10.0).unwrap().x, 1.0);
        assert_eq!(track.sample(20.0).unwrap().x, 3.0);
    }

    #[test]
    fn test_sample_hits_exact_keys() {
        let track = track_with(&[(1, 0.0), (2, 4.0), (3, -2.0)]);
        assert_eq!(track.sample(2.0).unwrap().x, 4.0);
        assert_eq!(track.sample(2.5).unwrap().x, 1.0);
    }

    #[test]
    fn test_sample_constant() {
        let track = track_with(&[(10, 1.0), (20, 3.0)])
            .with_interpolation(InterpolationMode::Constant);
        assert_eq!(track.sample(19.9).unwrap().x, 1.0);
        assert_eq!(track.sample(20.0).unwrap().x, 3.0);
    }

    #[test]
    fn test_record_selected_channels() {
        let mut animation = Animation::default();
        let transform = Transform3D::from_position(Vec3::new(1.0, 2.0, 3.0));

        animation.record(Channels::LOCATION, 1, &transform);
        assert_eq!(animation.keyed_channels(), Channels::LOCATION);
        assert_eq!(animation.key_count(), 1);

        animation.record(Channels::ALL, 2, &transform);
        assert_eq!(animation.keyed_channels(), Channels::ALL);
        assert_eq!(animation.key_count(), 4);
    }

    #[test]
    fn test_apply_leaves_unkeyed_channels() {
        let mut animation = Animation::default();
        animation.location.insert(1, Vec3::new(0.0, 0.0, 0.0));
        animation.location.insert(3, Vec3::new(0.0, 4.0, 0.0));

        let mut transform = Transform3D::identity().with_scale(Vec3::new(2.0, 2.0, 2.0));
        animation.apply(2.0, &mut transform);

        assert_eq!(transform.position, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(transform.scale, Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_frame_range() {
        let mut animation = Animation::default();
        assert_eq!(animation.frame_range(), None);

        animation.location.insert(5, Vec3::ZERO);
        animation.location.insert(40, Vec3::ZERO);
        animation.scale.insert(2, Vec3::ONE);
        assert_eq!(animation.frame_range(), Some((2, 40)));
    }

    #[test]
    fn test_channels_flags() {
        let flags = Channels::LOCATION | Channels::SCALE;
        assert!(flags.contains(Channels::LOCATION));
        assert!(!flags.contains(Channels::ROTATION));
        assert_eq!(Channels::default(), Channels::NONE);
    }

    #[test]
    fn test_timeline_new() {
        let timeline = Timeline::new(1, 1000, 1000).unwrap();
        assert_eq!(timeline.current(), 1);
        assert_eq!(timeline.frame_count(), 1000);
        assert_eq!(timeline.duration_secs(), 1.0);
        assert!(timeline.contains(1));
        assert!(timeline.contains(1000));
        assert!(!timeline.contains(0));
        assert!(!timeline.contains(1001));
    }

    #[test]
    fn test_timeline_rejects_bad_ranges() {
        assert_eq!(
            Timeline::new(10, 1, 24),
            Err(SceneError::InvalidTimeline { start: 10, end: 1 })
        );
        assert_eq!(Timeline::new(1, 10, 0), Err(SceneError::InvalidFrameRate(0)));
    }

    #[test]
    fn test_single_frame_timeline() {
        let timeline = Timeline::new(1, 1, 24).unwrap();
        assert_eq!(timeline.frame_count(), 1);
    }
}
