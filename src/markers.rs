/*
    Sectograph
    https://github.com/dbalsom/sectograph

    Copyright 2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

//! Hour-marker generation. Markers are evenly spaced around the dial at the
//! same top reference as the angle mapper, so task arcs and hour labels stay
//! visually aligned. Given a dial size configuration, marker positions are
//! static; [MarkerCache] memoizes them per configuration for callers that
//! render repeatedly.

use std::{
    collections::HashMap,
    f32::consts::TAU,
    sync::{Arc, RwLock},
};

use crate::types::{display_list::HourMarker, point::Point2d};

/// Generate `count` markers at `radius` around `center`, starting at the top
/// reference. Every `label_every`-th marker is labeled `"H:00"`; the rest
/// carry the bare hour number. Passing `label_every == 0` disables the long
/// form entirely.
pub fn generate_markers(
    count: u32,
    radius: f32,
    center: Point2d<f32>,
    top_offset: f32,
    label_every: u32,
) -> Vec<HourMarker> {
    (0..count)
        .map(|hour| {
            let angle = (hour as f32 / count as f32) * TAU + top_offset;
            let label = if label_every > 0 && hour % label_every == 0 {
                format!("{}:00", hour)
            }
            else {
                hour.to_string()
            };
            HourMarker {
                hour,
                position: Point2d::polar(center, radius, angle),
                label,
            }
        })
        .collect()
}

/// Cache key: the full marker configuration, with float fields keyed by bit
/// pattern so the key is `Eq + Hash`.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
struct MarkerKey {
    count: u32,
    label_every: u32,
    radius_bits: u32,
    offset_bits: u32,
    center_bits: (u32, u32),
}

impl MarkerKey {
    fn new(count: u32, radius: f32, center: Point2d<f32>, top_offset: f32, label_every: u32) -> MarkerKey {
        MarkerKey {
            count,
            label_every,
            radius_bits: radius.to_bits(),
            offset_bits: top_offset.to_bits(),
            center_bits: (center.x.to_bits(), center.y.to_bits()),
        }
    }
}

/// A read-safe memoization table for marker sets. Entries are computed once
/// per configuration and shared as immutable `Arc<[HourMarker]>` slices, so
/// concurrent render passes can read the cache without write-during-read
/// hazards. The cache is owned by the caller - it is deliberately not a
/// process-wide singleton.
#[derive(Debug, Default)]
pub struct MarkerCache {
    entries: RwLock<HashMap<MarkerKey, Arc<[HourMarker]>>>,
}

impl MarkerCache {
    pub fn new() -> MarkerCache {
        MarkerCache::default()
    }

    /// Return the marker set for the given configuration, generating and
    /// memoizing it on first use.
    pub fn get_or_generate(
        &self,
        count: u32,
        radius: f32,
        center: Point2d<f32>,
        top_offset: f32,
        label_every: u32,
    ) -> Arc<[HourMarker]> {
        let key = MarkerKey::new(count, radius, center, top_offset, label_every);

        if let Some(markers) = self.entries.read().unwrap_or_else(|e| e.into_inner()).get(&key) {
            return Arc::clone(markers);
        }

        let markers: Arc<[HourMarker]> =
            generate_markers(count, radius, center, top_offset, label_every).into();
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        // A racing writer may have inserted first; keep the existing entry so
        // all readers share one allocation.
        Arc::clone(entries.entry(key).or_insert(markers))
    }

    /// Number of distinct configurations currently memoized.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dial::DEFAULT_TOP_OFFSET;

    const CENTER: Point2d<f32> = Point2d { x: 0.5, y: 0.5 };

    #[test]
    fn default_labels_alternate_forms() {
        let markers = generate_markers(24, 0.25, CENTER, DEFAULT_TOP_OFFSET, 6);
        assert_eq!(markers.len(), 24);
        assert_eq!(markers[0].label, "0:00");
        assert_eq!(markers[1].label, "1");
        assert_eq!(markers[6].label, "6:00");
        assert_eq!(markers[12].label, "12:00");
        assert_eq!(markers[18].label, "18:00");
        assert_eq!(markers[23].label, "23");
    }

    #[test]
    fn marker_zero_sits_at_top_reference() {
        let markers = generate_markers(24, 0.25, CENTER, DEFAULT_TOP_OFFSET, 6);
        let top = Point2d::polar(CENTER, 0.25, DEFAULT_TOP_OFFSET);
        assert!((markers[0].position.x - top.x).abs() < 1e-6);
        assert!((markers[0].position.y - top.y).abs() < 1e-6);
    }

    #[test]
    fn cache_returns_shared_slices() {
        let cache = MarkerCache::new();
        let a = cache.get_or_generate(24, 0.25, CENTER, DEFAULT_TOP_OFFSET, 6);
        let b = cache.get_or_generate(24, 0.25, CENTER, DEFAULT_TOP_OFFSET, 6);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        let c = cache.get_or_generate(24, 0.3, CENTER, DEFAULT_TOP_OFFSET, 6);
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn label_every_zero_disables_long_form() {
        let markers = generate_markers(24, 0.25, CENTER, DEFAULT_TOP_OFFSET, 0);
        assert!(markers.iter().all(|m| !m.label.contains(":")));
    }
}
