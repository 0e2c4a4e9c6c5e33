//! Card composition: ordered records in, ordered animated nodes out.
//!
//! [`compose`] pairs every record with a [`Transition`] whose delay depends
//! only on the record's position, so cards enter in reading order. Nothing
//! here knows about Leptos; the components in [`crate::components`] consume
//! the nodes and turn each transition into inline CSS.
//!
//! ```rust
//! use std::time::Duration;
//! use portfolio_leptos::compose::{compose, Motion};
//!
//! let titles = ["a", "b", "c"];
//! let nodes = compose(&titles, &Motion::PROJECT_CARDS);
//! let delays: Vec<_> = nodes.iter().map(|n| n.transition.delay).collect();
//! assert_eq!(
//!     delays,
//!     vec![Duration::ZERO, Duration::from_millis(100), Duration::from_millis(200)]
//! );
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::types::Section;

/// How a node becomes visible. Opacity always goes from 0 to 1.
///
/// The variants are open for const presets; [`Entrance::rise`] and
/// [`Entrance::grow`] check that the element actually moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    /// Opacity only
    Fade,
    /// Slide up from `offset_px` below the resting position
    Rise {
        /// Starting vertical offset
        offset_px: u16,
    },
    /// Grow from `from` times the resting size
    Grow {
        /// Starting scale factor
        from: f32,
    },
}

impl Entrance {
    /// Slide-up entrance. `None` for a zero offset.
    pub fn rise(offset_px: u16) -> Option<Self> {
        (offset_px > 0).then_some(Entrance::Rise { offset_px })
    }

    /// Grow entrance. `None` unless `0 <= from < 1`.
    pub fn grow(from: f32) -> Option<Self> {
        (0.0..1.0).contains(&from).then_some(Entrance::Grow { from })
    }

    /// Name of the `@keyframes` rule in the stylesheet.
    pub fn keyframes(&self) -> &'static str {
        match self {
            Entrance::Fade => "fade-in",
            Entrance::Rise { .. } => "fade-up",
            Entrance::Grow { .. } => "scale-in",
        }
    }

    fn custom_property(&self) -> Option<String> {
        match self {
            Entrance::Fade => None,
            Entrance::Rise { offset_px } => Some(format!("--rise-from: {offset_px}px")),
            Entrance::Grow { from } => Some(format!("--scale-from: {from}")),
        }
    }
}

/// Per-index delay schedule: `base + index * stride`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    base: Duration,
    stride: Duration,
}

impl Stagger {
    /// `None` when `stride` is zero.
    pub const fn new(base: Duration, stride: Duration) -> Option<Self> {
        if stride.is_zero() {
            None
        } else {
            Some(Self { base, stride })
        }
    }

    /// Delay of the first node.
    pub fn base(&self) -> Duration {
        self.base
    }

    /// Gap between consecutive nodes.
    pub fn stride(&self) -> Duration {
        self.stride
    }

    /// Entrance delay of the node at `index`.
    pub fn delay_at(&self, index: usize) -> Duration {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        self.base.saturating_add(self.stride.saturating_mul(steps))
    }
}

/// Looping idle animation started after the entrance (the skills "float").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdleLoop {
    /// Offset between consecutive nodes' loops
    pub stride: Duration,
    /// Length of one loop
    pub period: Duration,
}

/// Idle loop timing for one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdleTiming {
    /// When the loop starts
    pub delay: Duration,
    /// Length of one loop
    pub period: Duration,
}

/// Animation recipe for a whole grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Entrance variant shared by every node
    pub entrance: Entrance,
    /// Entrance length
    pub duration: Duration,
    /// Delay schedule
    pub stagger: Stagger,
    /// Optional looping animation after the entrance
    pub idle: Option<IdleLoop>,
}

impl Motion {
    /// Featured project cards: slide up 20px, 500ms each, 100ms apart.
    pub const PROJECT_CARDS: Motion = Motion {
        entrance: Entrance::Rise { offset_px: 20 },
        duration: Duration::from_millis(500),
        stagger: Stagger {
            base: Duration::ZERO,
            stride: Duration::from_millis(100),
        },
        idle: None,
    };

    /// Skill tiles: grow from 90%, 300ms each, 50ms apart, then float.
    pub const SKILL_CARDS: Motion = Motion {
        entrance: Entrance::Grow { from: 0.9 },
        duration: Duration::from_millis(300),
        stagger: Stagger {
            base: Duration::ZERO,
            stride: Duration::from_millis(50),
        },
        idle: Some(IdleLoop {
            stride: Duration::from_millis(200),
            period: Duration::from_secs(3),
        }),
    };

    /// Transition of the node at `index`.
    pub fn transition_at(&self, index: usize) -> Transition {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        Transition {
            entrance: self.entrance,
            delay: self.stagger.delay_at(index),
            duration: self.duration,
            idle: self.idle.map(|idle| IdleTiming {
                delay: idle.stride.saturating_mul(steps),
                period: idle.period,
            }),
        }
    }
}

/// Resolved timing of a single animated element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Entrance variant
    pub entrance: Entrance,
    /// Wait before the entrance starts
    pub delay: Duration,
    /// Entrance length
    pub duration: Duration,
    /// Looping animation, if any
    pub idle: Option<IdleTiming>,
}

impl Transition {
    /// Standalone transition without an idle loop.
    pub const fn new(entrance: Entrance, delay: Duration, duration: Duration) -> Self {
        Self {
            entrance,
            delay,
            duration,
            idle: None,
        }
    }

    /// Inline `style` value driving the stylesheet keyframes.
    ///
    /// `both` fill mode keeps the element at its starting frame until the
    /// delay elapses.
    pub fn css(&self) -> String {
        let mut animation = format!(
            "{} {}ms ease-out {}ms both",
            self.entrance.keyframes(),
            self.duration.as_millis(),
            self.delay.as_millis()
        );
        if let Some(idle) = self.idle {
            animation.push_str(&format!(
                ", float {}ms ease-in-out {}ms infinite",
                idle.period.as_millis(),
                idle.delay.as_millis()
            ));
        }

        match self.entrance.custom_property() {
            Some(prop) => format!("animation: {animation}; {prop}"),
            None => format!("animation: {animation}"),
        }
    }
}

/// One record paired with its entrance transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualNode<'a, T> {
    /// Position in the input
    pub index: usize,
    /// The record this node renders
    pub record: &'a T,
    /// Entrance timing
    pub transition: Transition,
}

/// Map records to animated nodes, preserving order.
///
/// Node `i` starts `motion.stagger.delay_at(i)` after mount. Empty input
/// gives an empty output.
pub fn compose<'a, T>(records: &'a [T], motion: &Motion) -> Vec<VisualNode<'a, T>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| VisualNode {
            index,
            record,
            transition: motion.transition_at(index),
        })
        .collect()
}

/// Timing overrides for one grid. Unset fields keep the preset value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingOverride {
    /// Delay of the first card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_delay_ms: Option<u64>,
    /// Gap between cards, must be nonzero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stride_ms: Option<u64>,
    /// Entrance length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl TimingOverride {
    fn apply(&self, preset: Motion, section: Section) -> Result<Motion, SiteError> {
        let base = self
            .base_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(preset.stagger.base);
        let stride = self
            .stride_ms
            .map(Duration::from_millis)
            .unwrap_or(preset.stagger.stride);
        let stagger = Stagger::new(base, stride).ok_or(SiteError::ZeroStride { section })?;
        let duration = self
            .duration_ms
            .map(Duration::from_millis)
            .unwrap_or(preset.duration);

        Ok(Motion {
            stagger,
            duration,
            ..preset
        })
    }
}

/// Motion overrides from the content file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Featured projects grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<TimingOverride>,
    /// Skills grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<TimingOverride>,
}

impl MotionSettings {
    /// Project grid motion with overrides applied.
    pub fn projects(&self) -> Result<Motion, SiteError> {
        match self.projects {
            Some(over) => over.apply(Motion::PROJECT_CARDS, Section::Projects),
            None => Ok(Motion::PROJECT_CARDS),
        }
    }

    /// Skill grid motion with overrides applied.
    pub fn skills(&self) -> Result<Motion, SiteError> {
        match self.skills {
            Some(over) => over.apply(Motion::SKILL_CARDS, Section::Skills),
            None => Ok(Motion::SKILL_CARDS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn empty_input_gives_no_nodes() {
        let records: Vec<&str> = vec![];
        assert!(compose(&records, &Motion::PROJECT_CARDS).is_empty());
    }

    #[test]
    fn nodes_keep_input_order() {
        let records = ["first", "second", "third", "fourth"];
        let nodes = compose(&records, &Motion::PROJECT_CARDS);

        assert_eq!(nodes.len(), records.len());
        for (i, node) in nodes.iter().enumerate() {
            assert_eq!(node.index, i);
            assert_eq!(*node.record, records[i]);
        }
    }

    #[test]
    fn three_records_get_base_plus_stride_delays() {
        let motion = Motion {
            stagger: Stagger::new(ms(250), ms(75)).unwrap(),
            ..Motion::PROJECT_CARDS
        };
        let nodes = compose(&[1, 2, 3], &motion);
        let delays: Vec<Duration> = nodes.iter().map(|n| n.transition.delay).collect();

        assert_eq!(delays, vec![ms(250), ms(325), ms(400)]);
    }

    #[test]
    fn delays_strictly_increase() {
        let records: Vec<usize> = (0..40).collect();
        for motion in [Motion::PROJECT_CARDS, Motion::SKILL_CARDS] {
            let nodes = compose(&records, &motion);
            for pair in nodes.windows(2) {
                assert!(pair[0].transition.delay < pair[1].transition.delay);
            }
        }
    }

    #[test]
    fn zero_stride_is_rejected() {
        assert!(Stagger::new(ms(100), Duration::ZERO).is_none());

        let settings = MotionSettings {
            skills: Some(TimingOverride {
                stride_ms: Some(0),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            settings.skills(),
            Err(SiteError::ZeroStride {
                section: Section::Skills
            })
        );
        assert!(settings.projects().is_ok());
    }

    #[test]
    fn override_keeps_unset_preset_fields() {
        let settings = MotionSettings {
            projects: Some(TimingOverride {
                base_delay_ms: Some(400),
                ..Default::default()
            }),
            ..Default::default()
        };
        let motion = settings.projects().unwrap();

        assert_eq!(motion.stagger.base(), ms(400));
        assert_eq!(motion.stagger.stride(), ms(100));
        assert_eq!(motion.duration, ms(500));
        assert_eq!(motion.entrance, Entrance::Rise { offset_px: 20 });
    }

    #[test]
    fn rise_css_carries_offset_and_delay() {
        let css = Motion::PROJECT_CARDS.transition_at(2).css();
        assert_eq!(
            css,
            "animation: fade-up 500ms ease-out 200ms both; --rise-from: 20px"
        );
    }

    #[test]
    fn skill_css_appends_float_loop() {
        let css = Motion::SKILL_CARDS.transition_at(3).css();
        assert_eq!(
            css,
            "animation: scale-in 300ms ease-out 150ms both, \
             float 3000ms ease-in-out 600ms infinite; --scale-from: 0.9"
        );
    }

    #[test]
    fn checked_entrances_must_move() {
        assert_eq!(Entrance::rise(0), None);
        assert_eq!(Entrance::rise(12), Some(Entrance::Rise { offset_px: 12 }));
        assert_eq!(Entrance::grow(1.0), None);
        assert_eq!(Entrance::grow(1.5), None);
        assert_eq!(Entrance::grow(f32::NAN), None);
        assert_eq!(Entrance::grow(0.8), Some(Entrance::Grow { from: 0.8 }));
    }

    #[test]
    fn presets_satisfy_checked_entrances() {
        assert_eq!(Entrance::rise(20), Some(Motion::PROJECT_CARDS.entrance));
        assert_eq!(Entrance::grow(0.9), Some(Motion::SKILL_CARDS.entrance));
    }

    #[test]
    fn fade_css_has_no_custom_property() {
        let t = Transition::new(Entrance::Fade, ms(300), ms(500));
        assert_eq!(t.css(), "animation: fade-in 500ms ease-out 300ms both");
    }
}
