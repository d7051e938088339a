//! Before/after comparison slider: drag state, click-to-jump and eased animation.
//!
//! Everything here is plain data. The component feeds in pointer input and frame
//! timestamps; the divider offset and the overlay clip are both derived from the
//! single `position`, so they cannot drift apart.

use std::rc::Rc;

use yew::functional::Reducible;

pub const ANIMATION_DURATION_MS: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Down,
    Move,
    Up,
}

/// Where the pointer event originated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Divider,
    Container,
    Elsewhere,
}

/// Mouse and touch input reduced to the fields the slider cares about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub pointer_id: Option<i32>,
    pub x: f64,
    pub y: f64,
    pub phase: Phase,
    pub target: HitTarget,
}

/// Horizontal extent of the slider container in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

impl Bounds {
    /// Percentage of `x` across the container, clamped to [0, 100]. `None` when the
    /// container has no width (e.g. hidden).
    pub fn percent_at(&self, x: f64) -> Option<f64> {
        if self.width <= 0.0 || !self.width.is_finite() || !x.is_finite() {
            return None;
        }
        Some(clamp_percent((x - self.left) / self.width * 100.0))
    }
}

pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    position: f64,
    dragging: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl SliderState {
    pub fn new(position: f64) -> Self {
        Self {
            position: clamp_percent(position),
            dragging: false,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn with_position(self, position: f64) -> Self {
        Self {
            position: clamp_percent(position),
            ..self
        }
    }

    pub fn handle_pointer(self, input: PointerInput, bounds: Bounds) -> Self {
        match (input.phase, self.dragging) {
            (Phase::Down, false) if input.target == HitTarget::Divider => Self {
                dragging: true,
                ..self
            },
            (Phase::Move, true) => match bounds.percent_at(input.x) {
                Some(position) => Self { position, ..self },
                None => self,
            },
            (Phase::Up, _) => Self {
                dragging: false,
                ..self
            },
            _ => self,
        }
    }

    /// A click on the container body jumps straight to the clicked offset.
    pub fn handle_click(self, x: f64, target: HitTarget, bounds: Bounds) -> Self {
        if self.dragging || target != HitTarget::Container {
            return self;
        }
        match bounds.percent_at(x) {
            Some(position) => Self { position, ..self },
            None => self,
        }
    }

    pub fn styles(&self) -> SliderStyles {
        SliderStyles {
            divider_left: self.position,
            clip_right_inset: 100.0 - self.position,
        }
    }
}

/// CSS derived from one slider position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderStyles {
    pub divider_left: f64,
    pub clip_right_inset: f64,
}

impl SliderStyles {
    pub fn divider_style(&self) -> String {
        format!("left: {}%;", self.divider_left)
    }

    pub fn overlay_style(&self) -> String {
        format!("clip-path: inset(0 {}% 0 0);", self.clip_right_inset)
    }
}

pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub from: f64,
    pub to: f64,
    pub started_at: f64,
    pub duration_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    pub position: f64,
    pub finished: bool,
}

impl Animation {
    pub fn new(from: f64, to: f64, started_at: f64) -> Self {
        Self {
            from: clamp_percent(from),
            to: clamp_percent(to),
            started_at,
            duration_ms: ANIMATION_DURATION_MS,
        }
    }

    /// Position at clock time `now` (milliseconds, same clock as `started_at`).
    pub fn sample(&self, now: f64) -> AnimationFrame {
        let progress = if self.duration_ms > 0.0 {
            ((now - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return AnimationFrame {
                position: self.to,
                finished: true,
            };
        }
        AnimationFrame {
            position: self.from + (self.to - self.from) * ease_in_out_quad(progress),
            finished: false,
        }
    }
}

pub enum SliderAction {
    Pointer(PointerInput, Bounds),
    Click {
        x: f64,
        target: HitTarget,
        bounds: Bounds,
    },
    SetPosition(f64),
    Reset,
}

impl Reducible for SliderState {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let current = *self;
        let next = match action {
            SliderAction::Pointer(input, bounds) => current.handle_pointer(input, bounds),
            SliderAction::Click { x, target, bounds } => current.handle_click(x, target, bounds),
            SliderAction::SetPosition(position) => current.with_position(position),
            SliderAction::Reset => SliderState::default(),
        };
        if next == current {
            self
        } else {
            Rc::new(next)
        }
    }
}
