use super::ease::Ease;
use super::tween::{TweenSpec, VisualState};

pub const PULL: f64 = 0.15;

pub const FOLLOW: TweenSpec = TweenSpec::new(0.3, Ease::Power2Out);
pub const RELEASE: TweenSpec = TweenSpec::new(0.5, Ease::ELASTIC_OUT);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

pub fn magnetic_offset(pointer: (f64, f64), bounds: Bounds) -> VisualState {
    let (cx, cy) = bounds.center();
    VisualState::offset((pointer.0 - cx) * PULL, (pointer.1 - cy) * PULL)
}
