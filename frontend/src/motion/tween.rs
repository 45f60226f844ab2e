use super::ease::Ease;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl VisualState {
    pub const VISIBLE: VisualState = VisualState { x: 0.0, y: 0.0, scale: 1.0, opacity: 1.0 };

    pub const fn rise_from(y: f64) -> Self {
        VisualState { x: 0.0, y, scale: 1.0, opacity: 0.0 }
    }

    pub const fn slide_from(x: f64) -> Self {
        VisualState { x, y: 0.0, scale: 1.0, opacity: 0.0 }
    }

    pub const fn grow_from(scale: f64) -> Self {
        VisualState { x: 0.0, y: 0.0, scale, opacity: 0.0 }
    }

    pub const fn offset(x: f64, y: f64) -> Self {
        VisualState { x, y, scale: 1.0, opacity: 1.0 }
    }

    pub fn lerp(self, to: VisualState, t: f64) -> VisualState {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            opacity: mix(self.opacity, to.opacity),
        }
    }

    pub fn transform_css(&self) -> String {
        format!("translate({:.2}px, {:.2}px) scale({:.4})", self.x, self.y, self.scale)
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity)
    }

    pub fn style_attr(&self) -> String {
        format!("transform: {}; opacity: {};", self.transform_css(), self.opacity_css())
    }
}

/// Inline properties a player writes. Offset-only motion leaves opacity to
/// the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channels {
    All,
    TransformOnly,
}

impl Channels {
    pub fn properties(self, state: &VisualState) -> Vec<(&'static str, String)> {
        let mut properties = vec![("transform", state.transform_css())];
        if self == Channels::All {
            properties.push(("opacity", state.opacity_css()));
        }
        properties
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl TweenSpec {
    pub const fn new(duration: f64, ease: Ease) -> Self {
        TweenSpec { duration, delay: 0.0, ease }
    }

    pub const fn delayed(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

#[derive(Clone, Debug)]
struct Tween {
    from: VisualState,
    to: VisualState,
    spec: TweenSpec,
    repeat: Repeat,
    yoyo: bool,
    started_at: f64,
}

impl Tween {
    fn sample(&self, now: f64) -> (VisualState, bool) {
        let elapsed = (now - self.started_at) / 1000.0 - self.spec.delay;
        if elapsed < 0.0 {
            return (self.from, false);
        }
        if self.spec.duration <= 0.0 {
            return (self.to, true);
        }
        let cycles = elapsed / self.spec.duration;
        match self.repeat {
            Repeat::Once if cycles >= 1.0 => (self.to, true),
            Repeat::Once => (self.from.lerp(self.to, self.spec.ease.apply(cycles)), false),
            Repeat::Forever => {
                let mut progress = cycles.fract();
                if self.yoyo && (cycles.floor() as u64) % 2 == 1 {
                    progress = 1.0 - progress;
                }
                (self.from.lerp(self.to, self.spec.ease.apply(progress)), false)
            }
        }
    }
}

/// Owns the visual state of a single element.
///
/// Starting a new tween while one is in flight interrupts it: the new tween
/// begins from wherever the element is at that instant, so the last call
/// always decides where the element ends up.
///
/// `now` is in milliseconds, durations and delays in seconds.
#[derive(Clone, Debug)]
pub struct Player {
    current: VisualState,
    active: Option<Tween>,
}

impl Player {
    pub fn new(initial: VisualState) -> Self {
        Player { current: initial, active: None }
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn set(&mut self, state: VisualState) {
        self.active = None;
        self.current = state;
    }

    pub fn to(&mut self, target: VisualState, spec: TweenSpec, now: f64) {
        self.start(target, spec, Repeat::Once, false, now);
    }

    pub fn repeat(&mut self, target: VisualState, spec: TweenSpec, yoyo: bool, now: f64) {
        self.start(target, spec, Repeat::Forever, yoyo, now);
    }

    fn start(&mut self, to: VisualState, spec: TweenSpec, repeat: Repeat, yoyo: bool, now: f64) {
        self.tick(now);
        self.active = Some(Tween {
            from: self.current,
            to,
            spec,
            repeat,
            yoyo,
            started_at: now,
        });
    }

    pub fn tick(&mut self, now: f64) -> VisualState {
        if let Some(tween) = &self.active {
            let (state, finished) = tween.sample(now);
            self.current = state;
            if finished {
                self.active = None;
            }
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn finished_tween_lands_exactly_on_target() {
        let mut player = Player::new(VisualState::rise_from(30.0));
        player.to(VisualState::VISIBLE, TweenSpec::new(1.0, Ease::Power3Out), 0.0);
        assert!(player.is_animating());

        let midway = player.tick(500.0);
        assert!(midway.y > 0.0 && midway.y < 30.0);
        assert!(midway.opacity > 0.0 && midway.opacity < 1.0);

        assert_eq!(player.tick(1000.0), VisualState::VISIBLE);
        assert!(!player.is_animating());
    }

    #[test]
    fn delay_holds_the_starting_state() {
        let start = VisualState::slide_from(60.0);
        let mut player = Player::new(start);
        player.to(VisualState::VISIBLE, TweenSpec::new(1.0, Ease::Linear).delayed(0.5), 0.0);

        assert_eq!(player.tick(499.0), start);
        assert!(close(player.tick(1000.0).x, 30.0));
        assert_eq!(player.tick(1500.0), VisualState::VISIBLE);
    }

    #[test]
    fn interrupting_restarts_from_the_sampled_state() {
        let mut player = Player::new(VisualState::rise_from(40.0));
        player.to(VisualState::VISIBLE, TweenSpec::new(1.0, Ease::Linear), 0.0);
        player.tick(250.0);

        player.to(VisualState::rise_from(40.0), TweenSpec::new(0.5, Ease::Linear), 500.0);
        // Picked up at the half-way point of the first tween.
        let resumed = player.tick(500.0);
        assert!(close(resumed.y, 20.0));
        assert!(close(resumed.opacity, 0.5));

        assert_eq!(player.tick(1000.0), VisualState::rise_from(40.0));
    }

    #[test]
    fn floating_offsets_never_write_opacity() {
        let mut player = Player::new(VisualState::VISIBLE);
        player.repeat(VisualState::offset(20.0, -30.0), TweenSpec::new(6.0, Ease::SineInOut), true, 0.0);
        let state = player.tick(1500.0);

        let written = Channels::TransformOnly.properties(&state);
        assert_eq!(written.len(), 1);
        assert_eq!(written[0], ("transform", state.transform_css()));
        assert!(Channels::All.properties(&state).iter().any(|(name, _)| *name == "opacity"));
    }

    #[test]
    fn set_cancels_the_running_tween() {
        let mut player = Player::new(VisualState::VISIBLE);
        player.to(VisualState::grow_from(0.8), TweenSpec::new(1.0, Ease::Linear), 0.0);
        player.set(VisualState::offset(4.0, 2.0));
        assert!(!player.is_animating());
        assert_eq!(player.tick(5000.0), VisualState::offset(4.0, 2.0));
    }

    #[test]
    fn yoyo_loops_back_and_forth_without_finishing() {
        let mut player = Player::new(VisualState::VISIBLE);
        let target = VisualState::offset(20.0, -30.0);
        player.repeat(target, TweenSpec::new(2.0, Ease::Linear), true, 0.0);

        assert!(close(player.tick(1000.0).x, 10.0));
        assert!(close(player.tick(2000.0).y, -30.0));
        assert!(close(player.tick(3000.0).x, 10.0));
        assert!(close(player.tick(4000.0).x, 0.0));
        assert!(player.is_animating());
    }

    #[test]
    fn plain_repeat_wraps_to_the_start() {
        let mut player = Player::new(VisualState::VISIBLE);
        player.repeat(VisualState::offset(-100.0, 0.0), TweenSpec::new(4.0, Ease::Linear), false, 0.0);
        assert!(close(player.tick(1000.0).x, -25.0));
        assert!(close(player.tick(5000.0).x, -25.0));
    }

    #[test]
    fn css_rendering() {
        let state = VisualState { x: 1.5, y: -2.0, scale: 0.8, opacity: 0.25 };
        assert_eq!(state.transform_css(), "translate(1.50px, -2.00px) scale(0.8000)");
        assert_eq!(state.opacity_css(), "0.2500");
    }
}
