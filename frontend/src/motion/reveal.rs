use super::ease::Ease;
use super::trigger::TriggerEvent;
use super::tween::{Player, TweenSpec, VisualState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealVariant {
    FadeUp,
    SlideLeft,
    SlideRight,
    Scale,
}

pub const EXIT: TweenSpec = TweenSpec::new(0.6, Ease::Power3In);

impl RevealVariant {
    pub fn hidden(self) -> VisualState {
        match self {
            RevealVariant::FadeUp => VisualState::rise_from(30.0),
            RevealVariant::SlideLeft => VisualState::slide_from(-40.0),
            RevealVariant::SlideRight => VisualState::slide_from(40.0),
            RevealVariant::Scale => VisualState::grow_from(0.8),
        }
    }

    pub fn entrance(self) -> TweenSpec {
        match self {
            RevealVariant::Scale => TweenSpec::new(1.0, Ease::BACK_OUT),
            _ => TweenSpec::new(1.0, Ease::Power3Out),
        }
    }

    pub fn for_event(self, event: TriggerEvent) -> (VisualState, TweenSpec) {
        match event {
            TriggerEvent::Enter | TriggerEvent::EnterBack => (VisualState::VISIBLE, self.entrance()),
            TriggerEvent::Leave | TriggerEvent::LeaveBack => (self.hidden(), EXIT),
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            RevealVariant::FadeUp => "reveal",
            RevealVariant::SlideLeft => "reveal-left",
            RevealVariant::SlideRight => "reveal-right",
            RevealVariant::Scale => "reveal-scale",
        }
    }

    pub fn play(self, player: &mut Player, event: TriggerEvent, now: f64) {
        let (target, spec) = self.for_event(event);
        player.to(target, spec, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::trigger::{ScrollTrigger, TriggerConfig};

    const VARIANTS: [RevealVariant; 4] = [
        RevealVariant::FadeUp,
        RevealVariant::SlideLeft,
        RevealVariant::SlideRight,
        RevealVariant::Scale,
    ];

    // Scrolls the element to `top` at time `now` and lets everything settle.
    fn scroll_to(variant: RevealVariant, trigger: &mut ScrollTrigger, player: &mut Player, top: f64, now: f64) -> VisualState {
        for event in trigger.update(top, top + 300.0, 1000.0) {
            variant.play(player, event, now);
        }
        player.tick(now + 5000.0)
    }

    #[test]
    fn crossing_down_shows_and_crossing_back_hides_exactly() {
        for variant in VARIANTS {
            let mut trigger = ScrollTrigger::new(TriggerConfig::REVEAL);
            let mut player = Player::new(variant.hidden());

            assert_eq!(scroll_to(variant, &mut trigger, &mut player, 800.0, 0.0), VisualState::VISIBLE);
            assert_eq!(scroll_to(variant, &mut trigger, &mut player, 900.0, 10_000.0), variant.hidden());
        }
    }

    #[test]
    fn repeated_rapid_crossings_end_on_the_last_direction() {
        for variant in VARIANTS {
            let mut trigger = ScrollTrigger::new(TriggerConfig::REVEAL);
            let mut player = Player::new(variant.hidden());
            let mut now = 0.0;
            for _ in 0..5 {
                for top in [800.0, 900.0] {
                    for event in trigger.update(top, top + 300.0, 1000.0) {
                        variant.play(&mut player, event, now);
                    }
                    now += 50.0;
                    player.tick(now);
                }
            }
            for event in trigger.update(700.0, 1000.0, 1000.0) {
                variant.play(&mut player, event, now);
            }
            assert_eq!(player.tick(now + 2000.0), VisualState::VISIBLE);
        }
    }

    #[test]
    fn scrolling_past_the_end_line_hides_and_coming_back_shows() {
        let variant = RevealVariant::SlideRight;
        let mut trigger = ScrollTrigger::new(TriggerConfig::REVEAL);
        let mut player = Player::new(variant.hidden());
        scroll_to(variant, &mut trigger, &mut player, 500.0, 0.0);
        assert_eq!(scroll_to(variant, &mut trigger, &mut player, -600.0, 10_000.0), variant.hidden());
        assert_eq!(scroll_to(variant, &mut trigger, &mut player, -100.0, 20_000.0), VisualState::VISIBLE);
    }

    #[test]
    fn variants_differ_only_in_offset_axis_and_scale() {
        assert_eq!(RevealVariant::FadeUp.hidden().y, 30.0);
        assert_eq!(RevealVariant::SlideLeft.hidden().x, -40.0);
        assert_eq!(RevealVariant::SlideRight.hidden().x, 40.0);
        assert_eq!(RevealVariant::Scale.hidden().scale, 0.8);
        for variant in VARIANTS {
            assert_eq!(variant.hidden().opacity, 0.0);
            assert_eq!(variant.entrance().duration, 1.0);
            assert_eq!(variant.for_event(TriggerEvent::Leave).1, EXIT);
        }
    }
}
