use super::ease::Ease;
use super::trigger::TriggerConfig;
use super::tween::{TweenSpec, VisualState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaggerPreset {
    Service,
    Partner,
    Stat,
    Contact,
    Footer,
    SplitChar,
}

impl StaggerPreset {
    pub fn from_state(self) -> VisualState {
        match self {
            StaggerPreset::Service => VisualState::rise_from(60.0),
            StaggerPreset::Partner => VisualState::grow_from(0.8),
            StaggerPreset::Stat | StaggerPreset::SplitChar => VisualState::rise_from(40.0),
            StaggerPreset::Contact => VisualState::slide_from(-40.0),
            StaggerPreset::Footer => VisualState::rise_from(30.0),
        }
    }

    fn duration(self) -> f64 {
        match self {
            StaggerPreset::Service | StaggerPreset::Stat | StaggerPreset::Footer => 0.8,
            StaggerPreset::Partner => 0.5,
            StaggerPreset::Contact | StaggerPreset::SplitChar => 0.6,
        }
    }

    pub fn step(self) -> f64 {
        match self {
            StaggerPreset::Service | StaggerPreset::Contact | StaggerPreset::Footer => 0.1,
            StaggerPreset::Partner => 0.03,
            StaggerPreset::Stat => 0.15,
            StaggerPreset::SplitChar => 0.02,
        }
    }

    fn ease(self) -> Ease {
        match self {
            StaggerPreset::Partner | StaggerPreset::Stat | StaggerPreset::SplitChar => Ease::BACK_OUT,
            _ => Ease::Power3Out,
        }
    }

    pub fn trigger(self) -> TriggerConfig {
        match self {
            StaggerPreset::Partner => TriggerConfig::once_at(0.9),
            _ => TriggerConfig::once_at(0.85),
        }
    }

    pub fn spec(self, index: usize) -> TweenSpec {
        TweenSpec::new(self.duration(), self.ease()).delayed(self.step() * index as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_grows_linearly_with_index() {
        for preset in [StaggerPreset::Service, StaggerPreset::Partner, StaggerPreset::Stat, StaggerPreset::SplitChar] {
            assert_eq!(preset.spec(0).delay, 0.0);
            for index in 1..6 {
                let expected = preset.step() * index as f64;
                assert!((preset.spec(index).delay - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn stagger_entrances_play_once() {
        for preset in [StaggerPreset::Service, StaggerPreset::Contact, StaggerPreset::Footer] {
            assert!(preset.trigger().once);
            assert_eq!(preset.trigger().start, 0.85);
        }
        assert_eq!(StaggerPreset::Partner.trigger().start, 0.9);
    }

    #[test]
    fn every_preset_starts_transparent() {
        for preset in [
            StaggerPreset::Service,
            StaggerPreset::Partner,
            StaggerPreset::Stat,
            StaggerPreset::Contact,
            StaggerPreset::Footer,
            StaggerPreset::SplitChar,
        ] {
            assert_eq!(preset.from_state().opacity, 0.0);
        }
    }
}
