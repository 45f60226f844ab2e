use super::ease::Ease;
use super::tween::{TweenSpec, VisualState};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    AfterPrevious,
    /// Starts this many seconds before the current end ("-=0.4").
    Overlap(f64),
    At(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    pub from: VisualState,
    pub spec: TweenSpec,
}

#[derive(Clone, Debug)]
struct Step<K> {
    key: K,
    from: VisualState,
    start: f64,
    duration: f64,
    stagger: f64,
    count: usize,
}

#[derive(Clone, Debug)]
pub struct Timeline<K> {
    ease: Ease,
    steps: Vec<Step<K>>,
    end: f64,
}

impl<K: Copy + PartialEq> Timeline<K> {
    pub fn new(ease: Ease) -> Self {
        Timeline { ease, steps: Vec::new(), end: 0.0 }
    }

    pub fn from(self, key: K, from: VisualState, duration: f64, position: Position) -> Self {
        self.from_staggered(key, from, duration, 0.0, 1, position)
    }

    pub fn from_staggered(
        mut self,
        key: K,
        from: VisualState,
        duration: f64,
        stagger: f64,
        count: usize,
        position: Position,
    ) -> Self {
        let start = match position {
            Position::AfterPrevious => self.end,
            Position::Overlap(seconds) => (self.end - seconds).max(0.0),
            Position::At(seconds) => seconds.max(0.0),
        };
        let tail = stagger * count.saturating_sub(1) as f64;
        self.end = self.end.max(start + duration + tail);
        self.steps.push(Step { key, from, start, duration, stagger, count });
        self
    }

    pub fn cue(&self, key: K, index: usize) -> Option<Cue> {
        let step = self.steps.iter().find(|step| step.key == key)?;
        if index >= step.count {
            return None;
        }
        let spec = TweenSpec::new(step.duration, self.ease).delayed(step.start + step.stagger * index as f64);
        Some(Cue { from: step.from, spec })
    }

    pub fn duration(&self) -> f64 {
        self.end
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroPart {
    Badge,
    Title,
    Lead,
    Button,
    Stat,
    Visual,
}

pub fn hero_timeline(buttons: usize, stats: usize) -> Timeline<HeroPart> {
    Timeline::new(Ease::Power3Out)
        .from(HeroPart::Badge, VisualState::rise_from(30.0), 0.8, Position::AfterPrevious)
        .from(HeroPart::Title, VisualState::rise_from(60.0), 1.2, Position::Overlap(0.4))
        .from(HeroPart::Lead, VisualState::rise_from(40.0), 1.0, Position::Overlap(0.6))
        .from_staggered(HeroPart::Button, VisualState::rise_from(30.0), 0.8, 0.15, buttons, Position::Overlap(0.5))
        .from_staggered(HeroPart::Stat, VisualState::rise_from(30.0), 0.8, 0.1, stats, Position::Overlap(0.4))
        .from(HeroPart::Visual, VisualState::slide_from(60.0), 1.2, Position::Overlap(1.0))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderPart {
    Breadcrumb,
    Title,
    Lead,
}

pub fn page_header_timeline() -> Timeline<HeaderPart> {
    Timeline::new(Ease::Power3Out)
        .from(HeaderPart::Breadcrumb, VisualState::rise_from(20.0), 0.6, Position::At(0.0))
        .from(HeaderPart::Title, VisualState::rise_from(40.0), 1.0, Position::Overlap(0.3))
        .from(HeaderPart::Lead, VisualState::rise_from(30.0), 0.8, Position::Overlap(0.4))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delay_of<K: Copy + PartialEq>(timeline: &Timeline<K>, key: K, index: usize) -> f64 {
        timeline.cue(key, index).map(|cue| cue.spec.delay).unwrap_or(f64::NAN)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hero_steps_cascade_with_overlaps() {
        let timeline = hero_timeline(2, 3);
        assert!(close(delay_of(&timeline, HeroPart::Badge, 0), 0.0));
        assert!(close(delay_of(&timeline, HeroPart::Title, 0), 0.4));
        assert!(close(delay_of(&timeline, HeroPart::Lead, 0), 1.0));
        assert!(close(delay_of(&timeline, HeroPart::Button, 0), 1.5));
        assert!(close(delay_of(&timeline, HeroPart::Button, 1), 1.65));
        assert!(close(delay_of(&timeline, HeroPart::Stat, 0), 2.05));
        assert!(close(delay_of(&timeline, HeroPart::Stat, 2), 2.25));
        assert!(close(delay_of(&timeline, HeroPart::Visual, 0), 2.05));
        assert!(close(timeline.duration(), 3.25));
    }

    #[test]
    fn later_steps_start_before_earlier_ones_finish() {
        let timeline = hero_timeline(2, 3);
        let badge = timeline.cue(HeroPart::Badge, 0).unwrap();
        let title = timeline.cue(HeroPart::Title, 0).unwrap();
        assert!(title.spec.delay < badge.spec.delay + badge.spec.duration);
    }

    #[test]
    fn cues_carry_start_state_and_default_ease() {
        let timeline = hero_timeline(1, 1);
        let visual = timeline.cue(HeroPart::Visual, 0).unwrap();
        assert_eq!(visual.from, VisualState::slide_from(60.0));
        assert_eq!(visual.spec.ease, Ease::Power3Out);
        assert!(close(visual.spec.duration, 1.2));
    }

    #[test]
    fn out_of_range_index_or_unknown_key_has_no_cue() {
        let timeline = hero_timeline(2, 0);
        assert!(timeline.cue(HeroPart::Button, 2).is_none());
        assert!(timeline.cue(HeroPart::Stat, 0).is_none());

        let partial = Timeline::new(Ease::Linear).from(HeaderPart::Title, VisualState::VISIBLE, 1.0, Position::At(0.0));
        assert!(partial.cue(HeaderPart::Lead, 0).is_none());
    }

    #[test]
    fn page_header_sequence() {
        let timeline = page_header_timeline();
        assert!(close(delay_of(&timeline, HeaderPart::Breadcrumb, 0), 0.0));
        assert!(close(delay_of(&timeline, HeaderPart::Title, 0), 0.3));
        assert!(close(delay_of(&timeline, HeaderPart::Lead, 0), 0.9));
        assert!(close(timeline.duration(), 1.7));
    }

    #[test]
    fn sequences_are_deterministic() {
        let a = hero_timeline(2, 3);
        let b = hero_timeline(2, 3);
        for part in [HeroPart::Badge, HeroPart::Title, HeroPart::Lead, HeroPart::Visual] {
            assert_eq!(a.cue(part, 0), b.cue(part, 0));
        }
    }
}
