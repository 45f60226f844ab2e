#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerConfig {
    pub start: f64,
    pub end: f64,
    pub once: bool,
}

impl TriggerConfig {
    pub const REVEAL: TriggerConfig = TriggerConfig { start: 0.85, end: 0.0, once: false };

    pub const fn once_at(start: f64) -> Self {
        TriggerConfig { start, end: 0.0, once: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Zone {
    Before,
    Active,
    After,
}

#[derive(Clone, Debug)]
pub struct ScrollTrigger {
    config: TriggerConfig,
    zone: Zone,
    spent: bool,
}

impl ScrollTrigger {
    pub fn new(config: TriggerConfig) -> Self {
        ScrollTrigger { config, zone: Zone::Before, spent: false }
    }

    pub fn is_spent(&self) -> bool {
        self.spent
    }

    fn zone_for(&self, top: f64, bottom: f64, viewport_height: f64) -> Zone {
        if top > self.config.start * viewport_height {
            Zone::Before
        } else if bottom < self.config.end * viewport_height {
            Zone::After
        } else {
            Zone::Active
        }
    }

    /// Feeds the element's current viewport-relative `top` and `bottom`.
    /// Returns the crossings since the previous call, in scroll order; a
    /// jump across both lines yields both events.
    pub fn update(&mut self, top: f64, bottom: f64, viewport_height: f64) -> Vec<TriggerEvent> {
        if self.spent {
            return Vec::new();
        }
        let next = self.zone_for(top, bottom, viewport_height);
        let events = match (self.zone, next) {
            (Zone::Before, Zone::Active) => vec![TriggerEvent::Enter],
            (Zone::Before, Zone::After) => vec![TriggerEvent::Enter, TriggerEvent::Leave],
            (Zone::Active, Zone::After) => vec![TriggerEvent::Leave],
            (Zone::After, Zone::Active) => vec![TriggerEvent::EnterBack],
            (Zone::After, Zone::Before) => vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack],
            (Zone::Active, Zone::Before) => vec![TriggerEvent::LeaveBack],
            _ => Vec::new(),
        };
        self.zone = next;

        if self.config.once && events.contains(&TriggerEvent::Enter) {
            self.spent = true;
            return vec![TriggerEvent::Enter];
        }
        events
    }
}

#[derive(Clone, Debug)]
pub struct ScrubTrigger {
    lag: f64,
    target: f64,
    current: f64,
}

impl ScrubTrigger {
    pub fn new(lag: f64) -> Self {
        ScrubTrigger { lag, target: 0.0, current: 0.0 }
    }

    pub fn progress_for(top: f64, height: f64) -> f64 {
        if height <= 0.0 {
            return 0.0;
        }
        (-top / height).clamp(0.0, 1.0)
    }

    pub fn observe(&mut self, top: f64, height: f64) {
        self.target = Self::progress_for(top, height);
    }

    pub fn advance(&mut self, dt: f64) -> f64 {
        if self.lag <= 0.0 {
            self.current = self.target;
        } else {
            let blend = 1.0 - (-4.0 * dt.max(0.0) / self.lag).exp();
            self.current += (self.target - self.current) * blend;
            if (self.target - self.current).abs() < 1e-4 {
                self.current = self.target;
            }
        }
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    // Element 200px tall whose top sits at `top`.
    fn at(trigger: &mut ScrollTrigger, top: f64) -> Vec<TriggerEvent> {
        trigger.update(top, top + 200.0, VH)
    }

    #[test]
    fn start_line_is_eighty_five_percent_of_the_viewport() {
        let mut trigger = ScrollTrigger::new(TriggerConfig::REVEAL);
        assert!(at(&mut trigger, 900.0).is_empty());
        assert!(at(&mut trigger, 851.0).is_empty());
        assert_eq!(at(&mut trigger, 850.0), vec![TriggerEvent::Enter]);
    }

    #[test]
    fn full_round_trip_reports_all_four_crossings() {
        let mut trigger = ScrollTrigger::new(TriggerConfig::REVEAL);
        assert_eq!(at(&mut trigger, 500.0), vec![TriggerEvent::Enter]);
        assert_eq!(at(&mut trigger, -300.0), vec![TriggerEvent::Leave]);
        assert_eq!(at(&mut trigger, -100.0), vec![TriggerEvent::EnterBack]);
        assert_eq!(at(&mut trigger, 950.0), vec![TriggerEvent::LeaveBack]);
    }

    #[test]
    fn staying_in_a_zone_reports_nothing() {
        let mut trigger = ScrollTrigger::new(TriggerConfig::REVEAL);
        at(&mut trigger, 500.0);
        assert!(at(&mut trigger, 400.0).is_empty());
        assert!(at(&mut trigger, 10.0).is_empty());
    }

    #[test]
    fn jumps_over_the_whole_element_emit_both_events() {
        let mut trigger = ScrollTrigger::new(TriggerConfig::REVEAL);
        assert_eq!(at(&mut trigger, -500.0), vec![TriggerEvent::Enter, TriggerEvent::Leave]);
        assert_eq!(at(&mut trigger, 2000.0), vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack]);
    }

    #[test]
    fn once_triggers_fire_a_single_enter() {
        let mut trigger = ScrollTrigger::new(TriggerConfig::once_at(0.85));
        assert_eq!(at(&mut trigger, 500.0), vec![TriggerEvent::Enter]);
        assert!(trigger.is_spent());
        assert!(at(&mut trigger, 950.0).is_empty());
        assert!(at(&mut trigger, 500.0).is_empty());
    }

    #[test]
    fn once_trigger_still_fires_when_loaded_past_the_element() {
        let mut trigger = ScrollTrigger::new(TriggerConfig::once_at(0.85));
        assert_eq!(at(&mut trigger, -1000.0), vec![TriggerEvent::Enter]);
    }

    #[test]
    fn scrub_progress_is_clamped() {
        assert_eq!(ScrubTrigger::progress_for(100.0, 800.0), 0.0);
        assert_eq!(ScrubTrigger::progress_for(-400.0, 800.0), 0.5);
        assert_eq!(ScrubTrigger::progress_for(-1600.0, 800.0), 1.0);
        assert_eq!(ScrubTrigger::progress_for(-10.0, 0.0), 0.0);
    }

    #[test]
    fn scrub_trails_then_settles_on_target() {
        let mut scrub = ScrubTrigger::new(1.0);
        scrub.observe(-800.0, 800.0);
        let first = scrub.advance(0.1);
        assert!(first > 0.0 && first < 1.0);
        for _ in 0..200 {
            scrub.advance(0.016);
        }
        assert!(scrub.is_settled());
        assert_eq!(scrub.advance(0.016), 1.0);
    }
}
