use super::ease::Ease;

pub const COUNT_DURATION: f64 = 2.0;

pub fn parse_target(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim).filter(|raw| !raw.is_empty())?.parse().ok()
}

#[derive(Clone, Debug)]
pub struct Counter {
    from: i64,
    target: i64,
    duration: f64,
    started_at: Option<f64>,
}

impl Counter {
    pub fn new(from: i64, target: i64) -> Self {
        Counter { from, target, duration: COUNT_DURATION, started_at: None }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn begin(&mut self, now: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.started_at
            .map(|start| (now - start) / 1000.0 >= self.duration)
            .unwrap_or(false)
    }

    pub fn value_at(&self, now: f64) -> i64 {
        let Some(start) = self.started_at else {
            return self.from;
        };
        let progress = Ease::Power2Out.apply((now - start) / 1000.0 / self.duration);
        let value = self.from as f64 + (self.target - self.from) as f64 * progress;
        value.round() as i64
    }
}
