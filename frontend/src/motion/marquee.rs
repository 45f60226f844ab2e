use super::ease::Ease;
use super::tween::{TweenSpec, VisualState};

pub fn duplicate<T: Clone>(items: &[T]) -> Vec<T> {
    let mut track = Vec::with_capacity(items.len() * 2);
    track.extend_from_slice(items);
    track.extend_from_slice(items);
    track
}

pub fn loop_distance(track_scroll_width: f64) -> f64 {
    track_scroll_width / 2.0
}

pub fn loop_target(track_scroll_width: f64) -> VisualState {
    VisualState::offset(-loop_distance(track_scroll_width), 0.0)
}

pub fn loop_spec(seconds: f64) -> TweenSpec {
    TweenSpec::new(seconds, Ease::Linear)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::tween::Player;

    #[test]
    fn track_holds_exactly_two_copies() {
        let logos = ["alpha", "beta", "gamma"];
        let track = duplicate(&logos);
        assert_eq!(track.len(), logos.len() * 2);
        assert_eq!(&track[..3], &logos);
        assert_eq!(&track[3..], &logos);
        assert!(duplicate::<u8>(&[]).is_empty());
    }

    #[test]
    fn travels_one_copy_at_constant_speed() {
        assert_eq!(loop_distance(2400.0), 1200.0);

        let mut player = Player::new(VisualState::VISIBLE);
        player.repeat(loop_target(2400.0), loop_spec(40.0), false, 0.0);
        assert!((player.tick(10_000.0).x - -300.0).abs() < 1e-9);
        assert!((player.tick(20_000.0).x - -600.0).abs() < 1e-9);
        // Wraps seamlessly onto the second copy.
        assert!((player.tick(50_000.0).x - -300.0).abs() < 1e-9);
        assert!(player.is_animating());
    }
}
