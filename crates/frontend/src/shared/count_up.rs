//! Count-up animation core for KPI values.
//!
//! A card settles on text like `"$9.52M"`, `"62.31x"`, `"100.0%"` or
//! `"150"`. [`CountUp`] parses that target back into a number, infers the
//! display unit from the text, then produces one formatted frame per tick
//! until the accumulator reaches the target. The final frame is always the
//! original text verbatim, so rounding drift can never change what the
//! card ends up showing.
//!
//! This module is pure (no DOM); the timer loop lives in
//! [`crate::shared::animate`].

use contracts::units::UnitKind;

/// Number of frames per animation.
pub const STEPS: u32 = 60;
/// Total animation duration.
pub const DURATION_MS: u32 = 2000;
/// Interval between frames (33 ms).
pub const TICK_MS: u32 = DURATION_MS / STEPS;

/// One animation frame. `Done` carries the exact original target text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Running(String),
    Done(String),
}

/// In-flight state for one element's count-up.
#[derive(Debug, Clone)]
pub struct CountUp {
    target_text: String,
    target: f64,
    unit: UnitKind,
    current: f64,
}

impl CountUp {
    /// Builds a counter from the element's final rendered text.
    ///
    /// Returns `None` when the text contains no parseable number; the
    /// caller must then leave the element untouched (silent no-op).
    /// Negative targets also yield `None`: the text already shows the
    /// final value, so the element snaps immediately instead of
    /// animating downward.
    pub fn from_text(text: &str) -> Option<Self> {
        let numeric: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        let target: f64 = numeric.parse().ok()?;
        if target < 0.0 {
            return None;
        }

        Some(Self {
            target_text: text.to_string(),
            target,
            unit: UnitKind::infer(text),
            current: 0.0,
        })
    }

    /// Advances by one step and returns the frame to display.
    ///
    /// After a `Done` frame the counter must not be ticked again.
    pub fn tick(&mut self) -> Frame {
        self.current += self.target / STEPS as f64;

        if self.current >= self.target {
            Frame::Done(self.target_text.clone())
        } else {
            // `current` is in display units (parsed from rendered text),
            // so frames format without rescaling.
            Frame::Running(self.unit.render_display(self.current))
        }
    }

    /// Runs the whole animation eagerly. Test helper; production code
    /// drives ticks from a timer.
    #[cfg(test)]
    fn run_to_end(mut self) -> Vec<Frame> {
        let mut frames = Vec::new();
        loop {
            let frame = self.tick();
            let done = matches!(frame, Frame::Done(_));
            frames.push(frame);
            if done {
                break;
            }
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_value(text: &str) -> f64 {
        let stripped: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        stripped.parse().unwrap()
    }

    #[test]
    fn unparseable_text_is_a_no_op() {
        assert!(CountUp::from_text("N/A").is_none());
        assert!(CountUp::from_text("").is_none());
        assert!(CountUp::from_text("loading…").is_none());
        // stray punctuation that strips to an unparseable remainder
        assert!(CountUp::from_text("..").is_none());
    }

    #[test]
    fn negative_target_snaps_immediately() {
        assert!(CountUp::from_text("-42").is_none());
        assert!(CountUp::from_text("-3.5%").is_none());
    }

    #[test]
    fn final_frame_restores_exact_text() {
        for target in ["$9.52M", "$42K", "62.31x", "100.0%", "150"] {
            let frames = CountUp::from_text(target).unwrap().run_to_end();
            assert_eq!(frames.last(), Some(&Frame::Done(target.to_string())));
        }
    }

    #[test]
    fn runs_roughly_sixty_steps() {
        // float drift may cost one extra tick before the accumulator
        // passes the target
        let frames = CountUp::from_text("$9.52M").unwrap().run_to_end();
        assert!(frames.len() >= STEPS as usize);
        assert!(frames.len() <= STEPS as usize + 1);
        let running = frames
            .iter()
            .filter(|f| matches!(f, Frame::Running(_)))
            .count();
        assert!(running <= STEPS as usize);
    }

    #[test]
    fn intermediate_values_monotonically_nondecreasing() {
        for target in ["$9.52M", "62.31x", "100.0%", "150"] {
            let frames = CountUp::from_text(target).unwrap().run_to_end();
            let values: Vec<f64> = frames
                .iter()
                .map(|f| match f {
                    Frame::Running(s) | Frame::Done(s) => numeric_value(s),
                })
                .collect();
            assert!(
                values.windows(2).all(|w| w[1] >= w[0]),
                "non-monotone frames for {target}: {values:?}"
            );
        }
    }

    #[test]
    fn dollar_millions_frames_keep_unit_format() {
        let mut counter = CountUp::from_text("$9.52M").unwrap();
        match counter.tick() {
            Frame::Running(s) => {
                assert!(s.starts_with('$'), "{s}");
                assert!(s.ends_with('M'), "{s}");
                // first frame is 1/60th of the target
                assert_eq!(s, "$0.16M");
            }
            Frame::Done(_) => panic!("finished on first tick"),
        }
    }

    #[test]
    fn plain_integer_frames_are_floored() {
        let mut counter = CountUp::from_text("150").unwrap();
        // 150 / 60 = 2.5 per step
        assert_eq!(counter.tick(), Frame::Running("2".to_string()));
        assert_eq!(counter.tick(), Frame::Running("5".to_string()));
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut counter = CountUp::from_text("0").unwrap();
        assert_eq!(counter.tick(), Frame::Done("0".to_string()));
    }

    #[test]
    fn thousands_target_finishes_exact() {
        let frames = CountUp::from_text("$42K").unwrap().run_to_end();
        assert_eq!(frames.last(), Some(&Frame::Done("$42K".to_string())));
        // intermediate frames use the $..K form
        assert!(matches!(&frames[0], Frame::Running(s) if s.starts_with('$') && s.ends_with('K')));
    }
}
