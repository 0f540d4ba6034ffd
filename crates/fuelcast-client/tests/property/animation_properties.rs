use std::time::Duration;

use fuelcast_client::{CountUp, NumberFormat};
use proptest::prelude::*;

fn parse_display(text: &str) -> f64 {
    text.replace(',', "").parse().unwrap()
}

proptest! {
    #[test]
    fn values_never_decrease_and_end_exactly(
        end in 0.0f64..10_000_000.0,
        duration_ms in 1u64..5_000,
        mut samples in prop::collection::vec(0u64..6_000, 1..64),
    ) {
        samples.sort_unstable();
        let count_up = CountUp::new(0.0, end, Duration::from_millis(duration_ms));

        let mut last = f64::NEG_INFINITY;
        for ms in samples {
            let frame = count_up.frame(Duration::from_millis(ms));
            prop_assert!(frame.value >= last, "{} < {}", frame.value, last);
            prop_assert!(frame.value <= end);
            prop_assert!((0.0..=1.0).contains(&frame.progress));
            last = frame.value;
        }

        let final_frame = count_up.frame(Duration::from_millis(duration_ms));
        prop_assert!(final_frame.done);
        prop_assert_eq!(final_frame.value, end);
    }

    #[test]
    fn negative_targets_only_count_down(
        end in -1000.0f64..0.0,
        duration_ms in 1u64..5_000,
        mut samples in prop::collection::vec(0u64..6_000, 1..64),
    ) {
        samples.sort_unstable();
        let count_up = CountUp::new(0.0, end, Duration::from_millis(duration_ms));

        let mut last = f64::INFINITY;
        for ms in samples {
            let frame = count_up.frame(Duration::from_millis(ms));
            prop_assert!(frame.value <= last, "{} > {}", frame.value, last);
            prop_assert!(frame.value >= end, "{} passed {}", frame.value, end);
            last = frame.value;
        }

        prop_assert_eq!(count_up.frame(Duration::from_millis(duration_ms)).value, end);
    }

    #[test]
    fn intermediate_values_are_whole_numbers(
        end in 0.0f64..1_000_000.0,
        elapsed in 0u64..999,
    ) {
        let count_up = CountUp::new(0.0, end, Duration::from_millis(1_000));
        let frame = count_up.frame(Duration::from_millis(elapsed));
        prop_assert!(!frame.done);
        prop_assert_eq!(frame.value.fract(), 0.0);
    }

    #[test]
    fn rendered_text_is_monotonic(
        end in 0.0f64..100_000_000.0,
        steps in 2usize..120,
    ) {
        let duration = Duration::from_millis(1_000);
        let count_up = CountUp::new(0.0, end, duration);
        let format = NumberFormat::default();

        let mut last = f64::NEG_INFINITY;
        for i in 0..=steps {
            let elapsed = duration * i as u32 / steps as u32;
            let shown = parse_display(&format.format(count_up.frame(elapsed).value));
            prop_assert!(shown >= last);
            last = shown;
        }
        // Last step lands on the full duration: exact value, rounded only by display precision.
        prop_assert!((last - end).abs() <= 0.0005 + end * f64::EPSILON);
    }
}
