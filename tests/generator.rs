mod tests {
    use star_light_engine::generator::{
        Generator, GeneratorParams, rotate, streak, triangle,
    };

    const SPINES: u8 = 12;

    #[test]
    fn test_rotate_full_period_wraps_to_start() {
        let params = GeneratorParams::default();
        // ROTATE_PERIOD = 8, 12 spines: one full revolution every 96 ticks.
        assert_eq!(rotate(0, 0, SPINES, &params), 0);
        assert_eq!(rotate(96, 0, SPINES, &params), 0);
        assert_eq!(rotate(192, 0, SPINES, &params), 0);
    }

    #[test]
    fn test_rotate_spine_offset_proportional_to_index() {
        let params = GeneratorParams::default();
        for spine in 0..SPINES {
            let expected = (u32::from(spine) * 255 / u32::from(SPINES)) % 255;
            assert_eq!(u32::from(rotate(0, spine, SPINES, &params)), expected);
        }
    }

    #[test]
    fn test_rotate_independent_of_position() {
        let params = GeneratorParams::default();
        for tick in [0u32, 7, 96, 1_000_003] {
            for spine in [0u8, 3, 11] {
                let at_zero = Generator::Rotate.sample(tick, spine, 0, SPINES, &params);
                for position in [1u16, 5, 15, 600] {
                    assert_eq!(
                        Generator::Rotate.sample(tick, spine, position, SPINES, &params),
                        at_zero
                    );
                }
            }
        }
    }

    #[test]
    fn test_triangle_peak_and_near_trough() {
        let params = GeneratorParams::default();
        // TRIANGLE_PERIOD = 2: tick 0 is the peak, tick 255 near the trough.
        assert_eq!(triangle(0, &params), 255);
        assert_eq!(triangle(255, &params), 1);
        // Next full period starts over.
        assert_eq!(triangle(510, &params), 255);
    }

    #[test]
    fn test_triangle_independent_of_spine_and_position() {
        let params = GeneratorParams::default();
        for tick in [0u32, 1, 100, 509, 100_000] {
            let global = triangle(tick, &params);
            for spine in [0u8, 4, 11] {
                for position in [0u16, 9, 31] {
                    assert_eq!(
                        Generator::Triangle.sample(tick, spine, position, SPINES, &params),
                        global
                    );
                }
            }
        }
    }

    #[test]
    fn test_streak_negative_offset_is_dark() {
        let params = GeneratorParams::default();
        // offset = 0 - 0 - 1 + 0 = -1: outside the band.
        assert_eq!(streak(0, 0, 0, &params), 0);
    }

    #[test]
    fn test_streak_band_ramp() {
        let params = GeneratorParams::default();
        // At tick 0 on spine 0 the band covers positions 11..=20,
        // ramping from dim to full brightness.
        assert_eq!(streak(0, 0, 10, &params), 0);
        assert_eq!(streak(0, 0, 11, &params), 25);
        assert_eq!(streak(0, 0, 20, &params), 255);
        assert_eq!(streak(0, 0, 21, &params), 0);
    }

    #[test]
    fn test_streak_travels_outward() {
        let params = GeneratorParams::default();
        // One tick later the same brightness sits one light further out.
        for position in 0..40u16 {
            assert_eq!(
                streak(0, 0, position, &params),
                streak(1, 0, position + 1, &params)
            );
        }
    }

    #[test]
    fn test_streak_retriggers_every_cycle() {
        let params = GeneratorParams::default();
        for tick in 0..60u32 {
            for spine in [0u8, 2, 7] {
                for position in 0..35u16 {
                    assert_eq!(
                        streak(tick, spine, position, &params),
                        streak(tick + params.streak_cycle, spine, position, &params),
                        "tick {} spine {} position {}",
                        tick,
                        spine,
                        position
                    );
                }
            }
        }
    }

    #[test]
    fn test_streak_output_never_exceeds_byte_range() {
        // A short cycle relative to the band width stresses the clamp.
        let params = GeneratorParams {
            streak_length: 2,
            streak_cycle: 40,
            ..GeneratorParams::default()
        };
        // band = 39 + 1 - 2 = 38, scaled well past 255 before the clamp.
        assert_eq!(streak(0, 1, 33, &params), 255);
        let mut lit = false;
        for tick in 0..80u32 {
            for position in 0..64u16 {
                let value = streak(tick, 1, position, &params);
                lit |= value == 255;
            }
        }
        assert!(lit, "clamp should still reach full brightness");
    }

    #[test]
    fn test_constant_ignores_all_inputs() {
        let params = GeneratorParams::default();
        for tick in [0u32, 17, 9999] {
            assert_eq!(Generator::Constant(160).sample(tick, 3, 12, SPINES, &params), 160);
        }
    }
}
