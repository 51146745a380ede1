mod common;

mod tests {
    use std::sync::Arc;
    use std::sync::atomic::Ordering;
    use std::thread;
    use std::time::{Duration, Instant};

    use myrtio_zone_composer::color::BLACK;
    use myrtio_zone_composer::{
        AnimationEngine, AnimationKind, ConfigError, EngineConfig, EngineError, IntervalProfile,
        Rgb, ZoneColorSample, ZoneLayout,
    };

    use crate::common::{FailingSink, RecordingSink, RefusingSampler, manual_audio, manual_screen};

    fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_stop_right_after_start_writes_one_off() {
        let sink = RecordingSink::new();
        let engine = AnimationEngine::new(AnimationKind::Static, sink.clone());
        engine.start().unwrap();
        engine.stop();

        assert_eq!(sink.off_count(), 1);
        assert!(sink.writes().last().is_some_and(|c| c.is_off()));
        assert!(!engine.is_running());
    }

    #[test]
    fn test_double_start_and_stop_are_noops() {
        let sink = RecordingSink::new();
        let engine = AnimationEngine::new(AnimationKind::Breath, sink.clone());
        engine.start().unwrap();
        engine.start().unwrap();
        assert!(engine.is_running());

        engine.stop();
        engine.stop();
        assert_eq!(sink.off_count(), 1);
    }

    #[test]
    fn test_engine_from_toml() {
        let sink = RecordingSink::new();
        let engine = AnimationEngine::from_toml_str(
            "animation = \"chase\"\n[parameters]\nspeed = 0.25\n",
            sink.clone(),
        )
        .unwrap();
        assert_eq!(engine.kind(), AnimationKind::Chase);
        assert!((engine.parameters().speed() - 0.25).abs() < 1e-6);
        assert!(!engine.is_running());

        let err = AnimationEngine::from_toml_str("animation = \"disco\"", sink.clone())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            EngineError::Config(ConfigError::UnknownAnimation(ref name)) if name == "disco"
        ));
        assert!(sink.writes().is_empty());
    }

    #[test]
    fn test_stop_before_start_writes_nothing() {
        let sink = RecordingSink::new();
        let engine = AnimationEngine::new(AnimationKind::Rainbow, sink.clone());
        engine.stop();
        assert!(sink.writes().is_empty());
    }

    #[test]
    fn test_restart_is_a_fresh_instance() {
        let sink = RecordingSink::new();
        let engine = AnimationEngine::new(AnimationKind::Static, sink.clone());
        engine.start().unwrap();
        engine.stop();
        engine.start().unwrap();
        engine.stop();
        assert_eq!(sink.off_count(), 2);
    }

    #[test]
    fn test_drop_stops_running_engine() {
        let sink = RecordingSink::new();
        {
            let engine = AnimationEngine::new(AnimationKind::Pulse, sink.clone());
            engine.start().unwrap();
        }
        assert_eq!(sink.off_count(), 1);
    }

    #[test]
    fn test_stop_from_another_thread() {
        let sink = RecordingSink::new();
        let engine = Arc::new(AnimationEngine::new(AnimationKind::Strobe, sink.clone()));
        engine.start().unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || engine.stop())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(sink.off_count(), 1);
    }

    #[test]
    fn test_static_output_and_live_color_change() {
        let sink = RecordingSink::new();
        let engine = AnimationEngine::new(AnimationKind::Static, sink.clone());
        engine.set_target_color(Rgb::new(255, 0, 0));
        engine.set_target_brightness(128);
        engine.start().unwrap();

        assert!(wait_until(|| sink
            .writes()
            .iter()
            .any(|c| c.color == Rgb::new(128, 0, 0))));

        engine.set_target_color(Rgb::new(0, 255, 0));
        assert!(wait_until(|| sink
            .writes()
            .iter()
            .any(|c| c.color == Rgb::new(0, 128, 0))));
        engine.stop();
    }

    #[test]
    fn test_unsupported_setters_are_noops() {
        let sink = RecordingSink::new();
        let engine = AnimationEngine::new(AnimationKind::Static, sink);
        engine.set_speed(0.9);
        engine.set_sensitivity(0.9);
        engine.set_saturation_boost(0.9);
        let params = engine.parameters();
        assert_eq!(params.speed(), 0.5);
        assert_eq!(params.sensitivity(), 0.5);
        assert_eq!(params.saturation_boost(), 0.0);

        engine.set_target_brightness(1_000);
        assert_eq!(engine.parameters().target_brightness(), 255);
    }

    #[test]
    fn test_failed_sampler_keeps_engine_alive() {
        let sink = RecordingSink::new();
        let sampler = RefusingSampler::new();
        let stops = Arc::clone(&sampler.stops);
        let engine =
            AnimationEngine::new(AnimationKind::Ambilight, sink.clone()).with_screen_sampler(sampler);

        engine.start().unwrap();
        assert!(engine.is_running());
        thread::sleep(Duration::from_millis(50));
        engine.stop();

        assert_eq!(stops.load(Ordering::SeqCst), 0);
        assert_eq!(sink.writes(), vec![myrtio_zone_composer::ZoneCommand::off()]);
    }

    #[test]
    fn test_failing_sink_does_not_stop_engine() {
        let sink = Arc::new(FailingSink::default());
        let engine = AnimationEngine::new(AnimationKind::Rave, sink.clone());
        engine.start().unwrap();
        assert!(wait_until(|| sink.attempts() >= 3));
        assert!(engine.is_running());
        engine.stop();
    }

    #[test]
    fn test_screen_samples_reach_the_sink() {
        let sink = RecordingSink::new();
        let (sampler, feed) = manual_screen();
        let config = EngineConfig {
            animation: AnimationKind::Ambilight,
            layout: ZoneLayout::FourZone,
            profile: IntervalProfile::Unlimited,
            ..EngineConfig::default()
        };
        let engine = AnimationEngine::from_config(config, sink.clone()).with_screen_sampler(sampler);
        engine.start().unwrap();
        assert!(feed.is_started());
        assert_eq!(feed.layout(), Some(ZoneLayout::FourZone));

        let sample = ZoneColorSample::four_zone(
            Rgb::new(200, 0, 0),
            Rgb::new(0, 200, 0),
            Rgb::new(0, 0, 200),
            Rgb::new(200, 200, 200),
        );
        assert!(wait_until(|| {
            feed.push(sample);
            sink.writes().iter().any(|c| !c.is_off() && c.color != BLACK)
        }));

        engine.stop();
        assert!(!feed.is_started());
        assert_eq!(feed.stops(), 1);
        assert!(sink.writes().last().is_some_and(|c| c.is_off()));
    }

    #[test]
    fn test_audio_samples_drive_brightness() {
        let sink = RecordingSink::new();
        let (sampler, feed) = manual_audio();
        let engine = AnimationEngine::new(AnimationKind::AudioReactive, sink.clone())
            .with_audio_sampler(sampler);
        engine.set_target_color(Rgb::new(255, 0, 0));
        engine.set_sensitivity(1.0);
        engine.start().unwrap();

        assert!(wait_until(|| {
            feed.push(1.0);
            sink.writes().iter().any(|c| c.color.r > 0)
        }));
        engine.stop();
        assert_eq!(feed.stops(), 1);
    }

    #[test]
    fn test_procedural_kinds_leave_samplers_idle() {
        let sink = RecordingSink::new();
        let (screen, screen_feed) = manual_screen();
        let (audio, audio_feed) = manual_audio();
        let engine = AnimationEngine::new(AnimationKind::Chase, sink)
            .with_screen_sampler(screen)
            .with_audio_sampler(audio);
        engine.start().unwrap();
        engine.stop();

        assert_eq!(screen_feed.starts(), 0);
        assert_eq!(audio_feed.starts(), 0);
        assert_eq!(screen_feed.stops(), 0);
    }
}
