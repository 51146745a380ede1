mod common;

mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_zone_composer::color::BLACK;
    use myrtio_zone_composer::intent::submit_intent;
    use myrtio_zone_composer::rate_limit::DEFAULT_MIN_INTERVAL;
    use myrtio_zone_composer::{
        AnimationKind, AnimationParameters, FrameScheduler, IntentChannel, IntentSender,
        IntervalProfile, ParameterIntent, RateLimiter, Renderer, Rgb, ZoneColorSample,
        ZoneLayout, ZoneMask, sample_bridge,
    };

    use crate::common::RecordingSink;

    fn scheduler(
        kind: AnimationKind,
        params: AnimationParameters,
        sink: &std::sync::Arc<RecordingSink>,
    ) -> (FrameScheduler, IntentSender) {
        let (sender, receiver) = IntentChannel::new().split();
        let renderer = Renderer::new(RateLimiter::new(sink.clone(), DEFAULT_MIN_INTERVAL));
        let scheduler = FrameScheduler::new(
            kind,
            ZoneLayout::TwoZone,
            IntervalProfile::High,
            params,
            receiver,
            renderer,
        );
        (scheduler, sender)
    }

    #[test]
    fn test_static_renders_once_while_unchanged() {
        let sink = RecordingSink::new();
        let params = AnimationParameters::new()
            .with_target_color(Rgb::new(255, 0, 0))
            .with_target_brightness(128);
        let (mut scheduler, _intents) = scheduler(AnimationKind::Static, params, &sink);

        assert!(scheduler.tick(Instant::from_millis(0)).rendered);
        for step in 1..10 {
            assert!(!scheduler.tick(Instant::from_millis(step * 30)).rendered);
        }

        let writes = sink.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].mask, ZoneMask::ALL);
        assert_eq!(writes[0].color, Rgb::new(128, 0, 0));
        assert_eq!(writes[0].brightness, 255);
    }

    #[test]
    fn test_intents_apply_before_update() {
        let sink = RecordingSink::new();
        let (mut scheduler, intents) =
            scheduler(AnimationKind::Static, AnimationParameters::new(), &sink);

        scheduler.tick(Instant::from_millis(0));
        submit_intent(&intents, ParameterIntent::TargetColor(Rgb::new(0, 0, 255)));
        submit_intent(&intents, ParameterIntent::TargetBrightness(255));
        assert!(scheduler.tick(Instant::from_millis(30)).rendered);

        assert_eq!(scheduler.params().target_color(), Rgb::new(0, 0, 255));
        assert_eq!(sink.writes().last().map(|c| c.color), Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn test_unsupported_intent_does_not_reach_params() {
        let sink = RecordingSink::new();
        let (mut scheduler, intents) =
            scheduler(AnimationKind::Rainbow, AnimationParameters::new(), &sink);
        submit_intent(&intents, ParameterIntent::Sensitivity(0.9));
        scheduler.tick(Instant::from_millis(0));
        assert_eq!(scheduler.params().sensitivity(), 0.5);
    }

    #[test]
    fn test_samples_are_consumed_once() {
        let sink = RecordingSink::new();
        let (scheduler, _intents) =
            scheduler(AnimationKind::Ambilight, AnimationParameters::new(), &sink);
        let (publisher, receiver) = sample_bridge::<ZoneColorSample>();
        let mut scheduler = scheduler.with_color_samples(receiver);

        assert!(!scheduler.tick(Instant::from_millis(0)).rendered);

        publisher.publish(ZoneColorSample::two_zone(
            Rgb::new(100, 0, 0),
            Rgb::new(0, 100, 0),
        ));
        assert!(scheduler.tick(Instant::from_millis(33)).rendered);
        assert!(!scheduler.tick(Instant::from_millis(66)).rendered);

        let writes = sink.writes();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].mask, ZoneMask::LEFT);
        assert_eq!(writes[1].mask, ZoneMask::RIGHT);
    }

    #[test]
    fn test_black_sample_renders_black_next_tick() {
        let sink = RecordingSink::new();
        let (scheduler, _intents) =
            scheduler(AnimationKind::Ambilight, AnimationParameters::new(), &sink);
        let (publisher, receiver) = sample_bridge::<ZoneColorSample>();
        let mut scheduler = scheduler.with_color_samples(receiver);

        let lit = ZoneColorSample::two_zone(Rgb::new(250, 250, 250), Rgb::new(250, 250, 250));
        for step in 0..5 {
            publisher.publish(lit);
            scheduler.tick(Instant::from_millis(step * 33));
        }
        publisher.publish(ZoneColorSample::two_zone(BLACK, Rgb::new(250, 250, 250)));
        scheduler.tick(Instant::from_millis(200));

        let left = sink
            .writes()
            .into_iter()
            .rev()
            .find(|c| c.mask == ZoneMask::LEFT)
            .map(|c| c.color);
        assert_eq!(left, Some(BLACK));
    }

    #[test]
    fn test_tick_timing_follows_variant_delay() {
        let sink = RecordingSink::new();
        let (mut scheduler, _intents) = scheduler(
            AnimationKind::Chase,
            AnimationParameters::new().with_speed(0.0),
            &sink,
        );
        let result = scheduler.tick(Instant::from_millis(1_000));
        assert_eq!(result.sleep_duration, Duration::from_millis(150));
        assert_eq!(result.next_deadline, Instant::from_millis(1_150));

        let result = scheduler.tick(Instant::from_millis(1_150));
        assert_eq!(result.next_deadline, Instant::from_millis(1_300));

        // Far behind: resynchronize instead of bursting
        let result = scheduler.tick(Instant::from_millis(5_000));
        assert_eq!(result.next_deadline, Instant::from_millis(5_150));
    }

    #[test]
    fn test_reactive_tick_uses_profile_interval() {
        let sink = RecordingSink::new();
        let (mut scheduler, _intents) =
            scheduler(AnimationKind::AudioReactive, AnimationParameters::new(), &sink);
        let result = scheduler.tick(Instant::from_millis(1_000));
        assert_eq!(result.sleep_duration, Duration::from_millis(33));
    }

    #[test]
    fn test_shutdown_writes_single_off() {
        let sink = RecordingSink::new();
        let (mut scheduler, _intents) =
            scheduler(AnimationKind::Breath, AnimationParameters::new(), &sink);
        for step in 0..5 {
            scheduler.tick(Instant::from_millis(step * 30));
        }
        scheduler.shutdown(Instant::from_millis(200));

        assert_eq!(sink.off_count(), 1);
        assert!(sink.writes().last().is_some_and(|c| c.is_off()));
        assert_eq!(scheduler.ticks(), 5);
        assert_eq!(scheduler.kind(), AnimationKind::Breath);
        assert_eq!(scheduler.animation().kind(), AnimationKind::Breath);
    }
}
