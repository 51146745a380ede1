mod tests {
    use myrtio_zone_composer::channel::{Channel, TryReceiveError, TrySendError};
    use myrtio_zone_composer::intent::submit_intent;
    use myrtio_zone_composer::{IntentChannel, ParameterIntent, Rgb};

    #[test]
    fn test_channel_fifo_and_capacity() {
        let channel: Channel<u8, 2> = Channel::new();
        assert!(channel.try_send(1).is_ok());
        assert!(channel.try_send(2).is_ok());
        assert_eq!(channel.try_send(3), Err(TrySendError(3)));
        assert_eq!(channel.try_receive(), Ok(1));
        assert_eq!(channel.try_receive(), Ok(2));
        assert_eq!(channel.try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_coalescing_replaces_same_kind() {
        let channel: Channel<(u8, u8), 2> = Channel::new();
        let same = |a: &(u8, u8), b: &(u8, u8)| a.0 == b.0;
        channel.send_coalescing((1, 10), same).unwrap();
        channel.send_coalescing((2, 20), same).unwrap();
        channel.send_coalescing((1, 11), same).unwrap();
        assert_eq!(channel.len(), 2);
        assert_eq!(channel.try_receive(), Ok((1, 11)));
        assert_eq!(channel.try_receive(), Ok((2, 20)));
    }

    #[test]
    fn test_split_ends_share_queue() {
        let (sender, receiver) = Channel::<u8, 4>::new().split();
        let second = sender.clone();
        sender.try_send(1).unwrap();
        std::thread::spawn(move || second.try_send(2).unwrap())
            .join()
            .unwrap();
        assert_eq!(receiver.len(), 2);
        assert_eq!(receiver.try_receive(), Ok(1));
        assert_eq!(receiver.try_receive(), Ok(2));
        assert!(receiver.is_empty());
    }

    #[test]
    fn test_intent_queue_never_overflows() {
        let (sender, receiver) = IntentChannel::new().split();
        for step in 0..100 {
            let value = f32::from(u8::try_from(step).unwrap()) / 100.0;
            submit_intent(&sender, ParameterIntent::Speed(value));
            submit_intent(&sender, ParameterIntent::Response(value));
            submit_intent(&sender, ParameterIntent::TargetBrightness(200));
            submit_intent(&sender, ParameterIntent::TargetColor(Rgb::new(1, 2, 3)));
            submit_intent(&sender, ParameterIntent::Sensitivity(value));
            submit_intent(&sender, ParameterIntent::SaturationBoost(value));
        }
        assert_eq!(receiver.len(), 6);
        assert_eq!(receiver.try_receive(), Ok(ParameterIntent::Speed(0.99)));
    }
}
