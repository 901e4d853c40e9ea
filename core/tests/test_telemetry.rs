#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use hexframe_core::framing::{encode_unit, Frame};
    use hexframe_core::pipeline::{run_pipeline, PipelineConfig};
    use hexframe_core::report::MemoryReport;
    use hexframe_core::telemetry::{Stage, StageTimes, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
    use hexframe_core::transform::TransformOutcome;

    #[test]
    fn counters_follow_a_run() {
        let input: String = [
            (1u8, vec![0u8; 1]),
            (2, vec![0u8; 4]),
            (3, vec![0u8; 7]),
        ]
        .into_iter()
        .map(|(t, d)| encode_unit(&Frame::with_checksum(t, d).unwrap(), 0).unwrap())
        .collect();

        let mut report = MemoryReport::new();
        let snap = run_pipeline(Cursor::new(input.into_bytes()), &mut report, &PipelineConfig::default()).unwrap();
        let c = &snap.counters;

        assert_eq!(c.frames_decoded, 3);
        assert_eq!(c.frames_transformed, 3);
        assert_eq!(c.masks_read, 3);
        assert_eq!(c.frames_padded, 2);
        assert_eq!(c.bytes_data, 12);
        assert_eq!(c.bytes_padding, 4);
        assert_eq!(c.words_masked, 1);
        assert_eq!(c.checksum_failures, 0);

        assert!(snap.sanity_check());
        assert!(snap.has_all_stages(&Stage::FRAME_STAGES));
        assert!(snap.total_stage_time() <= snap.elapsed);
    }

    #[test]
    fn empty_run_records_only_decode() {
        let mut report = MemoryReport::new();
        let snap = run_pipeline(Cursor::new(Vec::new()), &mut report, &PipelineConfig::default()).unwrap();
        assert_eq!(snap.counters, TelemetryCounters::default());
        assert!(snap.has_all_stages(&[Stage::Decode]));
        assert!(!snap.has_all_stages(&[Stage::Verify]));
        assert!(snap.sanity_check());
    }

    #[test]
    fn counters_merge() {
        let mut a = TelemetryCounters::default();
        a.add_decoded(5);
        a.add_mask();
        a.add_transform(&TransformOutcome { padding: 3, words_masked: 1, crc32: 0 });

        let mut b = TelemetryCounters::default();
        b.add_decoded(4);
        b.add_checksum_failure();

        a += b;
        assert_eq!(a.frames_decoded, 2);
        assert_eq!(a.bytes_data, 9);
        assert_eq!(a.frames_padded, 1);
        assert_eq!(a.bytes_padding, 3);
        assert_eq!(a.checksum_failures, 1);
    }

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Pad, Duration::from_micros(10));
        times.add(Stage::Pad, Duration::from_micros(5));
        times.add(Stage::Mask, Duration::from_micros(1));

        assert_eq!(times.get(Stage::Pad), Duration::from_micros(15));
        assert_eq!(times.get(Stage::Verify), Duration::ZERO);
        assert_eq!(times.total(), Duration::from_micros(16));
        assert!((times.get_us(Stage::Pad) - 15.0).abs() < 1e-6);
        assert_eq!((&times).into_iter().count(), 2);
    }

    #[test]
    fn timer_charges_closure_time() {
        let mut timer = TelemetryTimer::new();
        let v = timer.time(Stage::Recompute, || 7);
        timer.finish();
        assert_eq!(v, 7);
        assert!(timer.stage_times.has_all(&[Stage::Recompute]));

        let snap = TelemetrySnapshot::from(&TelemetryCounters::default(), &timer);
        assert_eq!(snap.elapsed, timer.elapsed());
        assert_eq!(snap.throughput_data_bytes_per_sec, 0.0);
    }

    #[test]
    fn snapshot_serialises() {
        let snap = TelemetrySnapshot::from(&TelemetryCounters::default(), &TelemetryTimer::new());
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"frames_decoded\":0"));
    }
}
