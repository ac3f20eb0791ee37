use salvation::{
    io::{AudioInput, AudioOutput},
    Engine, EngineConfig, EngineError, MAX_UNISON_VOICES,
};

fn build() -> (Engine, salvation::Controls) {
    Engine::build(EngineConfig::default()).expect("default config is valid")
}

#[test]
fn default_patch_renders_to_every_channel() {
    let (mut engine, _controls) = build();
    let mut output = AudioOutput::new(2, 1024);

    assert!(engine.process(&AudioInput::default(), &mut output));

    let left = &output.buffers[0];
    let right = &output.buffers[1];
    assert_eq!(left, right, "mono mix should be copied to each channel");
    assert!(left.iter().any(|s| s.abs() > 0.0));
    assert!(left.iter().all(|s| s.is_finite()));
}

#[test]
fn unison_scenario_four_voices() {
    let (mut engine, controls) = build();
    controls.set_value("osc_a.voices", 4.0).unwrap();
    controls.set_value("osc_a.detune", 10.0).unwrap();
    controls.set_value("osc_a.blend", 0.5).unwrap();
    controls.set_value("osc_a.frequency", 440.0).unwrap();

    let mut output = AudioOutput::new(2, 256);
    engine.process(&AudioInput::default(), &mut output);

    let bank = engine.osc_a();
    let curves: Vec<(f32, f32)> = (0..MAX_UNISON_VOICES)
        .map(|i| {
            let (detune, gain) = bank.voice_curves(i).unwrap();
            (detune[0], gain[0])
        })
        .collect();

    // Voices sit at -1, -1/3, +1/3, +1 of the detune amount.
    assert!((curves[0].0 + 10.0).abs() < 1e-4);
    assert!((curves[1].0 + 10.0 / 3.0).abs() < 1e-4);
    assert!((curves[2].0 - 10.0 / 3.0).abs() < 1e-4);
    assert!((curves[3].0 - 10.0).abs() < 1e-4);

    // Outer voices at blend / 4, center pair at 1 / 4.
    let gains: Vec<f32> = curves[..4].iter().map(|c| c.1).collect();
    assert_eq!(gains, [0.125, 0.25, 0.25, 0.125]);
    let total: f32 = gains.iter().sum();
    assert!((total - 0.75).abs() < 1e-6);

    for (index, &(detune, gain)) in curves.iter().enumerate().skip(4) {
        assert_eq!((detune, gain), (0.0, 0.0), "slot {index} should be silent");
    }
}

#[test]
fn full_blend_loudness_is_independent_of_voice_count() {
    let (mut engine, controls) = build();
    controls.set_value("osc_a.blend", 1.0).unwrap();

    for voices in [1.0, 4.0, 16.0] {
        controls.set_value("osc_a.voices", voices).unwrap();
        let mut output = AudioOutput::new(1, 64);
        engine.process(&AudioInput::default(), &mut output);

        let total: f32 = (0..MAX_UNISON_VOICES)
            .map(|i| engine.osc_a().voice_curves(i).unwrap().1[0])
            .sum();
        assert!(
            (total - 1.0).abs() < 1e-5,
            "{voices} voices summed to {total}"
        );
    }
}

#[test]
fn master_bypass_mutes_output() {
    let (mut engine, controls) = build();
    controls.set_bypass("master", true).unwrap();

    let mut output = AudioOutput::new(2, 512);
    engine.process(&AudioInput::default(), &mut output);
    assert!(output.buffers.iter().flatten().all(|&s| s == 0.0));

    controls.set_bypass("master", false).unwrap();
    engine.process(&AudioInput::default(), &mut output);
    assert!(output.buffers.iter().flatten().any(|&s| s != 0.0));
}

#[test]
fn planar_and_interleaved_paths_agree() {
    let (mut planar, planar_controls) = build();
    let (mut interleaved, interleaved_controls) = build();
    for controls in [&planar_controls, &interleaved_controls] {
        controls.set_bypass("noise", true).unwrap();
        controls.set_value("osc_b.voices", 5.0).unwrap();
        controls.set_value("osc_b.detune", 20.0).unwrap();
    }

    let mut output = AudioOutput::new(2, 3000);
    planar.process(&AudioInput::default(), &mut output);

    let mut data = vec![0.0f32; 6000];
    interleaved.render_interleaved(&mut data, 2);

    for (frame, (l, r)) in data
        .chunks(2)
        .zip(output.buffers[0].iter().zip(output.buffers[1].iter()))
    {
        assert_eq!(frame[0], *l);
        assert_eq!(frame[1], *r);
    }
}

#[test]
fn invalid_config_is_reported() {
    let config = EngineConfig {
        sample_rate: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        Engine::build(config),
        Err(EngineError::InvalidConfig(_))
    ));
}

#[test]
fn voice_count_is_clamped_by_the_parameter() {
    let (_engine, controls) = build();
    controls.set_value("osc_a.voices", 64.0).unwrap();
    assert_eq!(controls.osc_a.voices.value(), MAX_UNISON_VOICES as f32);

    controls.set_value("osc_a.voices", 0.0).unwrap();
    assert_eq!(controls.osc_a.voices.value(), 1.0);
}

#[test]
fn bypass_ramp_fades_instead_of_cutting() {
    let config = EngineConfig {
        bypass_ramp_ms: 10.0,
        ..Default::default()
    };
    let (mut engine, controls) = Engine::build(config).unwrap();
    controls.set_bypass("noise", true).unwrap();
    controls.set_bypass("osc_a", true).unwrap();
    controls.set_bypass("osc_b", true).unwrap();

    // Sub only: fade it out over 480 samples.
    let mut output = AudioOutput::new(1, 4096);
    engine.process(&AudioInput::default(), &mut output);
    controls.set_bypass("sub", true).unwrap();
    engine.process(&AudioInput::default(), &mut output);

    let samples = &output.buffers[0];
    assert!(samples[..400].iter().any(|&s| s != 0.0), "fade should still be audible");
    assert!(samples[500..].iter().all(|&s| s == 0.0), "fade must end silent");
    assert_eq!(engine.sub().controls().level.value(), 0.5);
}
