use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, OscillatorType};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Hover,
    Click,
    Typing,
    Success,
    Error,
}

// Typing blips cycle through these so keystrokes don't all land on one pitch.
const TYPING_PITCHES: [f32; 5] = [400.0, 455.0, 425.0, 480.0, 440.0];

// The AudioContext is created lazily on first play (browsers refuse autoplay
// before a user gesture). Audio is cosmetic: failures are logged and swallowed.
#[hook]
pub fn use_sound() -> Callback<SoundKind> {
    let audio_ctx = use_mut_ref(|| None::<AudioContext>);
    let typing_step = use_mut_ref(|| 0usize);

    Callback::from(move |kind| {
        if let Err(err) = play(&audio_ctx, &typing_step, kind) {
            log::warn!("audio feedback failed: {:?}", err);
        }
    })
}

fn play(
    audio_ctx: &Rc<RefCell<Option<AudioContext>>>,
    typing_step: &Rc<RefCell<usize>>,
    kind: SoundKind,
) -> Result<(), JsValue> {
    let mut slot = audio_ctx.borrow_mut();
    if slot.is_none() {
        *slot = Some(AudioContext::new()?);
    }
    let ctx = slot.as_ref().expect("context was just created");
    if ctx.state() == AudioContextState::Suspended {
        let _ = ctx.resume()?;
    }

    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    let now = ctx.current_time();
    match kind {
        SoundKind::Hover => {
            osc.set_type(OscillatorType::Sine);
            osc.frequency().set_value_at_time(1200.0, now)?;
            gain.gain().set_value_at_time(0.015, now)?;
            gain.gain()
                .exponential_ramp_to_value_at_time(0.0001, now + 0.05)?;
            osc.start()?;
            osc.stop_with_when(now + 0.05)?;
        }
        SoundKind::Click => {
            osc.set_type(OscillatorType::Square);
            osc.frequency().set_value_at_time(150.0, now)?;
            gain.gain().set_value_at_time(0.04, now)?;
            gain.gain()
                .exponential_ramp_to_value_at_time(0.0001, now + 0.1)?;
            osc.start()?;
            osc.stop_with_when(now + 0.1)?;
        }
        SoundKind::Typing => {
            let mut step = typing_step.borrow_mut();
            let pitch = TYPING_PITCHES[*step % TYPING_PITCHES.len()];
            *step = step.wrapping_add(1);

            osc.set_type(OscillatorType::Triangle);
            osc.frequency().set_value_at_time(pitch, now)?;
            gain.gain().set_value_at_time(0.01, now)?;
            gain.gain()
                .exponential_ramp_to_value_at_time(0.0001, now + 0.02)?;
            osc.start()?;
            osc.stop_with_when(now + 0.02)?;
        }
        SoundKind::Success => {
            // Short ascending arpeggio.
            osc.set_type(OscillatorType::Sine);
            for (i, freq) in [440.0, 554.37, 659.25, 880.0].iter().enumerate() {
                osc.frequency()
                    .set_value_at_time(*freq, now + i as f64 * 0.08)?;
            }
            gain.gain().set_value_at_time(0.05, now)?;
            gain.gain()
                .exponential_ramp_to_value_at_time(0.0001, now + 0.5)?;
            osc.start()?;
            osc.stop_with_when(now + 0.5)?;
        }
        SoundKind::Error => {
            osc.set_type(OscillatorType::Sawtooth);
            osc.frequency().set_value_at_time(110.0, now)?;
            osc.frequency()
                .linear_ramp_to_value_at_time(55.0, now + 0.3)?;
            gain.gain().set_value_at_time(0.05, now)?;
            gain.gain()
                .exponential_ramp_to_value_at_time(0.0001, now + 0.3)?;
            osc.start()?;
            osc.stop_with_when(now + 0.3)?;
        }
    }

    Ok(())
}
