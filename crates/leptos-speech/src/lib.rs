//! Leptos Speech Utilities
//!
//! Browser speech-to-text and text-to-speech for Leptos.
//! Recognition goes through `SpeechRecognition` (or the prefixed
//! `webkitSpeechRecognition`), synthesis through `window.speechSynthesis`.
//! Listening/speaking state is exposed as signals so views can toggle buttons.

use std::cell::{Cell, RefCell};

use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// Web Speech API recognition object (not exposed by web-sys in all browsers)
    #[wasm_bindgen(extends = web_sys::EventTarget)]
    #[derive(Debug, Clone)]
    type Recognition;

    #[wasm_bindgen(method, setter = lang)]
    fn set_lang(this: &Recognition, lang: &str);

    #[wasm_bindgen(method, setter = continuous)]
    fn set_continuous(this: &Recognition, value: bool);

    #[wasm_bindgen(method, setter = interimResults)]
    fn set_interim_results(this: &Recognition, value: bool);

    #[wasm_bindgen(method, setter = onresult)]
    fn set_onresult(this: &Recognition, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, setter = onerror)]
    fn set_onerror(this: &Recognition, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, setter = onend)]
    fn set_onend(this: &Recognition, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, catch)]
    fn start(this: &Recognition) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn stop(this: &Recognition);

    #[wasm_bindgen(method)]
    fn abort(this: &Recognition);
}

/// Constructor names, standard first
const RECOGNITION_CONSTRUCTORS: &[&str] = &["SpeechRecognition", "webkitSpeechRecognition"];

/// Playback rate for synthesized speech
const SPEECH_RATE: f32 = 0.9;

thread_local! {
    static ACTIVE_RECOGNITION: RefCell<Option<Recognition>> = RefCell::new(None);
    // Handlers from superseded sessions still fire; they compare against these.
    static RECOGNITION_GENERATION: Cell<u32> = Cell::new(0);
    static UTTERANCE_GENERATION: Cell<u32> = Cell::new(0);
}

/// Speech errors surfaced to the UI
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpeechError {
    #[error("Speech is not supported in this browser")]
    Unsupported,
    #[error("Speech API error: {0}")]
    Browser(String),
}

impl SpeechError {
    fn from_js(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        SpeechError::Browser(message)
    }
}

/// Speech state signals
#[derive(Clone, Copy)]
pub struct SpeechSignals {
    pub listening_read: ReadSignal<bool>,
    pub listening_write: WriteSignal<bool>,
    pub speaking_read: ReadSignal<bool>,
    pub speaking_write: WriteSignal<bool>,
}

pub fn create_speech_signals() -> SpeechSignals {
    let (listening_read, listening_write) = signal(false);
    let (speaking_read, speaking_write) = signal(false);
    SpeechSignals {
        listening_read,
        listening_write,
        speaking_read,
        speaking_write,
    }
}

/// Collapse recognizer whitespace into single spaces
pub fn normalize_transcript(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn recognition_constructor() -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    RECOGNITION_CONSTRUCTORS.iter().find_map(|name| {
        js_sys::Reflect::get(&window, &JsValue::from_str(name))
            .ok()
            .and_then(|ctor| ctor.dyn_into::<js_sys::Function>().ok())
    })
}

fn synthesis() -> Option<web_sys::SpeechSynthesis> {
    web_sys::window()?.speech_synthesis().ok()
}

pub fn is_recognition_supported() -> bool {
    recognition_constructor().is_some()
}

pub fn is_synthesis_supported() -> bool {
    synthesis().is_some()
}

/// Read the transcript of a `result` event.
/// Returns the joined text and whether every result in it is final.
fn transcript_from_event(event: &JsValue) -> Option<(String, bool)> {
    use js_sys::Reflect;

    let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let length = Reflect::get(&results, &JsValue::from_str("length")).ok()?.as_f64()? as u32;
    let start = Reflect::get(event, &JsValue::from_str("resultIndex"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as u32)
        .unwrap_or(0);

    let mut text = String::new();
    let mut all_final = true;
    for i in start..length {
        let result = Reflect::get_u32(&results, i).ok()?;
        let alternative = Reflect::get_u32(&result, 0).ok()?;
        let transcript = Reflect::get(&alternative, &JsValue::from_str("transcript")).ok()?.as_string()?;
        text.push(' ');
        text.push_str(&transcript);
        all_final &= Reflect::get(&result, &JsValue::from_str("isFinal"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
    }
    Some((normalize_transcript(&text), all_final))
}

fn discard_active_recognition() {
    if let Some(previous) = ACTIVE_RECOGNITION.with(|slot| slot.borrow_mut().take()) {
        previous.abort();
    }
}

/// Start listening in the given BCP-47 locale (e.g. "hi-IN").
/// `on_transcript` receives each final, non-empty transcript.
pub fn start_listening<F>(speech: SpeechSignals, lang: &str, on_transcript: F) -> Result<(), SpeechError>
where
    F: Fn(String) + 'static,
{
    let ctor = recognition_constructor().ok_or(SpeechError::Unsupported)?;
    discard_active_recognition();

    let generation = RECOGNITION_GENERATION.with(|g| {
        g.set(g.get().wrapping_add(1));
        g.get()
    });
    let is_current = move || RECOGNITION_GENERATION.with(|g| g.get()) == generation;

    let recognition: Recognition = js_sys::Reflect::construct(&ctor, &js_sys::Array::new())
        .map_err(SpeechError::from_js)?
        .unchecked_into();
    recognition.set_lang(lang);
    recognition.set_continuous(false);
    recognition.set_interim_results(false);

    let on_result = Closure::<dyn FnMut(JsValue)>::new(move |ev: JsValue| {
        if !is_current() {
            return;
        }
        if let Some((text, true)) = transcript_from_event(&ev) {
            if !text.is_empty() {
                on_transcript(text);
            }
        }
    });
    let on_error = Closure::<dyn FnMut(JsValue)>::new(move |ev: JsValue| {
        let reason = js_sys::Reflect::get(&ev, &JsValue::from_str("error"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        log::warn!("[SPEECH] Recognition error: {}", reason);
        if is_current() {
            speech.listening_write.set(false);
        }
    });
    let on_end = Closure::<dyn FnMut(JsValue)>::new(move |_ev: JsValue| {
        if is_current() {
            speech.listening_write.set(false);
        }
    });

    recognition.set_onresult(Some(on_result.as_ref().unchecked_ref()));
    recognition.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    recognition.set_onend(Some(on_end.as_ref().unchecked_ref()));
    on_result.forget();
    on_error.forget();
    on_end.forget();

    recognition.start().map_err(SpeechError::from_js)?;
    log::debug!("[SPEECH] Listening ({})", lang);
    speech.listening_write.set(true);
    ACTIVE_RECOGNITION.with(|slot| *slot.borrow_mut() = Some(recognition));
    Ok(())
}

/// Stop listening; a pending final result is still delivered
pub fn stop_listening(speech: SpeechSignals) {
    ACTIVE_RECOGNITION.with(|slot| {
        if let Some(recognition) = slot.borrow().as_ref() {
            recognition.stop();
        }
    });
    speech.listening_write.set(false);
}

/// Speak `text` in the given locale, replacing anything currently spoken
pub fn speak(speech: SpeechSignals, text: &str, lang: &str) -> Result<(), SpeechError> {
    let synth = synthesis().ok_or(SpeechError::Unsupported)?;
    synth.cancel();

    let generation = UTTERANCE_GENERATION.with(|g| {
        g.set(g.get().wrapping_add(1));
        g.get()
    });

    let utterance = web_sys::SpeechSynthesisUtterance::new_with_text(text).map_err(SpeechError::from_js)?;
    utterance.set_lang(lang);
    utterance.set_rate(SPEECH_RATE);

    let on_done = Closure::<dyn FnMut(JsValue)>::new(move |_ev: JsValue| {
        if UTTERANCE_GENERATION.with(|g| g.get()) == generation {
            speech.speaking_write.set(false);
        }
    });
    utterance.set_onend(Some(on_done.as_ref().unchecked_ref()));
    utterance.set_onerror(Some(on_done.as_ref().unchecked_ref()));
    on_done.forget();

    synth.speak(&utterance);
    speech.speaking_write.set(true);
    Ok(())
}

pub fn stop_speaking(speech: SpeechSignals) {
    UTTERANCE_GENERATION.with(|g| g.set(g.get().wrapping_add(1)));
    if let Some(synth) = synthesis() {
        synth.cancel();
    }
    speech.speaking_write.set(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_transcript("  gehun ki  buvai\n kab  "), "gehun ki buvai kab");
        assert_eq!(normalize_transcript("   "), "");
    }

    #[test]
    fn normalize_keeps_devanagari() {
        assert_eq!(normalize_transcript(" गेहूं  की बुवाई "), "गेहूं की बुवाई");
    }

    #[test]
    fn unsupported_message() {
        assert_eq!(
            SpeechError::Unsupported.to_string(),
            "Speech is not supported in this browser"
        );
        assert_eq!(
            SpeechError::Browser("not-allowed".into()).to_string(),
            "Speech API error: not-allowed"
        );
    }
}
