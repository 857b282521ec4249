use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Envuelve un callback en un debounce: cada invocación reprograma el
/// timeout y solo la última ráfaga llega al callback real. Reemplazar el
/// Timeout anterior lo cancela (se cancela al hacer drop).
#[hook]
pub fn use_debounced_callback<IN>(callback: Callback<IN>, delay_ms: u32) -> Callback<IN>
where
    IN: 'static,
{
    let pending = use_mut_ref(|| None::<Timeout>);

    Callback::from(move |value: IN| {
        let callback = callback.clone();
        let timeout = Timeout::new(delay_ms, move || callback.emit(value));
        *pending.borrow_mut() = Some(timeout);
    })
}
