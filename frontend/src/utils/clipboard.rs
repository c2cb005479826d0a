#[cfg(target_arch = "wasm32")]
pub async fn copy_text(text: &str) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or("No window")?;
    let navigator: JsValue = window.navigator().into();
    let clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .ok_or("Clipboard is not available")?;
    let write_text = js_sys::Reflect::get(&clipboard, &"writeText".into())
        .map_err(|_| "Clipboard is not available".to_string())?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| "Clipboard is not available".to_string())?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|err| format!("{:?}", err))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| "Clipboard write did not return a promise".to_string())?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| format!("{:?}", err))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn copy_text(_text: &str) -> Result<(), String> {
    Err("Clipboard is not available".into())
}
