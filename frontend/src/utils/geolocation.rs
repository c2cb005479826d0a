use crate::api::Coordinates;
use thiserror::Error;

pub const GEOLOCATION_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("location permission denied")]
    Denied,
    #[error("position unavailable")]
    Unavailable,
    #[error("location request timed out")]
    Timeout,
    #[error("{0}")]
    Other(String),
}

impl GeolocationError {
    /// Maps a `GeolocationPositionError.code`.
    pub fn from_code(code: u32, message: String) -> Self {
        match code {
            1 => GeolocationError::Denied,
            2 => GeolocationError::Unavailable,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::Other(message),
        }
    }
}

/// One-shot position lookup with [`GEOLOCATION_TIMEOUT_MS`].
#[cfg(target_arch = "wasm32")]
pub async fn current_position() -> Result<Coordinates, GeolocationError> {
    use futures::channel::oneshot;
    use std::{cell::RefCell, rc::Rc};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};

    let window = web_sys::window().ok_or(GeolocationError::Unsupported)?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let (tx, rx) = oneshot::channel::<Result<Coordinates, GeolocationError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let number = |target: &JsValue, key: &str| {
        js_sys::Reflect::get(target, &key.into())
            .ok()
            .and_then(|v| v.as_f64())
    };

    let success_tx = Rc::clone(&tx);
    let on_success = Closure::once_into_js(move |position: JsValue| {
        let result = js_sys::Reflect::get(&position, &"coords".into())
            .ok()
            .and_then(|coords| {
                let lat = number(&coords, "latitude")?;
                let lng = number(&coords, "longitude")?;
                Coordinates::new(lat, lng)
            })
            .ok_or(GeolocationError::Unavailable);
        if let Some(sender) = success_tx.borrow_mut().take() {
            let _ = sender.send(result);
        }
    });
    let error_tx = Rc::clone(&tx);
    let on_error = Closure::once_into_js(move |error: JsValue| {
        let code = number(&error, "code").unwrap_or_default() as u32;
        let message = js_sys::Reflect::get(&error, &"message".into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        if let Some(sender) = error_tx.borrow_mut().take() {
            let _ = sender.send(Err(GeolocationError::from_code(code, message)));
        }
    });

    let options = web_sys::PositionOptions::new();
    options.set_timeout(GEOLOCATION_TIMEOUT_MS);
    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
            &options,
        )
        .map_err(|err| GeolocationError::Other(format!("{:?}", err)))?;

    rx.await
        .unwrap_or_else(|_| Err(GeolocationError::Other("geolocation callback dropped".into())))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn current_position() -> Result<Coordinates, GeolocationError> {
    Err(GeolocationError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_error_codes_map_to_variants() {
        assert_eq!(GeolocationError::from_code(1, String::new()), GeolocationError::Denied);
        assert_eq!(GeolocationError::from_code(2, String::new()), GeolocationError::Unavailable);
        assert_eq!(GeolocationError::from_code(3, String::new()), GeolocationError::Timeout);
        assert_eq!(
            GeolocationError::from_code(9, "odd".into()),
            GeolocationError::Other("odd".into())
        );
    }
}
