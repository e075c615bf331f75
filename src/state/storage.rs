//! The one place that touches browser local storage. Components load at
//! mount and save from event handlers; nothing else reads these keys.
//! Off the web build every operation is a no-op, which keeps SSR and the
//! server tests oblivious to the browser.

pub const ACCESS_TOKEN: &str = "ACCESS_TOKEN";
pub const USER_NAME: &str = "USER_NAME";
pub const USER_EMAIL: &str = "USER_EMAIL";
pub const USER_CITY: &str = "USER_CITY";
pub const WEATHER_KEY: &str = "OWM_KEY";

#[cfg(feature = "web")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "web")]
pub fn get(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

#[cfg(feature = "web")]
pub fn set(key: &str, value: &str) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(key, value);
    }
}

#[cfg(feature = "web")]
pub fn remove(key: &str) {
    if let Some(s) = local_storage() {
        let _ = s.remove_item(key);
    }
}

#[cfg(not(feature = "web"))]
pub fn get(_key: &str) -> Option<String> {
    None
}

#[cfg(not(feature = "web"))]
pub fn set(_key: &str, _value: &str) {}

#[cfg(not(feature = "web"))]
pub fn remove(_key: &str) {}
