//! 控制台日志。浏览器中写入 `console`，非 wasm 目标 (例如本地测试) 写入 stderr。

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::console;

#[cfg(target_arch = "wasm32")]
pub(crate) fn log(message: &str) {
    console::log_1(&JsValue::from_str(message));
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn error(message: &str) {
    console::error_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log(message: &str) {
    eprintln!("{}", message);
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn error(message: &str) {
    eprintln!("错误: {}", message);
}
