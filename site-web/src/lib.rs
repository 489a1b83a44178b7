#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod clock;
pub mod components;
pub mod dom;
pub mod render;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let Some(root) = crate::dom::mount_root() else {
        log::warn!("no document available; footer not mounted");
        return;
    };
    log::debug!("mounting site footer");
    yew::Renderer::<components::site_footer::SiteFooter>::with_root(root).render();
}
