use crate::clock::use_current_year;
use crate::components::daisy_ui::Footer;
use yew::prelude::*;

/// Author credited in the footer.
pub const ATTRIBUTION: &str = "Ayush Behera";

/// Copyright text preceding the emphasized attribution.
#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("Copyright © {year} — Developed By ")
}

/// Site-wide copyright footer. Reads the year on every render.
#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = use_current_year();
    html! {
        <Footer class={classes!("bg-base-200/80", "text-base-content", "p-4", "mt-auto")}>
            <aside>
                <p>
                    { copyright_line(year) }
                    <span class="font-semibold">{ ATTRIBUTION }</span>
                </p>
            </aside>
        </Footer>
    }
}
