//! Static HTML rendering of the footer.

use crate::clock::{Clock, ClockProvider};
use crate::components::site_footer::SiteFooter;
use yew::LocalServerRenderer;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub clock: Clock,
}

#[function_component(PinnedFooter)]
fn pinned_footer(p: &Props) -> Html {
    html! {
        <ClockProvider clock={p.clock}>
            <SiteFooter />
        </ClockProvider>
    }
}

/// Render the footer as plain (non-hydratable) HTML using `clock` for the year.
pub async fn render_footer_html(clock: Clock) -> String {
    log::debug!("rendering footer with {clock:?}");
    LocalServerRenderer::<PinnedFooter>::with_props(Props { clock })
        .hydratable(false)
        .render()
        .await
}

/// Render the footer against the system clock.
pub async fn render_footer_html_now() -> String {
    render_footer_html(Clock::System).await
}
