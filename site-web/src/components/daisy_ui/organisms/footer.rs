use crate::simple_component;

simple_component!(
    Footer,
    footer_component,
    footer,
    ["footer", "sm:footer-horizontal", "footer-center"],
    Some("contentinfo")
);
