//! Shared plumbing for the DaisyUI wrappers: common props, class merging and
//! the `simple_component!` generator used by single-element components.

pub use yew::function_component;
pub use yew::prelude::{AttrValue, Children, Classes, Html, Properties, html};

/// Props accepted by every component generated through `simple_component!`.
#[derive(Properties, PartialEq, Clone, Default)]
pub struct BaseProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub role: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Base DaisyUI classes first, caller-provided classes after.
#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[must_use]
pub fn attr_value(opt: &Option<AttrValue>) -> Option<AttrValue> {
    opt.clone()
}

/// Generate a function component that renders one `$tag` element carrying
/// the given base classes, an optional default ARIA role, and its children.
#[macro_export]
macro_rules! simple_component {
    ($component:ident, $func:ident, $tag:ident, [$($base:expr),*], $default_role:expr) => {
        #[ $crate::components::daisy_ui::foundation::function_component($component)]
        pub fn $func(props: &$crate::components::daisy_ui::foundation::BaseProps) -> yew::Html {
            use $crate::components::daisy_ui::foundation::{attr_value, class_list};
            let class = class_list(&[$($base),*], &props.class);
            let id = attr_value(&props.id);
            let aria_label = attr_value(&props.aria_label);
            let role: Option<yew::AttrValue> = props
                .role
                .clone()
                .or_else(|| $default_role.map(yew::AttrValue::from));
            yew::html! {
                <$tag id={id} class={class} aria-label={aria_label} role={role}>
                    { for props.children.iter() }
                </$tag>
            }
        }
    };
}
