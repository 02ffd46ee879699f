use yew::prelude::*;

use crate::visibility::use_in_view;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum RevealStyle {
    #[default]
    Rise,
    Zoom,
}

impl RevealStyle {
    fn class(self) -> &'static str {
        match self {
            RevealStyle::Rise => "reveal-rise",
            RevealStyle::Zoom => "reveal-zoom",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub style: RevealStyle,
}

/// Stagger used for card grids.
pub fn stagger_delay(index: usize) -> u32 {
    index as u32 * 200
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), "0px");

    html! {
        <div
            ref={node}
            class={classes!(props.style.class(), shown.then(|| "shown"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
