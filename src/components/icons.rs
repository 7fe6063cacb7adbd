use yew::prelude::*;

use crate::content::Icon;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Heart,
    Sparkles,
    Leaf,
    Star,
    Check,
    Play,
}

impl Glyph {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::Heart => &["M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"],
            Glyph::Sparkles => &["m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z"],
            Glyph::Leaf => &[
                "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
                "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
            ],
            Glyph::Star => &["M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"],
            Glyph::Check => &["M20 6 9 17l-5-5"],
            Glyph::Play => &["M6 3l14 9-14 9V3z"],
        }
    }
}

impl From<Icon> for Glyph {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::Heart => Glyph::Heart,
            Icon::Sparkles => Glyph::Sparkles,
            Icon::Leaf => Glyph::Leaf,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub filled: bool,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconProps) -> Html {
    let fill = if props.filled { "currentColor" } else { "none" };
    html! {
        <svg
            class={props.class.clone()}
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.glyph.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
