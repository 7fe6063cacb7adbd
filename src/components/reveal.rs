use std::time::Duration;

use yew::prelude::*;

use crate::browser::{use_in_view, use_mounted};
use crate::config;
use crate::motion::pose::reveal_style;
use crate::motion::{InViewOptions, Pose, Timing};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Pose the element starts from before it is revealed.
    #[prop_or(Pose::rise(50.0))]
    pub from: Pose,
    #[prop_or_default]
    pub delay: Duration,
    #[prop_or(config::REVEAL_DURATION)]
    pub duration: Duration,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or("div")]
    pub tag: &'static str,
}

/// Plays its entrance the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let options = if props.once {
        InViewOptions::once()
    } else {
        InViewOptions::default()
    };
    let visible = use_in_view(node.clone(), options);
    let style = reveal_style(
        props.from,
        visible,
        Timing::new(props.duration).delayed(props.delay),
    );

    html! {
        <@{props.tag} ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </@>
    }
}

/// Plays its entrance right after mount, regardless of scroll position.
#[function_component(Entrance)]
pub fn entrance(props: &RevealProps) -> Html {
    let mounted = use_mounted();
    let style = reveal_style(
        props.from,
        mounted,
        Timing::new(props.duration).delayed(props.delay),
    );

    html! {
        <@{props.tag} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </@>
    }
}
