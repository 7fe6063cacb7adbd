use std::time::Duration;

use yew::prelude::*;

use super::reveal::Reveal;
use crate::browser::use_mounted;
use crate::config;
use crate::motion::pose::reveal_style;
use crate::motion::{sequence, split_words, Pose, Timing};

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay: Duration,
}

/// Block of copy that rises into place once it is scrolled into view.
#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    html! {
        <Reveal class={props.class.clone()} delay={props.delay} from={Pose::rise(50.0)}>
            { for props.children.iter() }
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggeredTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Reveals `text` word by word on mount.
#[function_component(StaggeredText)]
pub fn staggered_text(props: &StaggeredTextProps) -> Html {
    let mounted = use_mounted();
    let words = sequence(split_words(&props.text), config::WORD_STEP);

    html! {
        <div class={props.class.clone()}>
            {
                for words.into_iter().map(|word| {
                    let style = reveal_style(
                        Pose::rise(20.0),
                        mounted,
                        Timing::new(config::WORD_DURATION).delayed(word.delay),
                    );
                    html! {
                        <span key={word.index} class="word" style={style}>{ word.item.to_string() }</span>
                    }
                })
            }
        </div>
    }
}
