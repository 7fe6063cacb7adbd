use yew::prelude::*;

use crate::browser::{use_pointer_position, use_spring};
use crate::config;

/// Soft blurred shapes drifting behind the page content.
#[function_component(FloatingShapes)]
pub fn floating_shapes() -> Html {
    let shapes_css = r#"
        .floating-shapes {
            position: absolute;
            inset: 0;
            overflow: hidden;
            pointer-events: none;
        }
        .shape {
            position: absolute;
            filter: blur(4px);
        }
        .shape-orb {
            top: 5rem;
            left: 2.5rem;
            width: 5rem;
            height: 5rem;
            border-radius: 9999px;
            background: linear-gradient(135deg, rgba(196, 214, 196, 0.3), rgba(164, 191, 164, 0.2));
            animation: drift-orb 8s ease-in-out infinite;
        }
        .shape-tile {
            top: 10rem;
            right: 5rem;
            width: 4rem;
            height: 4rem;
            border-radius: 0.5rem;
            background: linear-gradient(135deg, rgba(240, 232, 214, 0.4), rgba(196, 214, 196, 0.3));
            animation: drift-tile 10s ease-in-out infinite;
        }
        .shape-pebble {
            bottom: 10rem;
            left: 25%;
            width: 3rem;
            height: 3rem;
            border-radius: 9999px;
            background: linear-gradient(135deg, rgba(164, 191, 164, 0.25), rgba(232, 220, 196, 0.35));
            animation: drift-pebble 6s ease-in-out infinite;
        }
        .shape-reed {
            top: 33%;
            right: 33%;
            width: 2rem;
            height: 6rem;
            border-radius: 9999px;
            background: linear-gradient(180deg, rgba(196, 214, 196, 0.2), transparent);
            animation: drift-reed 15s linear infinite;
        }
        @keyframes drift-orb {
            0%, 100% { transform: translate(0, 0) scale(1); }
            50% { transform: translate(10px, -20px) scale(1.1); }
        }
        @keyframes drift-tile {
            0%, 100% { transform: translate(0, 0) rotate(45deg); }
            50% { transform: translate(-15px, 15px) rotate(60deg); }
        }
        @keyframes drift-pebble {
            0%, 100% { transform: translateY(0) scale(1); }
            50% { transform: translateY(-25px) scale(1.2); }
        }
        @keyframes drift-reed {
            0% { transform: translateY(0) rotate(0deg); }
            50% { transform: translateY(-10px) rotate(180deg); }
            100% { transform: translateY(0) rotate(360deg); }
        }
    "#;

    html! {
        <div class="floating-shapes">
            <style>{shapes_css}</style>
            <div class="shape shape-orb"></div>
            <div class="shape shape-tile"></div>
            <div class="shape shape-pebble"></div>
            <div class="shape shape-reed"></div>
        </div>
    }
}

/// Small dot that trails the pointer on a spring.
#[function_component(CursorFollower)]
pub fn cursor_follower() -> Html {
    let pointer = use_pointer_position();
    let target = pointer.offset(config::CURSOR_OFFSET, config::CURSOR_OFFSET);
    let position = use_spring(target, config::cursor_spring());

    html! {
        <div
            class="cursor-follower"
            style={format!("transform: translate({}px, {}px);", position.x, position.y)}
        />
    }
}
