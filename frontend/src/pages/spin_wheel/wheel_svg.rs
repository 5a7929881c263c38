use shared::constants::{SPIN_DURATION_MS, WHEEL_RADIUS};
use shared::wheel_layout::{label_font_size, WheelConfiguration};
use yew::prelude::*;

use crate::styles;

// Distance from the hub to where a label starts
const LABEL_OFFSET: f64 = 55.0;

#[derive(Properties, PartialEq)]
pub struct WheelSvgProps {
    pub config: WheelConfiguration,
    pub rotation: f64,
    pub is_spinning: bool,
}

#[function_component(WheelSvg)]
pub fn wheel_svg(props: &WheelSvgProps) -> Html {
    let r = WHEEL_RADIUS;
    let view_box = format!("0 0 {} {}", r * 2.0, r * 2.0);

    // The browser eases the wheel to its new angle; the session resolves the
    // prize on its own timer of the same length.
    let transition = if props.is_spinning {
        format!("transform {}ms cubic-bezier(0.33, 1, 0.68, 1)", SPIN_DURATION_MS)
    } else {
        "none".to_string()
    };
    let style = format!(
        "transform: rotate({}deg); transform-origin: center; transition: {};",
        props.rotation, transition
    );

    let wedges = props.config.iter().map(|(prize, wedge)| {
        let font_size = label_font_size(&prize.name, wedge.width());
        let label_transform = format!(
            "rotate({}, {r}, {r}) translate({}, 0)",
            wedge.mid(),
            LABEL_OFFSET,
            r = r
        );

        html! {
            <g key={prize.id}>
                <path
                    d={wedge.path(r)}
                    fill={prize.color.clone()}
                    stroke="#FFFFFF"
                    stroke-width="1"
                />
                <text
                    x={r.to_string()}
                    y={r.to_string()}
                    fill={prize.text_color.clone()}
                    font-size={font_size.to_string()}
                    font-weight="500"
                    text-anchor="start"
                    dominant-baseline="middle"
                    transform={label_transform}
                >
                    { prize.name.clone() }
                </text>
            </g>
        }
    });

    html! {
        <div class={styles::WHEEL_FRAME}>
            <svg
                width="100%"
                height="100%"
                viewBox={view_box}
                class="absolute"
                style={style}
            >
                { for wedges }
            </svg>
            // Fixed pointer at 0°, to the right of the wheel
            <div class={styles::WHEEL_POINTER}></div>
        </div>
    }
}
