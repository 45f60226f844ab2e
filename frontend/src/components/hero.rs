use log::debug;
use yew::prelude::*;

use crate::components::entrance::Entrance;
use crate::components::magnetic::MagneticButton;
use crate::hooks::player::use_offset_player;
use crate::hooks::ready::use_page_ready;
use crate::hooks::scroll::use_parallax;
use crate::motion::ease::Ease;
use crate::motion::timeline::{hero_timeline, Cue, HeroPart, Timeline};
use crate::motion::tween::{TweenSpec, VisualState};
use crate::Route;

const STATS: [(&str, &str); 3] = [("12+", "Years crafting"), ("340", "Launches"), ("98%", "Retention")];

// (drift, seconds) per floating shape.
const SHAPES: [(VisualState, f64); 3] = [
    (VisualState::offset(20.0, -30.0), 6.0),
    (VisualState::offset(-15.0, 20.0), 5.0),
    (VisualState::offset(10.0, -15.0), 7.0),
];

fn cue(timeline: &Timeline<HeroPart>, part: HeroPart, index: usize) -> Cue {
    timeline.cue(part, index).unwrap_or(Cue {
        from: VisualState::VISIBLE,
        spec: TweenSpec::new(0.0, Ease::Linear),
    })
}

#[derive(Properties, PartialEq)]
struct HeroShapeProps {
    container: NodeRef,
    index: usize,
    drift: VisualState,
    seconds: f64,
}

#[function_component(HeroShape)]
fn hero_shape(props: &HeroShapeProps) -> Html {
    let wrapper = use_node_ref();
    let shape = use_node_ref();
    let bob = use_offset_player(shape.clone());
    let ready = use_page_ready();

    {
        let drift = props.drift;
        let spec = TweenSpec::new(props.seconds, Ease::SineInOut);
        use_effect_with_deps(
            move |ready| {
                if *ready {
                    bob.repeat(drift, spec, true);
                }
                || ()
            },
            ready,
        );
    }
    use_parallax(props.container.clone(), wrapper.clone(), -100.0);

    html! {
        <div class="hero-shape-wrap" ref={wrapper}>
            <div class={classes!("hero-shape", format!("hero-shape-{}", props.index + 1))} ref={shape}></div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let container = use_node_ref();
    let ready = use_page_ready();
    let timeline = hero_timeline(2, STATS.len());

    {
        let duration = timeline.duration();
        use_effect_with_deps(
            move |ready| {
                if *ready {
                    debug!("Playing hero entrance ({:.2}s)", duration);
                }
                || ()
            },
            ready,
        );
    }

    html! {
        <section class="hero" ref={container.clone()}>
            <div class="hero-shapes">
                { for SHAPES.iter().enumerate().map(|(index, (drift, seconds))| html! {
                    <HeroShape container={container.clone()} {index} drift={*drift} seconds={*seconds} />
                }) }
            </div>
            <div class="hero-inner">
                <div class="hero-content">
                    <Entrance class="hero-badge" cue={cue(&timeline, HeroPart::Badge, 0)} play={ready}>
                        {"Independent digital studio"}
                    </Entrance>
                    <Entrance tag="h1" cue={cue(&timeline, HeroPart::Title, 0)} play={ready}>
                        {"Websites that move people"}
                    </Entrance>
                    <Entrance tag="p" cue={cue(&timeline, HeroPart::Lead, 0)} play={ready}>
                        {"We design and build marketing sites with motion that guides the eye and copy that earns the click."}
                    </Entrance>
                    <div class="hero-buttons">
                        <Entrance tag="span" cue={cue(&timeline, HeroPart::Button, 0)} play={ready}>
                            <MagneticButton to={Route::Contact} class="btn-primary">{"Start a project"}</MagneticButton>
                        </Entrance>
                        <Entrance tag="span" cue={cue(&timeline, HeroPart::Button, 1)} play={ready}>
                            <MagneticButton to={Route::Services} class="btn-ghost">{"See what we do"}</MagneticButton>
                        </Entrance>
                    </div>
                    <div class="hero-stats">
                        { for STATS.iter().enumerate().map(|(index, (figure, label))| html! {
                            <Entrance class="hero-stat" cue={cue(&timeline, HeroPart::Stat, index)} play={ready}>
                                <strong>{*figure}</strong>
                                <span>{*label}</span>
                            </Entrance>
                        }) }
                    </div>
                </div>
                <Entrance class="hero-visual" cue={cue(&timeline, HeroPart::Visual, 0)} play={ready}>
                    <div class="hero-card">
                        <span class="hero-card-dot"></span>
                        <span class="hero-card-line"></span>
                        <span class="hero-card-line short"></span>
                    </div>
                </Entrance>
            </div>
        </section>
    }
}
