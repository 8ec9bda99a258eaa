use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlInputElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use korokoro_core::{
    DiceMode, DiceTable, DieSlot, Preferences, Trigger, WidgetConfig, ROLL_DURATION_MS,
};

use crate::app_router;
use crate::dom::{self, DomError, MOUNT_ID};
use crate::persisted_store::LocalStore;

// (face class, pip count); matches the orientation table in core.
const CUBE_FACES: [(&str, u8); 6] = [
    ("front", 1),
    ("back", 2),
    ("right", 3),
    ("left", 4),
    ("top", 5),
    ("bottom", 6),
];

type SharedTable = Rc<RefCell<DiceTable>>;
type SharedPrefs = Rc<RefCell<Preferences<LocalStore>>>;

/// Starts rolls on the shared table and settles them after the animation.
#[derive(Clone)]
struct Roller {
    table: SharedTable,
    redraw: UseForceUpdateHandle,
}

impl Roller {
    fn roll(&self, trigger: Trigger) {
        let tickets = self
            .table
            .borrow_mut()
            .trigger(trigger, &mut rand::thread_rng());
        if tickets.is_empty() {
            return;
        }
        self.redraw.force_update();
        for ticket in tickets {
            gloo::console::log!("roll started", format!("{:?}", ticket.slots()));
            let roller = self.clone();
            spawn_local(async move {
                TimeoutFuture::new(ROLL_DURATION_MS).await;
                let report = roller.table.borrow_mut().settle(&ticket);
                match report {
                    Some(report) => {
                        gloo::console::log!(
                            "roll settled",
                            report.total(),
                            report.message().into_owned()
                        );
                    }
                    None => gloo::console::warn!("roll ticket already settled"),
                }
                roller.redraw.force_update();
            });
        }
    }

    fn press(&self, slot: DieSlot) {
        self.table.borrow_mut().press(slot);
        self.redraw.force_update();
    }

    fn release(&self, slot: DieSlot) {
        self.table.borrow_mut().release(slot);
        self.redraw.force_update();
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AppProps {
    pub(crate) config: WidgetConfig,
}

#[derive(Properties, PartialEq)]
struct DieProps {
    slot: DieSlot,
    transform: String,
    target: Option<String>,
    rolling: bool,
    on_trigger: Callback<DieSlot>,
    on_press: Callback<DieSlot>,
    on_release: Callback<DieSlot>,
}

#[function_component(DieView)]
fn die_view(props: &DieProps) -> Html {
    let node = use_node_ref();
    {
        // Touch needs a non-passive listener so the synthetic click and
        // scrolling can be suppressed.
        let node = node.clone();
        let on_trigger = props.on_trigger.clone();
        use_effect_with(props.slot, move |slot| {
            let slot = *slot;
            let listener = node.cast::<Element>().map(|element| {
                EventListener::new_with_options(
                    &element,
                    "touchstart",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        on_trigger.emit(slot);
                    },
                )
            });
            if listener.is_none() {
                gloo::console::error!("touch rolls disabled: die element missing", slot.element_id());
            }
            move || drop(listener)
        });
    }

    let slot = props.slot;
    let onclick = props.on_trigger.reform(move |_: MouseEvent| slot);
    let onmousedown = props.on_press.reform(move |_: MouseEvent| slot);
    let onmouseup = props.on_release.reform(move |_: MouseEvent| slot);
    let style = format!(
        "transform: {}; {}",
        props.transform,
        props.target.as_deref().unwrap_or_default()
    );

    html! {
        <div
            id={slot.element_id()}
            ref={node}
            class={classes!("dice", props.rolling.then_some("rolling"))}
            {style}
            {onclick}
            {onmousedown}
            {onmouseup}
            role="button"
            aria-label="Roll"
        >
            { for CUBE_FACES.iter().map(|(face, pips)| html! {
                <div class={classes!("face", *face)}>
                    { for (0..*pips).map(|_| html! { <span class="pip"></span> }) }
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BannerProps {
    id: &'static str,
    text: String,
    shown: bool,
}

#[function_component(ResultBanner)]
fn result_banner(props: &BannerProps) -> Html {
    html! {
        <div id={props.id} class={classes!("result", props.shown.then_some("show"))}>
            <p>{ props.text.clone() }</p>
        </div>
    }
}

fn banner_id(table: &DiceTable, slot: DieSlot) -> &'static str {
    if !table.reports_independently() {
        return "result";
    }
    match slot {
        DieSlot::First => "result1",
        DieSlot::Second => "result2",
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let prefs: SharedPrefs = use_mut_ref(|| Preferences::load(LocalStore::open()));
    let table: SharedTable = {
        let prefs = prefs.clone();
        let pairing = props.config.pairing;
        use_mut_ref(move || DiceTable::new(prefs.borrow().dice_mode(), pairing))
    };
    let redraw = use_force_update();
    let theme = {
        let prefs = prefs.clone();
        use_state(move || prefs.borrow().theme())
    };
    let roller = Roller {
        table: table.clone(),
        redraw: redraw.clone(),
    };

    use_effect_with(*theme, |theme| {
        if let Err(err) = dom::apply_theme(*theme) {
            dom::report("theme not applied", &err);
        }
        || ()
    });

    {
        let roller = roller.clone();
        use_effect_with((), move |_| {
            let listener = dom::document().map(|document| {
                EventListener::new_with_options(
                    &document,
                    "keydown",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if event.code() == "Space" {
                            event.prevent_default();
                            roller.roll(Trigger::All);
                        }
                    },
                )
            });
            if let Err(err) = &listener {
                dom::report("keyboard rolls disabled", err);
            }
            move || drop(listener)
        });
    }

    let on_theme_toggle = {
        let prefs = prefs.clone();
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = prefs.borrow_mut().toggle_theme();
            theme.set(next);
        })
    };

    let on_mode_change = {
        let prefs = prefs.clone();
        let table = table.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let mode = if input.checked() {
                DiceMode::Two
            } else {
                DiceMode::One
            };
            prefs.borrow_mut().set_dice_mode(mode);
            table.borrow_mut().set_mode(mode);
            redraw.force_update();
        })
    };

    let on_trigger = {
        let roller = roller.clone();
        Callback::from(move |slot: DieSlot| roller.roll(Trigger::Die(slot)))
    };
    let on_press = {
        let roller = roller.clone();
        Callback::from(move |slot: DieSlot| roller.press(slot))
    };
    let on_release = Callback::from(move |slot: DieSlot| roller.release(slot));

    let snapshot = table.borrow();
    let mode = snapshot.mode();
    let dice = snapshot.visible_slots().iter().map(|slot| {
        let die = snapshot.die(*slot);
        html! {
            <DieView
                key={slot.element_id()}
                slot={*slot}
                transform={die.transform()}
                target={die.rolling_target().map(|rotation| rotation.to_css_vars())}
                rolling={die.is_rolling()}
                on_trigger={on_trigger.clone()}
                on_press={on_press.clone()}
                on_release={on_release.clone()}
            />
        }
    });
    let banners = snapshot.banner_slots().iter().map(|slot| {
        let banner = snapshot.banner(*slot);
        html! {
            <ResultBanner
                id={banner_id(&snapshot, *slot)}
                text={banner.text().to_string()}
                shown={banner.is_shown()}
            />
        }
    });

    html! {
        <main class="dice-app">
            <header class="controls">
                <button
                    id="themeToggle"
                    class="theme-toggle"
                    onclick={on_theme_toggle}
                    aria-label="Toggle theme"
                >
                    <span class="theme-icon">{ theme.icon() }</span>
                </button>
                <label class="dice-count-toggle">
                    <span>{ "1" }</span>
                    <input
                        id="diceCountToggle"
                        type="checkbox"
                        checked={mode == DiceMode::Two}
                        onchange={on_mode_change}
                    />
                    <span>{ "2" }</span>
                </label>
            </header>
            <div id="diceContainer" class={classes!("dice-container", mode.layout_class())}>
                { for dice }
            </div>
            <div class={classes!("results-container", mode.layout_class())}>
                { for banners }
            </div>
        </main>
    }
}

pub(crate) fn mount() -> Result<(), DomError> {
    let root = dom::element_by_id(MOUNT_ID)?;
    let config = app_router::load_widget_config();
    gloo::console::log!("mounting dice roller", config.pairing.as_str());
    let _app_handle = yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
    Ok(())
}
