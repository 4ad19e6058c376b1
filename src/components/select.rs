//! Custom select widget: a trigger button plus a floating option menu.
//!
//! The menu renders through a portal attached to `document.body`, so a parent
//! card with `overflow: hidden` or its own scroll area can never clip it. Its
//! screen position is computed from the trigger's measured bounds on every
//! open, and a document-level `mousedown` listener closes it on any press
//! outside the trigger and the menu. The selected value itself stays owned by
//! the host; the widget only reports picks through `on_value_change` and
//! caches the picked row's text for display.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::create_portal;
use yew::prelude::*;

const SELECT_CSS: &str = r#"
.select-trigger {
    width: 100%;
    text-align: left;
    background: none;
    border: none;
    padding: 0;
    color: inherit;
    font: inherit;
    cursor: pointer;
}
.select-value {
    font-size: 0.9rem;
    padding: 0.55rem 0.8rem;
}
.select-menu {
    border-radius: 12px;
    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.35);
    max-height: 280px;
    overflow-y: auto;
}
.select-menu-inner {
    padding: 0.25rem 0;
}
.select-item {
    padding: 0.5rem 0.8rem;
    font-size: 0.9rem;
    cursor: pointer;
}
.select-item:hover {
    background: rgba(128, 128, 128, 0.18);
}
"#;

/// Shared state of one `Select` instance. Every part of the widget reaches it
/// through context; mutation goes through `set_open` and `select` only.
#[derive(Clone)]
pub struct SelectContext {
    open: UseStateHandle<bool>,
    label: UseStateHandle<Option<String>>,
    /// Host-owned value; the widget mirrors picks back through
    /// `on_value_change` and never writes it itself.
    pub value: Option<String>,
    on_value_change: Option<Callback<String>>,
    anchor: Rc<RefCell<Option<Element>>>,
}

impl PartialEq for SelectContext {
    fn eq(&self, other: &Self) -> bool {
        self.open == other.open
            && self.label == other.label
            && self.value == other.value
            && self.on_value_change == other.on_value_change
            && Rc::ptr_eq(&self.anchor, &other.anchor)
    }
}

impl SelectContext {
    pub fn is_open(&self) -> bool {
        *self.open
    }

    pub fn label(&self) -> Option<String> {
        (*self.label).clone()
    }

    pub fn set_open(&self, open: bool) {
        self.open.set(open);
    }

    /// Reports a picked option: notify the host if it listens, cache the
    /// display label and close the menu in one transition.
    pub fn select(&self, key: &str, label: String) {
        if let Some(on_value_change) = &self.on_value_change {
            on_value_change.emit(key.to_string());
        }
        self.label.set(Some(label));
        self.open.set(false);
    }

    fn register_anchor(&self, node: Option<Element>) {
        *self.anchor.borrow_mut() = node;
    }

    fn anchor(&self) -> Option<Element> {
        self.anchor.borrow().clone()
    }

    fn anchor_contains(&self, node: Option<&web_sys::Node>) -> bool {
        match &*self.anchor.borrow() {
            Some(anchor) => anchor.contains(node),
            None => false,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    #[prop_or_default]
    pub value: Option<String>,
    #[prop_or_default]
    pub on_value_change: Option<Callback<String>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let open = use_state(|| false);
    let label = use_state(|| None::<String>);
    let anchor = use_mut_ref(|| None::<Element>);

    let context = SelectContext {
        open,
        label,
        value: props.value.clone(),
        on_value_change: props.on_value_change.clone(),
        anchor,
    };

    html! {
        <>
            <style>{SELECT_CSS}</style>
            <ContextProvider<SelectContext> context={context}>
                { for props.children.iter() }
            </ContextProvider<SelectContext>>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectTriggerProps {
    #[prop_or_default]
    pub class: Classes,
    /// Optional caller-owned handle to the trigger surface. It sees the same
    /// node the widget registers internally as its menu anchor.
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SelectTrigger)]
pub fn select_trigger(props: &SelectTriggerProps) -> Html {
    let context = use_context::<SelectContext>();
    let trigger_ref = props.node_ref.clone();

    {
        let context = context.clone();
        let trigger_ref = trigger_ref.clone();
        use_effect(move || {
            if let Some(context) = &context {
                context.register_anchor(trigger_ref.cast::<Element>());
            }
            move || {
                if let Some(context) = &context {
                    context.register_anchor(None);
                }
            }
        });
    }

    let onclick = {
        let context = context.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(context) = &context {
                context.set_open(!context.is_open());
            }
        })
    };

    html! {
        <button
            type="button"
            ref={trigger_ref}
            class={classes!("select-trigger", props.class.clone())}
            {onclick}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectValueProps {
    pub placeholder: String,
}

/// Shows the label cached by the last pick, or the placeholder before any
/// interaction. A host-set value with no pick behind it keeps the
/// placeholder on screen.
#[function_component(SelectValue)]
pub fn select_value(props: &SelectValueProps) -> Html {
    let context = use_context::<SelectContext>();
    let label = context
        .and_then(|context| context.label())
        .filter(|label| !label.is_empty());

    html! {
        <div class="select-value">
            { label.unwrap_or_else(|| props.placeholder.clone()) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectContentProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SelectContent)]
pub fn select_content(props: &SelectContentProps) -> Html {
    let context = use_context::<SelectContext>();
    let menu_ref = use_node_ref();

    let open = context
        .as_ref()
        .map(|context| context.is_open())
        .unwrap_or(false);

    // One document-level listener while open, detached on close and unmount.
    {
        let context = context.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |open| {
                let document = web_sys::window().and_then(|window| window.document());
                let destructor: Box<dyn FnOnce()> = match (*open, context, document) {
                    (true, Some(context), Some(document)) => {
                        let callback =
                            Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
                                let target = event
                                    .target()
                                    .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
                                if context.anchor_contains(target.as_ref()) {
                                    // The trigger's own click handler owns toggling.
                                    return;
                                }
                                if let Some(menu) = menu_ref.cast::<Element>() {
                                    if menu.contains(target.as_ref()) {
                                        // Option rows handle presses on themselves.
                                        return;
                                    }
                                }
                                context.set_open(false);
                            });
                        document
                            .add_event_listener_with_callback(
                                "mousedown",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        Box::new(move || {
                            if let Some(document) =
                                web_sys::window().and_then(|window| window.document())
                            {
                                document
                                    .remove_event_listener_with_callback(
                                        "mousedown",
                                        callback.as_ref().unchecked_ref(),
                                    )
                                    .unwrap();
                            }
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            open,
        );
    }

    let Some(context) = context else {
        return Html::default();
    };
    if !context.is_open() {
        return Html::default();
    }
    // No anchor registered yet means nothing to measure against.
    let Some(anchor) = context.anchor() else {
        return Html::default();
    };

    let window = web_sys::window();
    let scroll_x = window
        .as_ref()
        .and_then(|window| window.scroll_x().ok())
        .unwrap_or(0.0);
    let scroll_y = window
        .as_ref()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0);
    let rect = anchor.get_bounding_client_rect();
    let style = menu_style(rect.bottom(), rect.left(), rect.width(), scroll_x, scroll_y);

    let Some(body) = window
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return Html::default();
    };

    create_portal(
        html! {
            <div
                ref={menu_ref}
                class={classes!("select-menu", props.class.clone())}
                {style}
                role="listbox"
            >
                <div class="select-menu-inner">
                    { for props.children.iter() }
                </div>
            </div>
        },
        body.into(),
    )
}

/// The menu sits 6px under the anchor, left-aligned with it and as wide as
/// it, in document coordinates so it stays put at the open position.
fn menu_style(
    anchor_bottom: f64,
    anchor_left: f64,
    anchor_width: f64,
    scroll_x: f64,
    scroll_y: f64,
) -> String {
    format!(
        "position: absolute; top: {}px; left: {}px; width: {}px; z-index: 1000;",
        anchor_bottom + scroll_y + 6.0,
        anchor_left + scroll_x,
        anchor_width,
    )
}

#[derive(Properties, PartialEq)]
pub struct SelectItemProps {
    pub value: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SelectItem)]
pub fn select_item(props: &SelectItemProps) -> Html {
    let context = use_context::<SelectContext>();
    let row_ref = use_node_ref();

    let onclick = {
        let context = context.clone();
        let row_ref = row_ref.clone();
        let value = props.value.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(context) = &context {
                // The display label is whatever text this row actually
                // renders; icon-only content yields an empty label.
                let label = row_ref
                    .cast::<web_sys::Node>()
                    .and_then(|node| node.text_content())
                    .unwrap_or_default();
                context.select(&value, label);
            }
        })
    };

    html! {
        <div ref={row_ref} class="select-item" role="option" {onclick}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::menu_style;

    #[test]
    fn menu_sits_six_px_under_the_anchor() {
        let style = menu_style(120.0, 40.0, 160.0, 0.0, 0.0);
        assert!(style.contains("top: 126px;"), "{style}");
        assert!(style.contains("left: 40px;"), "{style}");
        assert!(style.contains("width: 160px;"), "{style}");
    }

    #[test]
    fn scroll_offsets_move_viewport_coords_into_document_coords() {
        let style = menu_style(120.0, 40.0, 160.0, 15.0, 300.0);
        assert!(style.contains("top: 426px;"), "{style}");
        assert!(style.contains("left: 55px;"), "{style}");
    }

    #[test]
    fn menu_always_draws_above_page_content() {
        let style = menu_style(0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(style.contains("z-index: 1000;"));
        assert!(style.starts_with("position: absolute;"));
    }
}
