//! Browser bindings: web-sys implementations of the page and store traits,
//! listener wiring, and the wasm start hook.
//!
//! Everything here is thin glue. Behavior lives in [`crate::controller`];
//! this module only converts between DOM events and controller calls and
//! maps thrown `JsValue`s into [`FolioError`].

use std::rc::Rc;

use js_sys::{Array, Function};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CssStyleDeclaration, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Storage, SvgElement, Window,
};

use crate::banner;
use crate::bindings::{Binding, EventContext, Target};
use crate::config::PageConfig;
use crate::consts::{CONFIG_SCRIPT_ID, DEBOUNCE_SHIM_BODY, DEBOUNCE_SHIM_PARAM};
use crate::controller::Controller;
use crate::error::FolioError;
use crate::fade::ObserverOptions;
use crate::page::{Page, PreferenceStore, Span};
use crate::util;

type WebController = Controller<WebPage, LocalStore>;

fn js_error(err: JsValue) -> FolioError {
    FolioError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

// =============================================================================
// PAGE
// =============================================================================

/// The live document.
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Inline style of an HTML or SVG element.
    fn style(node: &Element) -> Result<CssStyleDeclaration, FolioError> {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            return Ok(el.style());
        }
        if let Some(el) = node.dyn_ref::<SvgElement>() {
            return Ok(el.style());
        }
        Err(FolioError::Js(format!("<{}> has no inline style", node.tag_name())))
    }
}

impl Page for WebPage {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, FolioError> {
        let list = self.document.query_selector_all(selector).map_err(js_error)?;
        let mut out = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            if let Some(node) = list.item(i)
                && let Some(el) = node.dyn_ref::<Element>()
            {
                out.push(el.clone());
            }
        }
        Ok(out)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), FolioError> {
        let root = self.document.document_element().ok_or_else(|| FolioError::missing("html"))?;
        root.set_attribute(name, value).map_err(js_error)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) -> Result<(), FolioError> {
        node.class_list().add_1(class).map_err(js_error)
    }

    fn remove_class(&self, node: &Element, class: &str) -> Result<(), FolioError> {
        node.class_list().remove_1(class).map_err(js_error)
    }

    fn toggle_class(&self, node: &Element, class: &str) -> Result<bool, FolioError> {
        node.class_list().toggle(class).map_err(js_error)
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        ancestor.contains(Some(node))
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) -> Result<(), FolioError> {
        Self::style(node)?.set_property(property, value).map_err(js_error)
    }

    fn span(&self, node: &Element) -> Span {
        match node.dyn_ref::<HtmlElement>() {
            Some(el) => Span::new(f64::from(el.offset_top()), f64::from(el.offset_height())),
            None => Span::default(),
        }
    }

    fn scroll_y(&self) -> Result<f64, FolioError> {
        self.window.scroll_y().map_err(js_error)
    }

    fn scroll_into_view(&self, node: &Element) -> Result<(), FolioError> {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&opts);
        Ok(())
    }

    fn alert(&self, message: &str) -> Result<(), FolioError> {
        self.window.alert_with_message(message).map_err(js_error)
    }
}

// =============================================================================
// STORE
// =============================================================================

/// `window.localStorage`.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// Open local storage. Fails where the browser withholds it, e.g. some
    /// private-browsing modes.
    pub fn open(window: &Window) -> Result<Self, FolioError> {
        let storage = window
            .local_storage()
            .map_err(|e| FolioError::Storage(format!("{e:?}")))?
            .ok_or_else(|| FolioError::Storage("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        self.storage.get_item(key).map_err(|e| FolioError::Storage(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        self.storage.set_item(key, value).map_err(|e| FolioError::Storage(format!("{e:?}")))
    }
}

// =============================================================================
// BOOT
// =============================================================================

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {err}")));
    }
    if let Err(err) = schedule_boot() {
        log::error!("folio failed to start: {err}");
    }
}

/// Boot now if the document is parsed, otherwise on `DOMContentLoaded`.
fn schedule_boot() -> Result<(), FolioError> {
    let window = web_sys::window().ok_or_else(|| FolioError::Js("no window".into()))?;
    let document = window.document().ok_or_else(|| FolioError::Js("no document".into()))?;

    if document.ready_state() != "loading" {
        return boot(window, document);
    }
    let target = document.clone();
    listen(&target, "DOMContentLoaded", move |_: Event| {
        if let Err(err) = boot(window.clone(), document.clone()) {
            log::error!("folio failed to start: {err}");
        }
    })
}

fn boot(window: Window, document: Document) -> Result<(), FolioError> {
    let config = read_config(&document)?;
    let store = LocalStore::open(&window)?;
    let page = WebPage::new(window.clone(), document.clone());
    let controller = Rc::new(Controller::new(page, store, config)?);

    let startup = controller.start()?;
    for binding in startup.bindings {
        attach(&controller, &window, &document, binding)?;
    }
    observe(&controller, &startup.fade_targets)?;

    for line in &banner::LINES {
        web_sys::console::log_2(&JsValue::from_str(line.text), &JsValue::from_str(line.style));
    }
    Ok(())
}

fn read_config(document: &Document) -> Result<PageConfig, FolioError> {
    match document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) {
        Some(raw) => PageConfig::from_json(&raw),
        None => Ok(PageConfig::default()),
    }
}

/// Attach a listener for the lifetime of the page.
fn listen<F>(target: &EventTarget, kind: &str, f: F) -> Result<(), FolioError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(f);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

fn attach(
    controller: &Rc<WebController>,
    window: &Window,
    document: &Document,
    binding: Binding<Element>,
) -> Result<(), FolioError> {
    let Binding { event: kind, target, handler } = binding;
    let current = match &target {
        Target::Element(el) => Some(el.clone()),
        Target::Document | Target::Window => None,
    };
    let controller = Rc::clone(controller);
    let callback = move |event: Event| {
        let ctx = EventContext {
            target: event.target().and_then(|t| t.dyn_ref::<Element>().cloned()),
            current: current.clone(),
        };
        match controller.dispatch(handler, &ctx) {
            Ok(outcome) => {
                if outcome.prevent_default {
                    event.prevent_default();
                }
            }
            Err(err) => log::error!("{handler:?} failed: {err}"),
        }
    };

    match &target {
        Target::Element(el) => listen(el, kind.as_str(), callback),
        Target::Document => listen(document, kind.as_str(), callback),
        Target::Window => listen(window, kind.as_str(), callback),
    }
}

/// Watch fade targets for the page's lifetime.
fn observe(controller: &Rc<WebController>, targets: &[Element]) -> Result<(), FolioError> {
    let opts = ObserverOptions::default();
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(opts.threshold));
    init.set_root_margin(opts.root_margin);

    let controller = Rc::clone(controller);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                if let Err(err) = controller.on_intersect(&entry.target(), entry.is_intersecting()) {
                    log::error!("fade-in failed: {err}");
                }
            }
        },
    );
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).map_err(js_error)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    log::debug!("observing {} fade targets", targets.len());
    Ok(())
}

// =============================================================================
// EXPORTED UTILITIES
// =============================================================================

#[wasm_bindgen(js_name = getCurrentYear)]
#[must_use]
pub fn get_current_year() -> i32 {
    util::current_year()
}

/// Debounce a JS function. The last call's full argument list is forwarded.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce_js(func: Function, wait: u32) -> Result<Function, JsValue> {
    let debounced = util::debounce(
        move |args: Array| {
            if let Err(err) = func.apply(&JsValue::UNDEFINED, &args) {
                log::error!("debounced call threw: {}", js_error(err));
            }
        },
        wait,
    );
    let fire = Closure::<dyn FnMut(Array)>::new(debounced).into_js_value();
    let shim = Function::new_with_args(DEBOUNCE_SHIM_PARAM, DEBOUNCE_SHIM_BODY);
    Ok(shim.call1(&JsValue::UNDEFINED, &fire)?.unchecked_into())
}
