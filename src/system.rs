use crate::{
    boot::{run_boot, TimeoutDelay},
    clock::BrowserClock,
    command::SHORTCUTS,
    interpreter::Interpreter,
    logging,
    persist::LocalStorage,
    portfolio::Portfolio,
    terminal::Terminal,
    theme::{ThemeName, ThemeState},
};
use futures::future::{abortable, AbortHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// The page-facing handle. The host renders `transcript()` and forwards
/// keystrokes and button clicks here.
#[wasm_bindgen]
pub struct System {
    terminal: Rc<RefCell<Terminal>>,
    boot_task: Option<AbortHandle>,
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Mirror the theme onto `<html data-theme=...>` for the stylesheet.
fn apply_theme(theme: ThemeName) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
            log::warn!("could not apply theme {}: {:?}", theme, e);
        }
    }
}

#[wasm_bindgen]
impl System {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<System, JsValue> {
        let portfolio = Portfolio::builtin().map_err(to_js)?;
        Ok(System::build(portfolio))
    }

    /// Same as `new`, with portfolio JSON supplied by the page.
    #[wasm_bindgen]
    pub fn with_content(json: &str) -> Result<System, JsValue> {
        let portfolio = Portfolio::from_json(json).map_err(|e| {
            log::error!("{}", e);
            to_js(e)
        })?;
        Ok(System::build(portfolio))
    }

    fn build(portfolio: Portfolio) -> System {
        logging::init();
        let mut themes = ThemeState::load(Box::new(LocalStorage));
        apply_theme(themes.current());
        themes.on_change(apply_theme);
        let interpreter = Interpreter::new(portfolio, themes, Box::new(BrowserClock));
        System {
            terminal: Rc::new(RefCell::new(Terminal::new(interpreter))),
            boot_task: None,
        }
    }

    /// Start the boot animation. Resolves when it is done; only the first
    /// call does anything.
    #[wasm_bindgen]
    pub fn boot(&mut self) -> js_sys::Promise {
        if self.boot_task.is_some() {
            return js_sys::Promise::resolve(&JsValue::UNDEFINED);
        }
        let terminal = self.terminal.clone();
        let (task, handle) = abortable(async move {
            run_boot(&terminal, &TimeoutDelay).await;
        });
        self.boot_task = Some(handle);
        wasm_bindgen_futures::future_to_promise(async move {
            if task.await.is_err() {
                log::info!("boot abandoned");
            }
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Drop any boot still in flight. Called when the page unmounts us.
    #[wasm_bindgen]
    pub fn teardown(&mut self) {
        if let Some(handle) = self.boot_task.as_ref() {
            handle.abort();
        }
    }

    #[wasm_bindgen]
    pub fn is_booting(&self) -> bool {
        self.terminal.borrow().is_booting()
    }

    #[wasm_bindgen]
    pub fn prompt(&self) -> String {
        self.terminal.borrow().prompt()
    }

    #[wasm_bindgen]
    pub fn exec(&self, line: &str) {
        self.terminal.borrow_mut().exec(line);
    }

    #[wasm_bindgen]
    pub fn submit(&self) {
        self.terminal.borrow_mut().submit();
    }

    #[wasm_bindgen]
    pub fn input(&self) -> String {
        self.terminal.borrow().input().to_string()
    }

    #[wasm_bindgen]
    pub fn set_input(&self, text: &str) {
        self.terminal.borrow_mut().set_input(text);
    }

    #[wasm_bindgen]
    pub fn history_prev(&self) -> String {
        let mut t = self.terminal.borrow_mut();
        t.recall_previous();
        t.input().to_string()
    }

    #[wasm_bindgen]
    pub fn history_next(&self) -> String {
        let mut t = self.terminal.borrow_mut();
        t.recall_next();
        t.input().to_string()
    }

    #[wasm_bindgen]
    pub fn suggestions(&self) -> Vec<JsValue> {
        self.terminal
            .borrow()
            .suggestions()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    #[wasm_bindgen]
    pub fn complete(&self) -> String {
        let mut t = self.terminal.borrow_mut();
        t.complete();
        t.input().to_string()
    }

    /// The whole transcript as a JSON array of lines.
    #[wasm_bindgen]
    pub fn transcript(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.terminal.borrow().session().transcript.lines()).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn theme(&self) -> String {
        self.terminal.borrow().theme().to_string()
    }

    #[wasm_bindgen]
    pub fn cycle_theme(&self) -> String {
        self.terminal.borrow_mut().cycle_theme().to_string()
    }

    #[wasm_bindgen]
    pub fn palette(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.terminal.borrow().theme().palette()).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn shortcuts() -> Result<String, JsValue> {
        serde_json::to_string(&SHORTCUTS).map_err(to_js)
    }

    /// Run the command behind status bar button `index`.
    #[wasm_bindgen]
    pub fn run_shortcut(&self, index: usize) -> bool {
        match SHORTCUTS.get(index) {
            Some(shortcut) => {
                self.exec(shortcut.command);
                true
            }
            None => false,
        }
    }
}
