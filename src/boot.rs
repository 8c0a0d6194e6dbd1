use crate::terminal::Terminal;
use std::cell::RefCell;
use std::future::Future;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootPhase {
    #[default]
    Idle,
    Booting,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootStep {
    pub message: &'static str,
    pub delay_ms: u32,
}

pub const BOOT_SEQUENCE: [BootStep; 4] = [
    BootStep {
        message: "Loading Arch Linux...",
        delay_ms: 100,
    },
    BootStep {
        message: "[OK] Started Kernel.",
        delay_ms: 300,
    },
    BootStep {
        message: "[OK] Mounted /dev/sda2 (Projects).",
        delay_ms: 500,
    },
    BootStep {
        message: "Welcome to Amir's Portfolio!",
        delay_ms: 800,
    },
];

/// Pause after the last step before the screen is cleared.
pub const SETTLE_DELAY_MS: u32 = 500;

/// `Idle -> Booting -> Ready`, each transition taken at most once.
#[derive(Default)]
pub struct BootSequencer {
    phase: BootPhase,
}

impl BootSequencer {
    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Leave `Idle`. Returns false if boot was already started, in which
    /// case the caller must not run the sequence again.
    pub fn begin(&mut self) -> bool {
        if self.phase != BootPhase::Idle {
            return false;
        }
        self.phase = BootPhase::Booting;
        true
    }

    pub fn finish(&mut self) {
        if self.phase == BootPhase::Booting {
            self.phase = BootPhase::Ready;
        }
    }
}

/// The boot sequence's only way to wait.
pub trait Delay {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

/// `setTimeout` wrapped in a promise.
pub struct TimeoutDelay;

impl Delay for TimeoutDelay {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
        let promise = js_sys::Promise::new(
            &mut |resolve: js_sys::Function, _reject: js_sys::Function| {
                let scheduled = web_sys::window()
                    .map(|win| {
                        win.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
                            .is_ok()
                    })
                    .unwrap_or(false);
                if !scheduled {
                    log::warn!("no timer available, skipping {}ms delay", ms);
                    let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
                }
            },
        );
        async move {
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        }
    }
}

/// Play the boot sequence into `terminal`. A second call (or a call after
/// boot finished) returns immediately. The borrow is only held between
/// awaits, so the host may keep reading the terminal while this runs.
/// Dropping the future mid-way leaves the terminal where it got to.
pub async fn run_boot<D: Delay>(terminal: &RefCell<Terminal>, delay: &D) {
    if !terminal.borrow_mut().begin_boot() {
        log::debug!("boot already started");
        return;
    }
    log::info!("boot started");

    for step in BOOT_SEQUENCE.iter() {
        delay.sleep(step.delay_ms).await;
        terminal.borrow_mut().boot_line(step.message);
    }

    delay.sleep(SETTLE_DELAY_MS).await;
    terminal.borrow_mut().finish_boot();
    log::info!("boot complete");
}
