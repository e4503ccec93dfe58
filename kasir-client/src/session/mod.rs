//! 会话状态 - 购物车、结账、历史、设置
//!
//! 显式的会话上下文对象：所有状态变更都经过 [`Session`]，持久化通过
//! 注入的 [`StateStore`] 端口完成。单会话单逻辑线程，指令在一次解释
//! 调用返回后原子地应用到本地状态。

mod storage;

pub use storage::{MemoryStore, RedbStore, StateStore, StorageError};

use crate::error::KasirResult;
use shared::{
    CartLine, InterpretedCommand, Intent, ItemAction, Menu, Settings, Transaction, cart_total,
};

/// 历史记录上限 - 超出时最旧的先淘汰
pub const MAX_HISTORY: usize = 50;

/// Outcome of applying one interpreted command
#[derive(Debug, Clone)]
pub enum Applied {
    /// Cart mutated (or attempted: `changed` is false when every item
    /// was unknown or already absent)
    CartUpdated { changed: bool },
    /// Cart emptied unconditionally
    CartCleared,
    /// Checkout finalized into a transaction
    CheckedOut(Transaction),
    /// Checkout refused: the cart was empty
    CheckoutRefused,
    /// Informational intent, no state change
    Info,
    /// Low-confidence or unrecognized intent, no state change
    Unclear,
}

/// What the caller renders/speaks after applying a command
#[derive(Debug, Clone)]
pub struct AppliedResponse {
    pub outcome: Applied,
    pub voice_response: String,
    pub suggestion: Option<String>,
}

/// One cashier session
///
/// Owns the cart exclusively; history and settings are loaded from the
/// injected store at creation and written back on every change.
pub struct Session {
    cart: Vec<CartLine>,
    history: Vec<Transaction>,
    settings: Settings,
    menu: Menu,
    store: Box<dyn StateStore>,
    busy: bool,
}

impl Session {
    /// Create a session, loading persisted settings and history
    pub fn new(store: Box<dyn StateStore>) -> KasirResult<Self> {
        Self::with_menu(store, Menu::warung())
    }

    pub fn with_menu(store: Box<dyn StateStore>, menu: Menu) -> KasirResult<Self> {
        let settings = store.load_settings()?.unwrap_or_default();
        let history = store.load_history()?;
        Ok(Self {
            cart: vec![],
            history,
            settings,
            menu,
            store,
            busy: false,
        })
    }

    // ========== 读取访问 ==========

    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    pub fn total(&self) -> i64 {
        cart_total(&self.cart)
    }

    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Busy flag: one interpretation outstanding at a time. The UI must
    /// not start a new voice capture while this is set; in-flight calls
    /// are never cancelled.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Mark an interpretation as in flight. Returns false when one
    /// already is (the caller should ignore the new capture).
    pub fn begin_interpretation(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish_interpretation(&mut self) {
        self.busy = false;
    }

    // ========== 设置与凭证 ==========

    pub fn update_settings(&mut self, settings: Settings) -> KasirResult<()> {
        self.settings = settings;
        self.store.save_settings(&self.settings)?;
        Ok(())
    }

    pub fn api_key(&self) -> KasirResult<Option<String>> {
        Ok(self.store.load_api_key()?)
    }

    pub fn save_api_key(&self, key: &str) -> KasirResult<()> {
        Ok(self.store.save_api_key(key)?)
    }

    // ========== 指令应用 ==========

    /// Apply one interpreted command to the session state
    ///
    /// Dispatch is a pure per-call switch on the intent label; every
    /// utterance is classified independently.
    pub fn apply_command(&mut self, command: &InterpretedCommand) -> KasirResult<AppliedResponse> {
        match command.intent {
            Intent::Checkout => self.apply_checkout(command),
            Intent::ClearCart => {
                self.cart.clear();
                Ok(AppliedResponse {
                    outcome: Applied::CartCleared,
                    voice_response: voice_or(&command.voice_response, "Semua pesanan dibatalkan"),
                    suggestion: command.suggestion.clone(),
                })
            }
            Intent::AddItem | Intent::RemoveItem => {
                let changed = self.apply_items(command);
                Ok(AppliedResponse {
                    outcome: Applied::CartUpdated { changed },
                    voice_response: voice_or(&command.voice_response, "Pesanan diperbarui"),
                    suggestion: command.suggestion.clone(),
                })
            }
            Intent::Query | Intent::Greeting | Intent::RefusePay | Intent::OutOfContext => {
                Ok(AppliedResponse {
                    outcome: Applied::Info,
                    voice_response: voice_or(&command.voice_response, "Ada yang bisa saya bantu?"),
                    suggestion: command.suggestion.clone(),
                })
            }
            Intent::Unclear => Ok(AppliedResponse {
                outcome: Applied::Unclear,
                voice_response: voice_or(
                    &command.voice_response,
                    "Maaf, coba ulangi pesanan Anda.",
                ),
                suggestion: None,
            }),
        }
    }

    /// Add one unit of a product by (possibly informal) name
    ///
    /// Used by suggestion quick-actions. Returns false for unknown names.
    pub fn quick_add(&mut self, name: &str) -> bool {
        let Some(item) = self.menu.resolve(name) else {
            return false;
        };
        let (name, price) = (item.name.clone(), item.price);
        self.add_to_cart(&name, 1, price);
        true
    }

    fn apply_items(&mut self, command: &InterpretedCommand) -> bool {
        let mut changed = false;

        for entry in &command.items {
            // Unknown product: skipped silently, not an error
            let Some(name) = entry.name.as_deref() else {
                continue;
            };
            let Some(item) = self.menu.resolve(name) else {
                tracing::debug!(name, "Skipping unknown product");
                continue;
            };
            let (canonical, price) = (item.name.clone(), item.price);

            match entry.action {
                ItemAction::Add => {
                    self.add_to_cart(&canonical, entry.quantity, price);
                    changed = true;
                }
                ItemAction::Remove => {
                    // Remove deletes the whole line regardless of the
                    // requested quantity.
                    let before = self.cart.len();
                    self.cart.retain(|line| line.name != canonical);
                    if self.cart.len() != before {
                        changed = true;
                    }
                }
            }
        }

        changed
    }

    fn add_to_cart(&mut self, name: &str, quantity: i64, price: i64) {
        match self.cart.iter_mut().find(|line| line.name == name) {
            Some(line) => line.quantity += quantity,
            None => self.cart.push(CartLine::new(name, quantity, price)),
        }
    }

    fn apply_checkout(&mut self, command: &InterpretedCommand) -> KasirResult<AppliedResponse> {
        if self.cart.is_empty() {
            return Ok(AppliedResponse {
                outcome: Applied::CheckoutRefused,
                voice_response: "Keranjang masih kosong. Silakan pesan dulu.".to_string(),
                suggestion: None,
            });
        }

        let transaction = self.checkout()?;
        Ok(AppliedResponse {
            outcome: Applied::CheckedOut(transaction),
            voice_response: voice_or(&command.voice_response, "Baik, memproses pembayaran..."),
            suggestion: command.suggestion.clone(),
        })
    }

    /// Finalize the cart into an immutable transaction
    ///
    /// Snapshot lines, prepend to history, cap at [`MAX_HISTORY`]
    /// (oldest dropped), persist, then clear the cart.
    pub fn checkout(&mut self) -> KasirResult<Transaction> {
        let transaction = Transaction::from_cart(&self.cart);
        self.history.insert(0, transaction.clone());
        self.history.truncate(MAX_HISTORY);
        self.store.save_history(&self.history)?;
        self.cart.clear();
        Ok(transaction)
    }
}

/// Model responses can come back blank; fall back to a fixed phrase
fn voice_or(voice: &str, fallback: &str) -> String {
    if voice.trim().is_empty() {
        fallback.to_string()
    } else {
        voice.to_string()
    }
}
