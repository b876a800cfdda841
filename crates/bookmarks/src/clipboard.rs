//! System clipboard access.
//!
//! The input handler only talks to the `Clipboard` trait; `SystemClipboard`
//! backs it with arboard at runtime.

use crate::error::{Error, Result};

pub trait Clipboard {
    fn get_text(&mut self) -> Result<String>;
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Opens the system clipboard on first use and keeps the handle, so text we
/// copy stays owned by this process on X11 until it exits.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|err| Error::Clipboard(format!("unavailable: {err}")))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| Error::Clipboard("unavailable".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Result<String> {
        self.handle()?
            .get_text()
            .map_err(|err| Error::Clipboard(err.to_string()))
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(|err| Error::Clipboard(err.to_string()))
    }
}

/// In-process clipboard for tests. Clones share the same contents, so a
/// test can keep one and hand the other to the app.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: std::rc::Rc<std::cell::RefCell<Option<String>>>,
    fail: bool,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        let clipboard = Self::default();
        *clipboard.text.borrow_mut() = Some(text.to_string());
        clipboard
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.text.borrow().clone()
    }
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<String> {
        if self.fail {
            return Err(Error::Clipboard("unavailable".to_string()));
        }
        self.text
            .borrow()
            .clone()
            .ok_or_else(|| Error::Clipboard("clipboard is empty".to_string()))
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Clipboard("unavailable".to_string()));
        }
        *self.text.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
