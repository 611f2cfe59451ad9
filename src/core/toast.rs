use std::collections::VecDeque;

use crate::core::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// A user-visible message produced by an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

impl From<&AppError> for Toast {
    fn from(err: &AppError) -> Self {
        Toast::error(err.to_string())
    }
}

/// Bounded queue; the oldest toast is dropped once full.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    const CAPACITY: usize = 8;

    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() == Self::CAPACITY {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn dismiss(&mut self) {
        self.toasts.pop_front();
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
