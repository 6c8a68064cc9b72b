//! Scoped ownership of an on-device model resource.

use std::ops::{Deref, DerefMut};

use reright_protocols::OnDeviceResource;

/// Owns a session or rewriter and destroys it when dropped.
///
/// Release happens exactly once on every exit path, including early returns,
/// errors and a cancelled future.
pub struct Scoped<R: OnDeviceResource + ?Sized> {
    inner: Box<R>,
}

impl<R: OnDeviceResource + ?Sized> Scoped<R> {
    pub fn new(inner: Box<R>) -> Self {
        Self { inner }
    }
}

impl<R: OnDeviceResource + ?Sized> Deref for Scoped<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.inner
    }
}

impl<R: OnDeviceResource + ?Sized> DerefMut for Scoped<R> {
    fn deref_mut(&mut self) -> &mut R {
        &mut self.inner
    }
}

impl<R: OnDeviceResource + ?Sized> Drop for Scoped<R> {
    fn drop(&mut self) {
        self.inner.destroy();
    }
}
