//! Owning heap slot for an [`EdgeHandler`] handed to C as a thin pointer.
//!
//! The platform ISR API takes a `void *` argument.  [`HandlerSlot`]
//! boxes the handler and frees it on drop, so every failed registration
//! step reclaims it by returning early.  Only [`HandlerSlot::leak`]
//! gives up ownership, once the interrupt is live.

use core::ffi::c_void;
use core::ptr::NonNull;

use crate::app::ports::EdgeHandler;

pub struct HandlerSlot(NonNull<EdgeHandler>);

impl HandlerSlot {
    pub fn new(handler: EdgeHandler) -> Self {
        Self(NonNull::from(Box::leak(Box::new(handler))))
    }

    /// Pointer to pass as the ISR argument.  Stays owned by the slot.
    pub fn as_arg(&self) -> *mut c_void {
        self.0.as_ptr().cast()
    }

    /// Hand the handler to the interrupt for the rest of the program.
    pub fn leak(self) -> *mut c_void {
        let arg = self.as_arg();
        core::mem::forget(self);
        arg
    }
}

impl Drop for HandlerSlot {
    fn drop(&mut self) {
        // SAFETY: the pointer came from `Box::leak` in `new` and was not
        // leaked for good, so the slot is its only owner.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) });
    }
}

/// Run the handler behind an ISR argument.
///
/// # Safety
///
/// `arg` must come from [`HandlerSlot::as_arg`] or [`HandlerSlot::leak`]
/// with the handler still alive, and no other reference to it may be
/// live during the call.
pub unsafe fn invoke(arg: *mut c_void) {
    let handler = unsafe { &mut *arg.cast::<EdgeHandler>() };
    handler();
}
