//! Capabilities the dashboard host lends to the pager
//!
//! The module set and the notification bus belong to the host. The pager
//! reads modules and asks for show/hide through [`ModuleRegistry`] and
//! publishes notifications through [`NotificationBus`], so it can run (and
//! be tested) without a live host.

use crate::core::notifications::HostNotification;
use crate::data::ModuleInfo;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Host-owned module set
pub trait ModuleRegistry {
    /// Snapshot of every module the pager manages, in host order
    fn modules(&self) -> Vec<ModuleInfo>;

    /// Ask the host to show the module at host-order `slot` using a
    /// transition of `duration`
    fn show_module(&mut self, slot: usize, duration: Duration);

    /// Ask the host to hide the module at host-order `slot`
    fn hide_module(&mut self, slot: usize, duration: Duration);
}

/// Host-owned notification bus
pub trait NotificationBus {
    fn send_notification(&mut self, notification: HostNotification);
}

impl NotificationBus for UnboundedSender<HostNotification> {
    fn send_notification(&mut self, notification: HostNotification) {
        if let Err(e) = self.send(notification) {
            tracing::warn!("Notification dropped, host receiver closed: {:?}", e.0);
        }
    }
}
