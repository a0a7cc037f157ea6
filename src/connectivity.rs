//! Connectivity Notices
//!
//! Tells the user when the browser drops offline or comes back.

use log::info;

use crate::messages::Messages;
use crate::notify::{Notify, Severity};

pub fn announce<N: Notify + ?Sized>(notifier: &N, messages: &Messages, online: bool) {
    info!("connectivity changed: online={}", online);
    if online {
        notifier.notify(messages.online(), Severity::Info);
    } else {
        notifier.notify(messages.offline(), Severity::Error);
    }
}
