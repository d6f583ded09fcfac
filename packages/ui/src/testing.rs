//! Helpers for mounting hooks in a headless `VirtualDom`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::{ApiConfig, MemoryTransport};
use dioxus::dioxus_core::VirtualDom;
use dioxus::prelude::*;

use crate::client::Client;

/// Every value a component saw while rendering, oldest first.
pub struct Recorder<V>(Rc<RefCell<Vec<V>>>);

impl<V> Clone for Recorder<V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<V> Default for Recorder<V> {
    fn default() -> Self {
        Self(Rc::default())
    }
}

impl<V: Clone> Recorder<V> {
    pub fn push(&self, value: V) {
        self.0.borrow_mut().push(value);
    }

    pub fn all(&self) -> Vec<V> {
        self.0.borrow().clone()
    }

    pub fn last(&self) -> Option<V> {
        self.0.borrow().last().cloned()
    }
}

pub fn client(transport: &MemoryTransport) -> Client {
    let config = ApiConfig::new("http://testserver", "tok").unwrap();
    Client::new(transport.clone(), config)
}

/// Build `app` with `client` and `recorder` in its root context and run the
/// first render.
pub fn mount<V: 'static>(
    app: fn() -> Element,
    client: Client,
    recorder: Recorder<V>,
) -> VirtualDom {
    let mut dom = VirtualDom::new(app)
        .with_root_context(client)
        .with_root_context(recorder);
    dom.rebuild_in_place();
    dom
}

/// Poll tasks and re-render until nothing is left to do.
pub async fn settle(dom: &mut VirtualDom) {
    while tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
        .await
        .is_ok()
    {
        dom.render_immediate_to_vec();
    }
}
