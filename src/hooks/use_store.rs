use std::rc::Rc;

use yew::prelude::*;

use crate::services::store::{InMemoryStore, StoreAction};

impl Reducible for InMemoryStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.apply(action) {
            Ok(()) => next.into(),
            Err(e) => {
                gloo::console::warn!(format!("Store update rejected: {e}"));
                self
            }
        }
    }
}

pub type StoreHandle = UseReducerHandle<InMemoryStore>;

/// App-wide store, created once at the root and handed to each page.
#[hook]
pub fn use_store() -> StoreHandle {
    use_reducer(InMemoryStore::seeded)
}
