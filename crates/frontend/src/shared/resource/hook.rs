use std::fmt::Debug;
use std::future::Future;
use std::rc::Rc;

use contracts::shared::envelope::ApiResponse;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::state::{Completion, FailurePolicy, ResourceCell};

/// Реактивное представление ресурса для компонентов
pub struct ResourceHandle<T: Send + Sync + 'static> {
    pub value: Signal<T>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    refresh: Trigger,
}

impl<T: Send + Sync + 'static> Clone for ResourceHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ResourceHandle<T> {}

impl<T: Send + Sync + 'static> ResourceHandle<T> {
    /// Перезагрузить с текущими зависимостями
    pub fn refresh(&self) {
        self.refresh.notify();
    }
}

/// Загрузка ресурса, привязанная к жизненному циклу компонента.
///
/// `key_fn` читает зависимости (отслеживается реактивно) и возвращает
/// `None`, когда обязательная зависимость пуста. На каждое изменение ключа
/// или `refresh()` запускается `fetch_fn`; устаревшие ответы и ответы
/// после размонтирования отбрасываются. `refresh()` во время загрузки
/// с тем же ключом не теряется: после ответа запрос выполняется повторно.
pub fn use_resource<K, T, F, Fut>(
    key_fn: impl Fn() -> Option<K> + 'static,
    fetch_fn: F,
    policy: FailurePolicy,
) -> ResourceHandle<T>
where
    K: Clone + PartialEq + Debug + Send + Sync + 'static,
    T: Clone + Default + Send + Sync + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = ApiResponse<T>> + 'static,
{
    let cell = RwSignal::new(ResourceCell::<K, T>::new(policy));
    let refresh = Trigger::new();
    let fetch_fn = Rc::new(fetch_fn);

    Effect::new(move |_| {
        refresh.track();
        let key = key_fn();

        let ticket = cell
            .try_update(|c| match key {
                Some(key) => c.begin(key),
                None => {
                    c.skip();
                    None
                }
            })
            .flatten();

        let Some(ticket) = ticket else {
            return;
        };

        let fetch_fn = fetch_fn.clone();
        spawn_local(async move {
            let mut ticket = ticket;
            loop {
                log::debug!("resource fetch started: {:?}", ticket.key);
                let response = fetch_fn(ticket.key.clone()).await;
                if let Some(message) = response.message.as_deref().filter(|_| !response.success) {
                    log::warn!("resource fetch failed ({:?}): {}", ticket.key, message);
                }
                match cell.try_update(|c| c.complete(&ticket, response)) {
                    Some(Completion::Applied) => break,
                    Some(Completion::Refetch(next)) => {
                        log::debug!("refresh requested during fetch, refetching: {:?}", next.key);
                        ticket = next;
                    }
                    Some(Completion::Stale) | None => {
                        log::debug!("stale resource response discarded: {:?}", ticket.key);
                        break;
                    }
                }
            }
        });
    });

    on_cleanup(move || {
        cell.try_update(|c| c.dispose());
    });

    ResourceHandle {
        value: Signal::derive(move || cell.with(|c| c.state().value.clone())),
        loading: Signal::derive(move || cell.with(|c| c.state().loading)),
        error: Signal::derive(move || cell.with(|c| c.state().error.clone())),
        refresh,
    }
}
